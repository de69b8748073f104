use hat_draw::{
    generic::random::MinimalPCG32,
    structures::pool::Pool,
    types::err::{ErrorKind, InvalidArgument},
};
use rand::{Rng, SeedableRng};

mod construction {

    use super::*;

    #[test]
    fn length_is_sum_of_counts() {
        let mut rng = MinimalPCG32::seed_from_u64(5);

        for _ in 0..100 {
            let composition = ["a", "b", "c", "d"]
                .into_iter()
                .map(|label| (label, rng.random_range(0..20_i64)))
                .collect::<Vec<_>>();
            let total: i64 = composition.iter().map(|(_, count)| count).sum();

            match Pool::new(composition.clone()) {
                Ok(pool) => {
                    assert_eq!(pool.len() as i64, total);
                    for (label, count) in composition {
                        assert_eq!(pool.count_of(label) as i64, count);
                    }
                }
                Err(e) => {
                    assert_eq!(total, 0);
                    assert_eq!(e, ErrorKind::InvalidArgument(InvalidArgument::EmptyPool));
                }
            }
        }
    }

    #[test]
    fn negative_count() {
        assert!(matches!(
            Pool::new([("red", 5), ("green", -2)]),
            Err(ErrorKind::InvalidArgument(InvalidArgument::NegativeCount { label, count: -2 })) if label == "green"
        ));
    }

    #[test]
    fn all_zero() {
        assert_eq!(
            Pool::new([("red", 0), ("green", 0)]),
            Err(ErrorKind::InvalidArgument(InvalidArgument::EmptyPool))
        );
    }
}

mod draw {

    use super::*;

    #[test]
    fn draw_within_size() {
        let mut rng = MinimalPCG32::seed_from_u64(17);
        let pool = Pool::new([("red", 5), ("green", 2), ("blue", 4)]).unwrap();

        for count in 0..=pool.len() {
            let mut hat = pool.clone();
            let sample = hat.draw(count, &mut rng);

            assert_eq!(sample.len(), count);
            assert_eq!(hat.len(), pool.len() - count);
            for label in ["red", "green", "blue"] {
                let drawn = sample.iter().filter(|item| *item == label).count();
                assert_eq!(hat.count_of(label) + drawn, pool.count_of(label));
            }
        }
    }

    #[test]
    fn draw_beyond_size() {
        let mut rng = MinimalPCG32::seed_from_u64(17);
        let mut hat = Pool::new([("red", 2), ("green", 1)]).unwrap();

        let sample = hat.draw(4, &mut rng);
        assert_eq!(sample.len(), 3);
        assert_eq!(hat.len(), 3);
    }

    #[test]
    fn exhaustion_respects_multiplicity() {
        let mut rng = MinimalPCG32::seed_from_u64(23);
        let pool = Pool::new([("red", 4), ("green", 3), ("blue", 2)]).unwrap();

        for _ in 0..50 {
            let mut hat = pool.clone();
            let mut drawn = Vec::default();
            while !hat.is_empty() {
                drawn.extend(hat.draw(2.min(hat.len()), &mut rng));
            }

            assert_eq!(drawn.len(), pool.len());
            for label in ["red", "green", "blue"] {
                let count = drawn.iter().filter(|item| *item == label).count();
                assert_eq!(count, pool.count_of(label));
            }
        }
    }

    #[test]
    fn remainder_after_oversized_draw() {
        let mut rng = MinimalPCG32::seed_from_u64(29);
        let mut hat = Pool::new([("red", 3)]).unwrap();

        assert_eq!(hat.draw(2, &mut rng).len(), 2);
        assert_eq!(hat.draw(2, &mut rng), vec!["red".to_string()]);
        assert_eq!(hat.len(), 1);
    }

    #[test]
    fn single_draws_are_uniform() {
        let mut rng = MinimalPCG32::seed_from_u64(31);
        let pool = Pool::new([("a", 1), ("b", 1), ("c", 1), ("d", 1)]).unwrap();
        let iterations = 20_000;

        let mut counts = [0_usize; 4];
        for _ in 0..iterations {
            let sample = pool.clone().draw(1, &mut rng);
            let index = ["a", "b", "c", "d"]
                .iter()
                .position(|label| sample[0] == *label)
                .unwrap();
            counts[index] += 1;
        }

        let expected = iterations / 4;
        for count in counts {
            let deviation = (count as f64 - expected as f64).abs() / expected as f64;
            assert!(deviation < 0.05, "{count} draws, expected ~{expected}");
        }
    }
}
