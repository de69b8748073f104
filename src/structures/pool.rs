/*!
A pool of labelled items, from which random samples are drawn without replacement.

A pool is built from a composition, a sequence of (label, count) pairs.
Each label is expanded to that many copies of the label, in the order given, and the copies are concatenated.

Items are removed from a pool only by a [draw](Pool::draw).
So, to draw from the same pool repeatedly, [clone](Clone::clone) the pool and draw from the clone.

# Example

```rust
# use hat_draw::structures::pool::Pool;
# use hat_draw::generic::random::MinimalPCG32;
# use rand::SeedableRng;
let mut rng = MinimalPCG32::seed_from_u64(3);
let pool = Pool::new([("red", 5), ("green", 2), ("blue", 4)]).unwrap();
assert_eq!(pool.len(), 11);

let mut hat = pool.clone();
let sample = hat.draw(5, &mut rng);
assert_eq!(sample.len(), 5);
assert_eq!(hat.len(), 6);

// The original pool is untouched.
assert_eq!(pool.len(), 11);
```
*/

use rand::Rng;

use crate::{
    misc::log::targets::{self},
    structures::Label,
    types::err::{self, ErrorKind},
};

/// A multiset of labelled items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool {
    /// The items of the pool, one label per item.
    ///
    /// The order of items is an artifact of construction and removal, and is irrelevant to any draw.
    contents: Vec<Label>,
}

impl Pool {
    /// Creates a pool from a composition of (label, count) pairs.
    ///
    /// Fails if any count is negative, naming the first such label, or if the pool would be empty.
    ///
    /// ```rust
    /// # use hat_draw::structures::pool::Pool;
    /// # use hat_draw::types::err::{ErrorKind, InvalidArgument};
    /// assert!(Pool::new([("red", 1), ("blue", 0)]).is_ok());
    ///
    /// assert_eq!(
    ///     Pool::new([("red", 0), ("blue", 0)]),
    ///     Err(ErrorKind::InvalidArgument(InvalidArgument::EmptyPool))
    /// );
    /// ```
    pub fn new<L: Into<Label>>(
        composition: impl IntoIterator<Item = (L, i64)>,
    ) -> Result<Self, ErrorKind> {
        let mut contents = Vec::default();

        for (label, count) in composition {
            let label = label.into();
            if count < 0 {
                log::debug!(target: targets::POOL, "Negative count {count} for {label}");
                return Err(ErrorKind::from(err::InvalidArgument::NegativeCount {
                    label,
                    count,
                }));
            }

            let copies = count as usize;
            contents.reserve(copies);
            contents.extend(std::iter::repeat(label).take(copies));
        }

        if contents.is_empty() {
            return Err(ErrorKind::from(err::InvalidArgument::EmptyPool));
        }

        log::debug!(target: targets::POOL, "Pool of {} items", contents.len());
        Ok(Pool { contents })
    }

    /// The items currently in the pool.
    pub fn contents(&self) -> &[Label] {
        &self.contents
    }

    /// A count of the items currently in the pool.
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// Whether the pool is empty, which is possible only after some draw.
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// A count of the items with the given label currently in the pool.
    pub fn count_of(&self, label: &str) -> usize {
        self.contents.iter().filter(|item| *item == label).count()
    }

    /// The (label, count) pairs of the pool, with labels in order of first occurrence.
    pub fn composition(&self) -> Vec<(Label, usize)> {
        let mut composition: Vec<(Label, usize)> = Vec::default();
        for item in &self.contents {
            match composition.iter_mut().find(|(label, _)| *label == *item) {
                Some((_, count)) => *count += 1,
                None => composition.push((item.clone(), 1)),
            }
        }
        composition
    }

    /// Draws `count` items uniformly at random, without replacement, and returns the drawn items.
    ///
    /// Each subset of `count` items is equally likely, and the drawn items are removed from the pool.
    ///
    /// If `count` exceeds the number of items in the pool, every item is returned *and the pool is left intact*.
    /// Note, this is unlike a draw of exactly as many items as the pool holds, which empties the pool.
    ///
    /// ```rust
    /// # use hat_draw::structures::pool::Pool;
    /// # use hat_draw::generic::random::MinimalPCG32;
    /// # use rand::SeedableRng;
    /// let mut rng = MinimalPCG32::seed_from_u64(0);
    /// let mut pool = Pool::new([("red", 2), ("blue", 1)]).unwrap();
    ///
    /// assert_eq!(pool.draw(4, &mut rng).len(), 3);
    /// assert_eq!(pool.len(), 3);
    ///
    /// assert_eq!(pool.draw(3, &mut rng).len(), 3);
    /// assert!(pool.is_empty());
    /// ```
    pub fn draw<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<Label> {
        if count > self.contents.len() {
            log::trace!(target: targets::POOL, "Draw of {count} from {} items, returning all", self.contents.len());
            return self.contents.clone();
        }

        let mut indices = rand::seq::index::sample(rng, self.contents.len(), count).into_vec();

        let drawn = indices
            .iter()
            .map(|index| self.contents[*index].clone())
            .collect::<Vec<_>>();

        // Removal from the back, so each swap moves an item which was not drawn.
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for index in indices {
            self.contents.swap_remove(index);
        }

        log::trace!(target: targets::POOL, "Drew {drawn:?}");
        drawn
    }
}

impl std::fmt::Display for Pool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pairs = self
            .composition()
            .into_iter()
            .map(|(label, count)| format!("{label}={count}"))
            .collect::<Vec<_>>();
        write!(f, "{}", pairs.join(", "))
    }
}

#[cfg(test)]
mod pool_tests {
    use super::*;
    use crate::generic::random::MinimalPCG32;
    use rand::SeedableRng;

    #[test]
    fn contents_follow_composition() {
        let pool = Pool::new([("red", 2), ("green", 0), ("blue", 1)]).unwrap();
        assert_eq!(pool.contents(), ["red", "red", "blue"]);
        assert_eq!(pool.count_of("green"), 0);
        assert_eq!(
            pool.composition(),
            vec![("red".to_string(), 2), ("blue".to_string(), 1)]
        );
    }

    #[test]
    fn negative_count_names_label() {
        let result = Pool::new([("red", 3), ("blue", -1), ("green", -2)]);
        assert_eq!(
            result,
            Err(ErrorKind::InvalidArgument(
                err::InvalidArgument::NegativeCount {
                    label: "blue".to_string(),
                    count: -1
                }
            ))
        );
    }

    #[test]
    fn empty_composition() {
        let result = Pool::new(Vec::<(&str, i64)>::new());
        assert_eq!(
            result,
            Err(ErrorKind::InvalidArgument(err::InvalidArgument::EmptyPool))
        );
    }

    #[test]
    fn draw_removes_exactly_the_sample() {
        let mut rng = MinimalPCG32::seed_from_u64(11);
        let mut pool = Pool::new([("red", 5), ("green", 2), ("blue", 4)]).unwrap();
        let before = pool.composition();

        let sample = pool.draw(5, &mut rng);
        assert_eq!(pool.len(), 6);

        for (label, count) in before {
            let drawn = sample.iter().filter(|item| **item == label).count();
            assert_eq!(pool.count_of(&label) + drawn, count);
        }
    }

    #[test]
    fn draw_zero() {
        let mut rng = MinimalPCG32::seed_from_u64(0);
        let mut pool = Pool::new([("red", 2)]).unwrap();

        assert!(pool.draw(0, &mut rng).is_empty());
        assert_eq!(pool.len(), 2);
    }

    #[test]
    fn oversized_draw_keeps_contents() {
        let mut rng = MinimalPCG32::seed_from_u64(0);
        let mut pool = Pool::new([("red", 2), ("blue", 1)]).unwrap();

        let sample = pool.draw(10, &mut rng);
        assert_eq!(sample, ["red", "red", "blue"]);
        assert_eq!(pool.contents(), ["red", "red", "blue"]);
    }

    #[test]
    fn display() {
        let pool = Pool::new([("red", 5), ("green", 2)]).unwrap();
        assert_eq!(pool.to_string(), "red=5, green=2");
    }
}
