/*!
The experiment --- within which trials are made against some pool and target.

Strictly, a [GenericExperiment] and an [Experiment].

The generic experiment is generic over the source of randomness.
An [Experiment] fixes the source as [MinimalPCG32](crate::generic::random::MinimalPCG32), and so may be seeded from a [config](crate::config).

An experiment never holds a pool or target.
Instead, a pool and target are borrowed when [running](crate::procedures::experiment) an experiment, and each trial draws from a fresh clone of the pool.
So, a single experiment may be used for any number of pools and targets, with [counters](Counters) accumulating across runs.

# Example
```rust
# use hat_draw::config::Config;
# use hat_draw::experiment::Experiment;
# use hat_draw::structures::{pool::Pool, target::Target};
let mut config = Config::default();
config.draw_size.value = 5;
config.trials.value = 100;

let mut the_experiment = Experiment::from_config(config);

let pool = Pool::new([("red", 5)]).unwrap();
let target = Target::new([("red", 5)]).unwrap();

let estimate = the_experiment.run(&pool, &target).unwrap();
assert_eq!(estimate.probability(), 1.0);
assert_eq!(the_experiment.counters.trials, 100);
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericExperiment;
mod specific;
pub use specific::Experiment;
