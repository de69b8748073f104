/*!
Configuration of an experiment.

All configuration for an [experiment](crate::experiment) is contained within a [Config].
Each value is wrapped in a [ConfigOption], which records the bounds a value must fall within.

# Example

```rust
# use hat_draw::config::Config;
let config = Config {
    draw_size: hat_draw::config::ConfigOption {
        value: 3,
        ..Config::default().draw_size
    },
    ..Default::default()
};

assert_eq!(config.draw_size.value, 3);
assert_eq!(config.trials.value, 2000);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// Representation for the seed of an experiment's source of rng.
pub type Seed = u64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of items drawn from the pool in each trial.
    pub draw_size: ConfigOption<usize>,

    /// The number of trials made when running an experiment.
    pub trials: ConfigOption<usize>,

    /// The seed of the source of rng, when the source is seeded from a config.
    pub seed: ConfigOption<Seed>,
}

impl Default for Config {
    /// The default config matches the illustrative experiment of five draws, repeated two thousand times.
    fn default() -> Self {
        Config {
            draw_size: ConfigOption {
                name: "draw_size",
                min: 0,
                max: usize::MAX,
                value: 5,
            },

            trials: ConfigOption {
                name: "trials",
                min: 1,
                max: usize::MAX,
                value: 2000,
            },

            seed: ConfigOption {
                name: "seed",
                min: Seed::MIN,
                max: Seed::MAX,
                value: 0,
            },
        }
    }
}
