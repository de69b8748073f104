use crate::types::err::ConfigError;

/// A configurable value, together with a name and the (inclusive) bounds the value must fall within.
#[derive(Clone, Debug)]
pub struct ConfigOption<T> {
    pub name: &'static str,
    pub min: T,
    pub max: T,
    pub value: T,
}

impl<T: Clone + PartialOrd> ConfigOption<T> {
    pub fn min_max(&self) -> (T, T) {
        (self.min.clone(), self.max.clone())
    }

    /// Sets the value of the option, so long as the value is within the bounds of the option.
    ///
    /// ```rust
    /// # use hat_draw::config::Config;
    /// let mut config = Config::default();
    /// assert!(config.trials.set(500).is_ok());
    /// assert_eq!(config.trials.value, 500);
    ///
    /// assert!(config.trials.set(0).is_err());
    /// assert_eq!(config.trials.value, 500);
    /// ```
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        if self.min <= value && value <= self.max {
            self.value = value;
            Ok(())
        } else {
            Err(ConfigError::OutOfBounds(self.name))
        }
    }
}
