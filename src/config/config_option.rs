use crate::types::err::ConfigError;

/// A configuration option, with a name, bounds, and a value.
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

    /// Sets the value of the option, if the value is within bounds.
    pub fn set(&mut self, value: T) -> Result<(), ConfigError> {
        match self.min <= value && value <= self.max {
            true => {
                self.value = value;
                Ok(())
            }
            false => Err(ConfigError::OutOfRange(self.name)),
        }
    }
}

#[cfg(test)]
mod config_option_tests {
    use super::*;

    #[test]
    fn bounds() {
        let mut option = ConfigOption {
            name: "limit",
            min: 1,
            max: 10,
            value: 5,
        };

        assert!(option.set(10).is_ok());
        assert_eq!(option.value, 10);
        assert_eq!(option.set(11), Err(ConfigError::OutOfRange("limit")));
        assert_eq!(option.set(0), Err(ConfigError::OutOfRange("limit")));
        assert_eq!(option.value, 10);
    }
}
