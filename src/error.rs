use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum WeatherError {
    #[error("Unknown data source: {0} (expected 'remote' or 'local')")]
    UnknownSource(String),

    #[error("Unknown temperature scale: {0} (expected Celsius, Fahrenheit or Kelvin)")]
    UnknownScale(String),

    #[error("Invalid temperature threshold: {0}")]
    InvalidThreshold(String),

    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJsonError(#[from] serde_json::Error),
}

impl WeatherError {
    /// True for errors caused by bad user input. The caller should re-prompt
    /// or abort; these are never fatal to the process.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            WeatherError::UnknownSource(_)
                | WeatherError::UnknownScale(_)
                | WeatherError::InvalidThreshold(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WeatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_classification() {
        assert!(WeatherError::UnknownSource("x".into()).is_invalid_argument());
        assert!(WeatherError::UnknownScale("x".into()).is_invalid_argument());
        assert!(WeatherError::InvalidThreshold("x".into()).is_invalid_argument());

        let io = WeatherError::from(std::io::Error::other("closed"));
        assert!(!io.is_invalid_argument());
    }

    #[test]
    fn test_message_names_the_bad_input() {
        let err = WeatherError::UnknownScale("Rankine".into());
        assert!(err.to_string().contains("Rankine"));
    }
}
