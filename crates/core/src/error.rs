use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoreError {
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_display() {
        let err = CoreError::MissingEnv("REF_TYPE");
        assert_eq!(err.to_string(), "Environment variable REF_TYPE is not set");
    }
}
