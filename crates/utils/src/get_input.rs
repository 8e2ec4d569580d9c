/// Environment variable the runner uses for an action input
pub fn input_env_name(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Read an action input, trimmed. Unset inputs read as an empty string.
pub fn get_input(name: &str) -> String {
    std::env::var(input_env_name(name))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    #[rstest]
    #[case("milliseconds", "INPUT_MILLISECONDS")]
    #[case("java version", "INPUT_JAVA_VERSION")]
    #[case("pom-version", "INPUT_POM-VERSION")]
    fn test_input_env_name(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(input_env_name(name), expected);
    }

    #[test]
    #[serial]
    fn test_get_input_trims() {
        unsafe { std::env::set_var("INPUT_TEST_TRIMMED", "  500 \n") };
        assert_eq!(get_input("test trimmed"), "500");
        unsafe { std::env::remove_var("INPUT_TEST_TRIMMED") };
    }

    #[test]
    #[serial]
    fn test_get_input_unset() {
        unsafe { std::env::remove_var("INPUT_TEST_UNSET") };
        assert_eq!(get_input("test_unset"), "");
    }
}
