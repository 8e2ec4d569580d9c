//! GitHub workflow commands, printed to stdout as `::name key=value::message`.

/// Escape a command message
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a command property value
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Format a workflow command line. Properties with empty values are skipped.
pub fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let properties = properties
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={}", escape_property(value)))
        .collect::<Vec<_>>()
        .join(",");
    if properties.is_empty() {
        format!("::{command}::{}", escape_data(message))
    } else {
        format!("::{command} {properties}::{}", escape_data(message))
    }
}

/// Annotate the run with a notice shown on the workflow summary
pub fn notice(title: &str, message: &str) {
    println!("{}", format_command("notice", &[("title", title)], message));
}

/// Only shown when the `ACTIONS_STEP_DEBUG` secret is set
pub fn debug(message: &str) {
    println!("{}", format_command("debug", &[], message));
}

/// Annotate the run with an error
pub fn error(message: &str) {
    println!("{}", format_command("error", &[], message));
}

/// Start a collapsible group in the step log
pub fn start_group(name: &str) {
    println!("{}", format_command("group", &[], name));
}

/// Close the group opened by [`start_group`]
pub fn end_group() {
    println!("{}", format_command("endgroup", &[], ""));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("100%", "100%25")]
    #[case("a\nb", "a%0Ab")]
    #[case("a\r\nb", "a%0D%0Ab")]
    #[case("k: v, w", "k: v, w")]
    fn test_escape_data(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_data(input), expected);
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("k: v, w", "k%3A v%2C w")]
    #[case("50%\n", "50%25%0A")]
    fn test_escape_property(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_property(input), expected);
    }

    #[test]
    fn test_format_notice() {
        let line = format_command(
            "notice",
            &[("title", "This run will release 'v1.2023.4'")],
            "do_release=true\npom_version=1.2023.4",
        );
        assert_eq!(
            line,
            "::notice title=This run will release 'v1.2023.4'::do_release=true%0Apom_version=1.2023.4"
        );
    }

    #[test]
    fn test_format_skips_empty_properties() {
        assert_eq!(
            format_command("notice", &[("title", "")], "hello"),
            "::notice::hello"
        );
    }

    #[test]
    fn test_format_end_group() {
        assert_eq!(format_command("endgroup", &[], ""), "::endgroup::");
    }
}
