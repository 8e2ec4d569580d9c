use clap::ValueEnum;

/// CLI output format selection.
///
/// Controls whether commands print workflow commands and plain text, or JSON for scripting.
#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum FormatOptions {
    /// JSON format for downstream scripts
    #[value(name = "json")]
    Json,
    /// Workflow commands and plain text for the runner log
    #[value(name = "stdout")]
    Stdout,
}
