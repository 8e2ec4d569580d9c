mod format_options;
mod global_options;

pub use format_options::FormatOptions;
pub use global_options::GlobalOptions;
