pub mod config;
pub mod environment;
pub mod error;
pub mod event_kind;
pub mod workflow_configuration;

pub use config::Config;
pub use environment::Environment;
pub use error::CoreError;
pub use event_kind::EventKind;
pub use workflow_configuration::{WorkflowConfiguration, decide, strip_tag_prefix};
