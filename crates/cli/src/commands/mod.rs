mod config;
mod configure;
mod version;
mod wait;

pub use config::ConfigArgs;
pub use config::handle_config;
pub use configure::ConfigureArgs;
pub use configure::handle_configure;
pub use version::VersionArgs;
pub use version::handle_version;
pub use wait::WaitArgs;
pub use wait::handle_wait;
