mod get_input;
mod get_workflow_config;
mod set_output;
mod workflow_command;

pub use get_input::{get_input, input_env_name};
pub use get_workflow_config::{CONFIG_FILE, get_workflow_config};
pub use set_output::{append_output, format_output, set_output, set_output_with};
pub use workflow_command::{
    debug, end_group, error, escape_data, escape_property, format_command, notice, start_group,
};
