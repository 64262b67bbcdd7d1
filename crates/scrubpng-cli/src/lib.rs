pub mod cli;
pub mod config;
pub mod inputs;
pub mod output;
pub mod progress;

pub use cli::{Cli, Commands, ConfigCommands};
pub use config::Config;
pub use inputs::InputResolver;
pub use output::OutputFormatter;
pub use progress::ProgressReporter;
