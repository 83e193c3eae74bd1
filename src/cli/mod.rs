pub mod commands;
pub mod logging;
pub mod panels;

pub use commands::{Cli, Commands, run};
pub use logging::{LogLevel, init_logging};
