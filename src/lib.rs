pub mod cli;
pub mod command;
mod error;
pub mod utils;

pub use command::MevnOutput;
pub use error::{MevnError, MevnErrorCode, MevnErrorSuggestion, MevnResult};

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name used in generated commit messages and user-facing copy
pub const CLI_NAME: &str = "mevn-cli";
