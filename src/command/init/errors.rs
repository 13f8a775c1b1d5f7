use camino::Utf8PathBuf;
use thiserror::Error;

use super::validation::NameProblem;

/// Everything that can stop `mevn init` before the project is ready
#[derive(Debug, Error)]
pub enum InitError {
    #[error("Expected a single project name but also found: {}", .args.join(" "))]
    StrayArguments { args: Vec<String> },

    #[error("\"{name}\" is not a valid project name:{}", format_problems(.problems))]
    InvalidName {
        name: String,
        problems: Vec<NameProblem>,
    },

    #[error("Cannot create the project because \"{path}\" already exists.")]
    DirectoryExists { path: Utf8PathBuf },

    #[error("Could not run git at \"{exe}\".")]
    GitNotFound { exe: Utf8PathBuf },

    #[error("Could not clone the template from {url}: {reason}")]
    CloneFailed { url: String, reason: String },

    #[error("Could not find a line containing `mode` in {path}.")]
    ModeLineNotFound { path: Utf8PathBuf },

    #[error("No {what} selected.")]
    NothingSelected { what: &'static str },

    #[error("`{command}` failed: {reason}")]
    GitCommandFailed { command: String, reason: String },

    #[error("Could not parse {path}.")]
    InvalidConfig {
        path: Utf8PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn format_problems(problems: &[NameProblem]) -> String {
    problems
        .iter()
        .map(|problem| format!("\n  - {problem}"))
        .collect()
}
