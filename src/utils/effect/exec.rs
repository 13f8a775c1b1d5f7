use std::process::Output;

#[cfg(test)]
use anyhow::Error as AnyhowError;
use async_trait::async_trait;
use camino::Utf8PathBuf;
use tokio::process::Command;

/// Runs an executable to completion and captures its output
#[cfg_attr(test, mockall::automock(type Error = AnyhowError;))]
#[async_trait]
pub trait ExecCommand {
    type Error: std::fmt::Debug + std::fmt::Display + Send + Sync + 'static;
    async fn exec_command<'a>(
        &self,
        exe: &Utf8PathBuf,
        args: &[&'a str],
        current_dir: &Utf8PathBuf,
    ) -> Result<Output, Self::Error>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommand;

#[async_trait]
impl ExecCommand for TokioCommand {
    type Error = std::io::Error;
    async fn exec_command<'a>(
        &self,
        exe: &Utf8PathBuf,
        args: &[&'a str],
        current_dir: &Utf8PathBuf,
    ) -> Result<Output, Self::Error> {
        tracing::debug!("running `{} {}` in {}", exe, args.join(" "), current_dir);
        Command::new(exe)
            .args(args)
            .current_dir(current_dir)
            .output()
            .await
    }
}
