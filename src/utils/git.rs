use std::io;
use std::process::Output;

use camino::{Utf8Path, Utf8PathBuf};
use tap::TapFallible;

use crate::command::init::InitError;
use crate::utils::effect::exec::ExecCommand;
use crate::utils::env::{MevnEnv, MevnEnvKey};

const GIT: &str = "git";

/// Resolves which git executable to run: `$MEVN_GIT_PATH` when set,
/// otherwise the first `git` on `PATH`, otherwise the bare name so the
/// help probe can report it missing.
pub fn resolve_git_exe(env_store: &MevnEnv) -> Utf8PathBuf {
    if let Some(path) = git_path_override(env_store.get(MevnEnvKey::GitPath)) {
        return path;
    }
    which::which(GIT)
        .ok()
        .and_then(|path| Utf8PathBuf::from_path_buf(path).ok())
        .unwrap_or_else(|| Utf8PathBuf::from(GIT))
}

fn git_path_override(lookup: io::Result<Option<String>>) -> Option<Utf8PathBuf> {
    match lookup {
        Ok(path) => path.map(Utf8PathBuf::from),
        Err(err) => {
            tracing::warn!(
                "ignoring ${}, looking for git on PATH instead: {}",
                MevnEnvKey::GitPath,
                err
            );
            None
        }
    }
}

/// Thin wrapper over the git command line client
#[derive(Debug)]
pub struct Git<E> {
    exe: Utf8PathBuf,
    exec: E,
}

impl<E: ExecCommand + Sync> Git<E> {
    pub fn new(exe: Utf8PathBuf, exec: E) -> Self {
        Self { exe, exec }
    }

    pub fn exe(&self) -> &Utf8Path {
        &self.exe
    }

    /// Checks that git can be launched at all by asking it for its help text
    pub async fn probe(&self, current_dir: &Utf8PathBuf) -> Result<(), InitError> {
        let output = self
            .exec
            .exec_command(&self.exe, &["--help"], current_dir)
            .await
            .tap_err(|err| tracing::debug!("git probe failed: {}", err))
            .map_err(|_| InitError::GitNotFound {
                exe: self.exe.clone(),
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(InitError::GitNotFound {
                exe: self.exe.clone(),
            })
        }
    }

    /// Clones `url` into `destination`, relative to `current_dir`
    pub async fn clone_repo(
        &self,
        url: &str,
        destination: &Utf8Path,
        current_dir: &Utf8PathBuf,
    ) -> Result<(), InitError> {
        let output = self
            .exec
            .exec_command(&self.exe, &["clone", url, destination.as_str()], current_dir)
            .await
            .map_err(|err| InitError::CloneFailed {
                url: url.to_string(),
                reason: err.to_string(),
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(InitError::CloneFailed {
                url: url.to_string(),
                reason: stderr_of(&output),
            })
        }
    }

    pub async fn init(&self, repo: &Utf8PathBuf) -> Result<(), InitError> {
        self.run_step(&["init"], repo).await
    }

    pub async fn add_all(&self, repo: &Utf8PathBuf) -> Result<(), InitError> {
        self.run_step(&["add", "."], repo).await
    }

    /// Commits the staged tree with a subject line and a body paragraph
    pub async fn commit(
        &self,
        repo: &Utf8PathBuf,
        subject: &str,
        body: &str,
    ) -> Result<(), InitError> {
        self.run_step(&["commit", "-m", subject, "-m", body], repo)
            .await
    }

    async fn run_step(&self, args: &[&str], repo: &Utf8PathBuf) -> Result<(), InitError> {
        let command = format!("git {}", args.join(" "));
        let output = self
            .exec
            .exec_command(&self.exe, args, repo)
            .await
            .map_err(|err| InitError::GitCommandFailed {
                command: command.clone(),
                reason: err.to_string(),
            })?;
        if output.status.success() {
            Ok(())
        } else {
            Err(InitError::GitCommandFailed {
                command,
                reason: stderr_of(&output),
            })
        }
    }
}

fn stderr_of(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if stderr.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        stderr
    }
}
