use std::env;

use calm_io::stderrln;
use clap::Parser;
use mevn_std::Style;

use crate::utils::env::MevnEnv;
use crate::utils::git::resolve_git_exe;
use crate::{MevnOutput, MevnResult, PKG_VERSION};

#[derive(Debug, Parser)]
pub struct Info {}

impl Info {
    pub fn run(&self, env_store: &MevnEnv) -> MevnResult<MevnOutput> {
        let os = os_info::get();

        // something like "/usr/bin/zsh" or "Unknown"
        let shell = env::var("SHELL").unwrap_or_else(|_| "Unknown".to_string());

        let location = env::current_exe()
            .ok()
            .and_then(|path| path.into_os_string().into_string().ok())
            .unwrap_or_else(|| "Unknown".to_string());

        stderrln!(
            "mevn Info:\nVersion: {}\nInstall Location: {}\nOS: {}\nShell: {}\nGit: {}",
            Style::Version.paint(PKG_VERSION),
            location,
            os,
            shell,
            resolve_git_exe(env_store)
        )?;

        Ok(MevnOutput::EmptySuccess)
    }
}
