mod config;
mod errors;
mod helpers;
mod options;
mod prompts;
mod runtime_config;
mod spinner;
mod states;
mod template;
mod transitions;
mod validation;

#[cfg(test)]
mod tests;

use camino::Utf8PathBuf;
use clap::Parser;

pub(crate) use config::CONFIG_FILE_NAME;
pub use errors::InitError;
pub use template::{StarterTemplate, TEMPLATES};

use self::prompts::{DialoguerPrompt, Prompt};
use self::options::{NuxtOpt, ProjectNameOpt, ProjectTemplateOpt};
use self::states::Welcome;
use crate::MevnResult;
use crate::command::MevnOutput;
use crate::utils::effect::exec::{ExecCommand, TokioCommand};
use crate::utils::effect::remove_dir::{NativeRemoveDirTree, RemoveDirTree};
use crate::utils::env::MevnEnv;
use crate::utils::git::{Git, resolve_git_exe};

#[derive(Debug, Parser)]
pub struct Init {
    #[clap(flatten)]
    project_name: ProjectNameOpt,

    #[clap(flatten)]
    template: ProjectTemplateOpt,

    #[clap(flatten)]
    nuxt: NuxtOpt,
}

impl Init {
    pub async fn run(&self, env_store: &MevnEnv) -> MevnResult<MevnOutput> {
        let working_dir = Utf8PathBuf::try_from(std::env::current_dir()?)?;
        let git = Git::new(resolve_git_exe(env_store), TokioCommand);
        self.run_in(working_dir, &DialoguerPrompt, &git, &NativeRemoveDirTree)
            .await
    }

    /// Walks every step of project creation, creating the project under `working_dir`
    pub(crate) async fn run_in<P, E, R>(
        &self,
        working_dir: Utf8PathBuf,
        prompt: &P,
        git: &Git<E>,
        remover: &R,
    ) -> MevnResult<MevnOutput>
    where
        P: Prompt,
        E: ExecCommand + Sync,
        R: RemoveDirTree,
    {
        let completed = Welcome::new()
            .name_project(&self.project_name, working_dir, prompt)?
            .select_template(&self.template, prompt)?
            .check_git(git)
            .await?
            .fetch_template(git)
            .await?
            .configure(&self.nuxt, prompt)?
            .finalize(git, remover)
            .await?
            .complete();

        Ok(completed.success())
    }
}
