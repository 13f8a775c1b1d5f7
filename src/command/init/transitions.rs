use camino::{Utf8Path, Utf8PathBuf};
use mevn_std::{Fs, hyperlink, infoln};

use super::config::ProjectConfig;
use super::errors::InitError;
use super::helpers::display_project_created_message;
use super::options::{NuxtOpt, ProjectNameOpt, ProjectTemplateOpt, RenderingMode};
use super::prompts::Prompt;
use super::runtime_config::set_universal_mode;
use super::spinner::Spinner;
use super::states::*;
use super::template::TemplateKind;
use crate::command::MevnOutput;
use crate::utils::effect::exec::ExecCommand;
use crate::utils::effect::remove_dir::RemoveDirTree;
use crate::utils::git::Git;
use crate::{CLI_NAME, MevnResult};

const COMMIT_SUBJECT: &str = "Initial commit";

/// PROMPT UX:
/// =========
///
/// ? Name your project
impl Welcome {
    pub fn new() -> Self {
        Welcome {}
    }

    pub fn name_project(
        self,
        options: &ProjectNameOpt,
        working_dir: Utf8PathBuf,
        prompt: &impl Prompt,
    ) -> MevnResult<ProjectNamed> {
        options.ensure_single_name()?;
        let project_name = options.get_or_prompt_project_name(prompt)?;

        // checked once; a directory appearing before the clone is reported by git
        let project_dir = working_dir.join(project_name.as_str());
        if Fs::path_exists(&project_dir) {
            return Err(InitError::DirectoryExists {
                path: Utf8PathBuf::from(project_name.as_str()),
            }
            .into());
        }

        Ok(ProjectNamed {
            working_dir,
            project_name,
        })
    }
}

/// PROMPT UX:
/// =========
///
/// ? Please choose a starter template from the list below
/// > basic
///   pwa
///   graphql
///   Nuxt-js
impl ProjectNamed {
    pub fn select_template(
        self,
        options: &ProjectTemplateOpt,
        prompt: &impl Prompt,
    ) -> MevnResult<TemplateSelected> {
        let template = options.get_or_prompt_template(prompt)?;
        Ok(TemplateSelected {
            working_dir: self.working_dir,
            request: ProjectRequest {
                name: self.project_name,
                template,
            },
        })
    }
}

impl TemplateSelected {
    pub async fn check_git<E: ExecCommand + Sync>(self, git: &Git<E>) -> MevnResult<GitAvailable> {
        git.probe(&self.working_dir).await?;
        tracing::debug!("using git at {}", git.exe());
        Ok(GitAvailable {
            working_dir: self.working_dir,
            request: self.request,
        })
    }
}

impl GitAvailable {
    pub async fn fetch_template<E: ExecCommand + Sync>(
        self,
        git: &Git<E>,
    ) -> MevnResult<TemplateFetched> {
        let starter = self.request.template.starter();
        let name = self.request.name.as_str();

        let mut spinner = Spinner::new(&format!(
            "Fetching the {} template into {}",
            self.request.template, name
        ));
        if let Err(err) = git
            .clone_repo(starter.git_url, Utf8Path::new(name), &self.working_dir)
            .await
        {
            spinner.error("Could not fetch the template");
            return Err(err.into());
        }
        spinner.success(&format!(
            "Fetched the {} template from {}",
            self.request.template,
            hyperlink(starter.git_url)
        ));

        let project_dir = self.working_dir.join(name);
        let config = ProjectConfig::new(name, self.request.template);
        config.write(&project_dir)?;

        Ok(TemplateFetched {
            project_dir,
            request: self.request,
            config,
        })
    }
}

/// PROMPT UX (Nuxt-js only):
/// =========
///
/// ? Do you want PWA support? [y/N]
/// ? Choose your preferred mode
/// > Universal
///   SPA
impl TemplateFetched {
    pub fn configure(self, options: &NuxtOpt, prompt: &impl Prompt) -> MevnResult<ProjectConfigured> {
        let mut config = self.config;
        let mut unapplied_mode = None;
        options.warn_if_unused(self.request.template);

        if self.request.template == TemplateKind::Nuxt {
            if options.get_or_prompt_pwa(prompt)? {
                config = ProjectConfig::enable_pwa(&self.project_dir)?;
            }
            match options.get_or_prompt_mode(prompt)? {
                RenderingMode::Universal => {
                    // reported once the inherited history is replaced
                    if let Err(err) = set_universal_mode(&self.project_dir) {
                        if !matches!(
                            err.downcast_ref::<InitError>(),
                            Some(InitError::ModeLineNotFound { .. })
                        ) {
                            return Err(err);
                        }
                        unapplied_mode = Some(err);
                    }
                }
                RenderingMode::Spa => tracing::debug!("keeping the template's rendering mode"),
            }
        }

        Ok(ProjectConfigured {
            project_dir: self.project_dir,
            request: self.request,
            config,
            unapplied_mode,
        })
    }
}

impl ProjectConfigured {
    /// Drops the history inherited from the boilerplate and records the
    /// generated tree as a single fresh commit
    pub async fn finalize<E: ExecCommand + Sync>(
        self,
        git: &Git<E>,
        remover: &impl RemoveDirTree,
    ) -> MevnResult<ProjectCreated> {
        let git_dir = self.project_dir.join(".git");
        if Fs::path_exists(&git_dir) {
            remover.remove_dir_tree(&git_dir)?;
        }

        infoln!("Creating a fresh git repository");
        git.init(&self.project_dir).await?;
        git.add_all(&self.project_dir).await?;
        git.commit(
            &self.project_dir,
            COMMIT_SUBJECT,
            &format!("From {CLI_NAME}"),
        )
        .await?;

        if let Some(err) = self.unapplied_mode {
            return Err(err);
        }

        Ok(ProjectCreated {
            project_dir: self.project_dir,
            request: self.request,
            config: self.config,
        })
    }
}

impl ProjectCreated {
    pub fn complete(self) -> Completed {
        display_project_created_message(&self.request, &self.project_dir);
        Completed {
            config: self.config,
        }
    }
}

impl Completed {
    pub fn success(self) -> MevnOutput {
        tracing::debug!("created {:?}", self.config);
        MevnOutput::EmptySuccess
    }
}
