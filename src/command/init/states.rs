use camino::Utf8PathBuf;

use super::config::ProjectConfig;
use super::options::ProjectName;
use super::template::TemplateKind;
use crate::MevnError;

/// What the user asked for once both questions are answered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub name: ProjectName,
    pub template: TemplateKind,
}

#[derive(Debug, Default)]
pub struct Welcome {}

#[derive(Debug)]
pub struct ProjectNamed {
    pub working_dir: Utf8PathBuf,
    pub project_name: ProjectName,
}

#[derive(Debug)]
pub struct TemplateSelected {
    pub working_dir: Utf8PathBuf,
    pub request: ProjectRequest,
}

#[derive(Debug)]
pub struct GitAvailable {
    pub working_dir: Utf8PathBuf,
    pub request: ProjectRequest,
}

#[derive(Debug)]
pub struct TemplateFetched {
    pub project_dir: Utf8PathBuf,
    pub request: ProjectRequest,
    pub config: ProjectConfig,
}

#[derive(Debug)]
pub struct ProjectConfigured {
    pub project_dir: Utf8PathBuf,
    pub request: ProjectRequest,
    pub config: ProjectConfig,
    /// Set when `nuxt.config.js` had no `mode` line to patch
    pub unapplied_mode: Option<MevnError>,
}

#[derive(Debug)]
pub struct ProjectCreated {
    pub project_dir: Utf8PathBuf,
    pub request: ProjectRequest,
    pub config: ProjectConfig,
}

#[derive(Debug)]
pub struct Completed {
    pub config: ProjectConfig,
}
