use camino::{Utf8Path, Utf8PathBuf};
use mevn_std::Fs;
use serde::{Deserialize, Serialize};

use super::errors::InitError;
use super::template::TemplateKind;
use crate::MevnResult;

pub const CONFIG_FILE_NAME: &str = "mevn.json";

/// The project marker written to `mevn.json`; later mevn commands rely on it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub template: TemplateKind,
    #[serde(
        rename = "isPwa",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_pwa: Option<bool>,
}

impl ProjectConfig {
    pub fn new(name: impl Into<String>, template: TemplateKind) -> Self {
        Self {
            name: name.into(),
            template,
            is_pwa: None,
        }
    }

    pub fn path_in(project_dir: &Utf8Path) -> Utf8PathBuf {
        project_dir.join(CONFIG_FILE_NAME)
    }

    pub fn write(&self, project_dir: &Utf8Path) -> MevnResult<()> {
        let path = Self::path_in(project_dir);
        let mut contents = serde_json::to_string_pretty(self)
            .map_err(|source| InitError::InvalidConfig {
                path: path.clone(),
                source,
            })?;
        contents.push('\n');
        Fs::write_file(&path, contents)?;
        tracing::debug!("wrote {}", path);
        Ok(())
    }

    pub fn read(project_dir: &Utf8Path) -> MevnResult<Self> {
        let path = Self::path_in(project_dir);
        let contents = Fs::read_file(&path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|source| InitError::InvalidConfig { path, source })?;
        Ok(config)
    }

    /// Re-reads the file from disk, flags PWA support and writes it back,
    /// so anything the template shipped in `mevn.json` is kept as-is
    pub fn enable_pwa(project_dir: &Utf8Path) -> MevnResult<Self> {
        let mut config = Self::read(project_dir)?;
        config.is_pwa = Some(true);
        config.write(project_dir)?;
        Ok(config)
    }
}
