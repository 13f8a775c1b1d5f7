use std::fmt::{self, Display};

use clap::{Parser, ValueEnum};
use mevn_std::warnln;

use crate::command::init::errors::InitError;
use crate::command::init::prompts::Prompt;
use crate::command::init::template::TemplateKind;
use crate::MevnResult;

/// Follow-up questions only the Nuxt.js boilerplate asks
#[derive(Debug, Clone, Parser, Default)]
pub struct NuxtOpt {
    /// Add progressive web app support (Nuxt-js template only)
    #[arg(
        long = "pwa",
        num_args = 0..=1,
        default_missing_value = "true",
        value_name = "BOOL"
    )]
    pub(crate) pwa: Option<bool>,

    /// Rendering mode (Nuxt-js template only)
    #[arg(long = "mode", value_enum)]
    pub(crate) mode: Option<RenderingMode>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum RenderingMode {
    Universal,
    Spa,
}

impl RenderingMode {
    const CHOICES: [RenderingMode; 2] = [RenderingMode::Universal, RenderingMode::Spa];
}

impl Display for RenderingMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let readable = match self {
            RenderingMode::Universal => "Universal",
            RenderingMode::Spa => "SPA",
        };
        write!(f, "{readable}")
    }
}

impl NuxtOpt {
    /// Warns about nuxt-only flags passed alongside another template
    pub fn warn_if_unused(&self, template: TemplateKind) {
        if template == TemplateKind::Nuxt {
            return;
        }
        if self.pwa.is_some() {
            warnln!("--pwa only applies to the {} template, ignoring it", TemplateKind::Nuxt);
        }
        if self.mode.is_some() {
            warnln!("--mode only applies to the {} template, ignoring it", TemplateKind::Nuxt);
        }
    }

    pub fn get_or_prompt_pwa(&self, prompt: &impl Prompt) -> MevnResult<bool> {
        match self.pwa {
            Some(pwa) => Ok(pwa),
            None => prompt.confirm("Do you want PWA support?", false),
        }
    }

    pub fn get_or_prompt_mode(&self, prompt: &impl Prompt) -> MevnResult<RenderingMode> {
        if let Some(mode) = self.mode {
            return Ok(mode);
        }

        let labels: Vec<String> = RenderingMode::CHOICES
            .iter()
            .map(|mode| mode.to_string())
            .collect();
        let selection = prompt.select("Choose your preferred mode", &labels, 0)?;
        Ok(Self::handle_mode_selection(selection)?)
    }

    fn handle_mode_selection(selection: Option<usize>) -> Result<RenderingMode, InitError> {
        selection
            .and_then(|index| RenderingMode::CHOICES.get(index).copied())
            .ok_or(InitError::NothingSelected {
                what: "rendering mode",
            })
    }
}
