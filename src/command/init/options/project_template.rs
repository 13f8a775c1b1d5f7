use clap::Parser;
use strum::IntoEnumIterator;

use crate::command::init::errors::InitError;
use crate::command::init::prompts::Prompt;
use crate::command::init::template::TemplateKind;
use crate::MevnResult;

#[derive(Debug, Clone, Parser, Default)]
pub struct ProjectTemplateOpt {
    /// Boilerplate to start from, skips the template prompt
    #[arg(long = "template", short = 't', value_enum)]
    pub(crate) template: Option<TemplateKind>,
}

impl ProjectTemplateOpt {
    pub fn get_or_prompt_template(&self, prompt: &impl Prompt) -> MevnResult<TemplateKind> {
        if let Some(template) = self.template {
            return Ok(template);
        }

        let labels: Vec<String> = TemplateKind::iter()
            .map(|kind| kind.label().to_string())
            .collect();
        let selection = prompt.select(
            "Please choose a starter template from the list below",
            &labels,
            0,
        )?;
        Ok(Self::handle_template_selection(&labels, selection)?)
    }

    fn handle_template_selection(
        labels: &[String],
        selection: Option<usize>,
    ) -> Result<TemplateKind, InitError> {
        selection
            .and_then(|index| labels.get(index))
            .and_then(|label| TemplateKind::from_label(label))
            .ok_or(InitError::NothingSelected { what: "template" })
    }
}
