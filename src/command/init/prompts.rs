use dialoguer::console::Term;
use dialoguer::{Confirm, Input, Select};
use mevn_std::Style;

use crate::MevnResult;

/// Interactive questions asked while scaffolding a project
#[cfg_attr(test, mockall::automock)]
pub trait Prompt {
    /// Returns the index of the chosen item, or `None` if the user backed out
    fn select(&self, message: &str, items: &[String], default: usize) -> MevnResult<Option<usize>>;

    fn confirm(&self, message: &str, default: bool) -> MevnResult<bool>;

    fn input(&self, message: &str) -> MevnResult<String>;
}

/// Asks on the attached terminal's stderr so stdout stays clean
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl Prompt for DialoguerPrompt {
    fn select(&self, message: &str, items: &[String], default: usize) -> MevnResult<Option<usize>> {
        let selection = Select::new()
            .with_prompt(Style::Prompt.paint(format!("? {message}")))
            .items(items)
            .default(default)
            .interact_on_opt(&Term::stderr())?;
        Ok(selection)
    }

    fn confirm(&self, message: &str, default: bool) -> MevnResult<bool> {
        let answer = Confirm::new()
            .with_prompt(Style::Prompt.paint(format!("? {message}")))
            .default(default)
            .interact_on(&Term::stderr())?;
        Ok(answer)
    }

    fn input(&self, message: &str) -> MevnResult<String> {
        let answer: String = Input::new()
            .with_prompt(Style::Prompt.paint(format!("? {message}")))
            .interact_text_on(&Term::stderr())?;
        Ok(answer)
    }
}
