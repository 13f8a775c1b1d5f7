use calm_io::{stdout, stdoutln};
use mevn_std::is_no_color_set;
use termimad::MadSkin;

use crate::command::init::StarterTemplate;
use crate::utils::table::get_table;

/// MevnOutput defines all of the different types of data that are printed
/// to `stdout`. Every one of mevn's commands returns `MevnResult<MevnOutput>`
/// and the printing itself is handled in `MevnOutput::print`.
///
/// Commands that only talk to the user through prompts and status lines on
/// `stderr` return `MevnOutput::EmptySuccess`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MevnOutput {
    TemplateList(Vec<StarterTemplate>),
    ErrorExplanation(String),
    EmptySuccess,
}

impl MevnOutput {
    pub fn print(&self) -> std::io::Result<()> {
        match self {
            MevnOutput::TemplateList(templates) => {
                let mut table = get_table(&["Key", "Label", "Description", "Source"]);
                for template in templates {
                    table.add_row(vec![
                        template.kind.key(),
                        template.kind.label(),
                        template.description,
                        template.git_url,
                    ]);
                }
                stdoutln!("{}", table)?;
            }
            MevnOutput::ErrorExplanation(explanation) => {
                let skin = if is_no_color_set() {
                    MadSkin::no_style()
                } else {
                    MadSkin::default()
                };
                stdout!("{}", skin.term_text(explanation))?;
            }
            MevnOutput::EmptySuccess => (),
        }
        Ok(())
    }
}
