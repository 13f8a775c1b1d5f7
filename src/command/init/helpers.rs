use camino::Utf8Path;
use comfy_table::Table;
use mevn_std::emoji::Emoji;
use mevn_std::{Style, successln, warnln};

use super::config::CONFIG_FILE_NAME;
use super::states::ProjectRequest;
use crate::cli::command_reference;
use crate::utils::table::get_table;

/// Every command the binary offers, one row each
pub fn command_table() -> Table {
    let mut table = get_table(&["Command", "Description"]);
    for summary in command_reference() {
        table.add_row(vec![summary.usage, summary.description]);
    }
    table
}

pub fn display_project_created_message(request: &ProjectRequest, project_dir: &Utf8Path) {
    successln!(
        "{}Created {} from the {} template in {}",
        Emoji::Sparkle,
        Style::Heading.paint(request.name.as_str()),
        Style::Template.paint(request.template.label()),
        Style::Path.paint(project_dir.as_str())
    );
    eprintln!();
    eprintln!("{}", command_table());
    eprintln!();
    eprintln!(
        "{}{} {}",
        Emoji::Rocket,
        Style::CallToAction.paint("Next, run"),
        Style::Command.paint(format!("cd {}", request.name))
    );
    warnln!(
        "{}Do not delete {}, mevn uses it to recognise the project",
        Emoji::Memo,
        Style::Path.paint(CONFIG_FILE_NAME)
    );
}
