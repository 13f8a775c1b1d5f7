use std::fmt::{self, Display};

use camino::Utf8PathBuf;
use mevn_std::Style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MevnErrorSuggestion {
    SingleProjectName,
    FollowNamingRules,
    ChooseAnotherName { path: Utf8PathBuf },
    InstallGit,
    CheckNetworkConnection,
    SetRenderingModeManually,
    RestoreProjectConfig,
}

impl Display for MevnErrorSuggestion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MevnErrorSuggestion::*;
        let suggestion = match self {
            SingleProjectName => format!(
                "Pass exactly one project name, for example {}. Project names cannot contain spaces.",
                Style::Command.paint("`mevn init my-app`")
            ),
            FollowNamingRules => format!(
                "Project names follow npm package naming rules: lowercase, URL-safe and not starting with `.` or `_`. Run {} for details.",
                Style::Command.paint("`mevn explain E002`")
            ),
            ChooseAnotherName { path } => format!(
                "Either rename or remove the existing {} entry, or re-run this command with a different name.",
                Style::Path.paint(path.as_str())
            ),
            InstallGit => format!(
                "Install git from {} or point {} at an existing git executable.",
                Style::Link.paint("https://git-scm.com/downloads"),
                Style::Command.paint("$MEVN_GIT_PATH")
            ),
            CheckNetworkConnection => {
                "Check your network connection and that you can reach github.com, then try again."
                    .to_string()
            }
            SetRenderingModeManually => format!(
                "The project was created and committed but its rendering mode is unchanged. Set {} in nuxt.config.js by hand.",
                Style::Command.paint("mode: 'universal'")
            ),
            RestoreProjectConfig => format!(
                "{} holds the project settings mevn relies on. Restore it from version control rather than editing it by hand.",
                Style::Path.paint("mevn.json")
            ),
        };
        write!(formatter, "{}", &suggestion)
    }
}
