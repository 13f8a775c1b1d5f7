use console::style;

pub enum Style {
    Link,    // URLs
    Command, // Commands, inline code, env variable keys
    Path, // File and directory paths
    Template,
    InfoPrefix,    // "==>" text
    WarningPrefix, // "warning:" text
    ErrorPrefix,   // "error:" and "error[code]:" text
    SuccessPrefix,
    Prompt,
    Heading,
    CallToAction,
    Version,
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Link => style(message_ref).cyan().underlined(),
            Style::Version | Style::Template => style(message_ref).cyan(),
            Style::Command => style(message_ref).yellow(),
            Style::CallToAction => style(message_ref).yellow().italic(),
            Style::InfoPrefix => style(message_ref).blue().bold(),
            Style::WarningPrefix => style(message_ref).yellow(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
            Style::SuccessPrefix => style(message_ref).green().bold(),
            Style::Prompt => style(message_ref).bold(),
            Style::Path | Style::Heading => style(message_ref).bold(),
        }
        .to_string()
    }
}

pub fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR") || is_bool_env_var_set("MEVN_NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    !matches!(
        std::env::var(key).as_deref(),
        Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}
