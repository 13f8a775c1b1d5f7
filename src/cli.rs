use clap::{CommandFactory, Parser};
use timber::Level;

use crate::command::{self, MevnOutput};
use crate::utils::env::{MevnEnv, MevnEnvKey};
use crate::MevnResult;

#[derive(Debug, Parser)]
#[command(
    name = "mevn",
    version,
    about = "
mevn - scaffold MEVN stack applications

Create a new project from one of the official boilerplates by running:

    $ mevn init my-app

You will be asked which template to start from. Run `mevn templates` to see
all of them, and `mevn explain <CODE>` to learn more about an error code.
"
)]
pub struct Mevn {
    #[command(subcommand)]
    pub command: Command,

    /// Specify mevn's log level
    #[arg(long = "log", short = 'l', global = true)]
    log_level: Option<Level>,

    #[arg(skip)]
    env_store: MevnEnv,
}

impl Mevn {
    /// The level requested with `--log`, falling back to `$MEVN_LOG`
    pub fn log_level(&self) -> Option<Level> {
        self.log_level.or_else(|| {
            self.env_store
                .get(MevnEnvKey::Log)
                .ok()
                .flatten()
                .and_then(|raw| timber::parse_level(&raw))
        })
    }

    pub async fn run(&self) -> MevnResult<MevnOutput> {
        match &self.command {
            Command::Init(command) => command.run(&self.env_store).await,
            Command::Templates(command) => command.run(),
            Command::Info(command) => command.run(&self.env_store),
            Command::Explain(command) => command.run(),
        }
    }
}

#[derive(Debug, Parser)]
pub enum Command {
    /// Scaffold a new project from a boilerplate template
    Init(command::Init),

    /// List the available boilerplate templates
    Templates(command::Templates),

    /// Print system information useful for bug reports
    Info(command::Info),

    /// Explain an error code
    Explain(command::Explain),
}

/// One row of the command reference printed after a project is created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSummary {
    pub usage: String,
    pub description: String,
}

/// Lists every top-level command together with its positional arguments
/// and one-line description, straight from the clap definition.
pub fn command_reference() -> Vec<CommandSummary> {
    let app = Mevn::command();
    app.get_subcommands()
        .filter(|sub| !sub.is_hide_set() && sub.get_name() != "help")
        .map(|sub| {
            let mut usage = format!("{} {}", app.get_name(), sub.get_name());
            for positional in sub.get_positionals().filter(|arg| !arg.is_hide_set()) {
                let value_name = positional
                    .get_value_names()
                    .and_then(|names| names.first())
                    .map(|name| name.to_string())
                    .unwrap_or_else(|| positional.get_id().to_string().to_uppercase());
                if positional.is_required_set() {
                    usage.push_str(&format!(" <{value_name}>"));
                } else {
                    usage.push_str(&format!(" [{value_name}]"));
                }
            }
            let description = sub
                .get_about()
                .map(|about| about.to_string())
                .unwrap_or_default();
            CommandSummary { usage, description }
        })
        .collect()
}
