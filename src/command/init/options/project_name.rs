use std::fmt;
use std::str::FromStr;

use clap::Parser;
use mevn_std::errln;

use crate::command::init::errors::InitError;
use crate::command::init::prompts::Prompt;
use crate::command::init::validation::validate_package_name;
use crate::MevnResult;

#[derive(Debug, Clone, Parser, Default)]
pub struct ProjectNameOpt {
    /// Name of the new project, also used as its directory name
    #[arg(value_name = "NAME")]
    pub(crate) project_name: Option<String>,

    #[arg(hide = true, value_name = "EXTRA")]
    pub(crate) stray_arguments: Vec<String>,
}

/// A project name that satisfies the npm package naming rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = InitError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        validate_package_name(input)
            .map(|_| ProjectName(input.to_string()))
            .map_err(|problems| InitError::InvalidName {
                name: input.to_string(),
                problems,
            })
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ProjectNameOpt {
    /// Fails when more than one name was passed, before anything touches disk
    pub fn ensure_single_name(&self) -> Result<(), InitError> {
        if self.stray_arguments.is_empty() {
            Ok(())
        } else {
            Err(InitError::StrayArguments {
                args: self.stray_arguments.clone(),
            })
        }
    }

    pub fn get_or_prompt_project_name(&self, prompt: &impl Prompt) -> MevnResult<ProjectName> {
        if let Some(name) = &self.project_name {
            return Ok(name.parse()?);
        }

        loop {
            let input = prompt.input("Name your project")?;
            match input.parse::<ProjectName>() {
                Ok(name) => return Ok(name),
                Err(err) => errln!("{}", err),
            }
        }
    }
}
