use clap::Parser;

use crate::command::init::TEMPLATES;
use crate::{MevnOutput, MevnResult};

#[derive(Debug, Parser)]
pub struct Templates {}

impl Templates {
    pub fn run(&self) -> MevnResult<MevnOutput> {
        Ok(MevnOutput::TemplateList(TEMPLATES.to_vec()))
    }
}
