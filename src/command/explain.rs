use clap::Parser;

use crate::error::MevnErrorCode;
use crate::{MevnOutput, MevnResult};

#[derive(Debug, Parser)]
pub struct Explain {
    /// The full error code. For example, E003
    #[arg(value_name = "CODE")]
    code: MevnErrorCode,
}

impl Explain {
    pub fn run(&self) -> MevnResult<MevnOutput> {
        Ok(MevnOutput::ErrorExplanation(self.code.explain()))
    }
}
