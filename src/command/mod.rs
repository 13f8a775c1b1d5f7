mod explain;
mod info;
pub(crate) mod init;
pub(crate) mod output;
mod templates;

pub use explain::Explain;
pub use info::Info;
pub use init::Init;
pub use output::MevnOutput;
pub use templates::Templates;
