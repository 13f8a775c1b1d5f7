use std::process;

use clap::Parser;
use mevn::cli::Mevn;

#[tokio::main]
async fn main() {
    let app = Mevn::parse();
    timber::init(app.log_level());
    tracing::trace!(command_structure = ?app);

    match app.run().await {
        Ok(output) => {
            if let Err(error) = output.print() {
                tracing::debug!(?error, "could not print output");
            }
            process::exit(0)
        }
        Err(error) => {
            tracing::debug!(?error);
            if let Err(print_error) = error.print() {
                tracing::debug!(?print_error, "could not print error");
            }
            process::exit(1)
        }
    }
}
