mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::GraphError;

pub fn run() -> Result<(), GraphError> {
    let cli = parse::Cli::parse();
    match cli.cmd {
        parse::Command::Plot(a) => handlers::plot(&a),
        parse::Command::Coil(a) => handlers::coil(&a),
        parse::Command::Functions => {
            handlers::functions();
            Ok(())
        }
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
