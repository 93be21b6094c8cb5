use std::process::ExitCode;

fn main() -> ExitCode {
    match termigraph::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
