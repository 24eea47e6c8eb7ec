use matrix_jobs::cli;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Process the selected command
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // `{:#}` renders the whole context chain on one line.
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
