use std::process::ExitCode;

fn main() -> ExitCode {
    match cli_chart::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cli-chart: {e}");
            ExitCode::FAILURE
        }
    }
}
