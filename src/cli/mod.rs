mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::error::ChartError;

/// Parse the command line and run the chosen subcommand (the demo when
/// none is given).
///
/// # Errors
///
/// Whatever the handler hits: unreadable or non-numeric input, an input
/// without numbers, a bad colour or palette, or a failed write to stdout.
pub fn run() -> Result<(), ChartError> {
    let cli = parse::Cli::parse();
    let debug = cli.debug;
    match cli.cmd {
        None | Some(parse::Command::Demo) => handlers::demo(&mut std::io::stdout().lock(), debug),
        Some(parse::Command::Line(a)) => handlers::line(&a, debug),
        Some(parse::Command::Heat(a)) => handlers::heat(&a, debug),
        Some(parse::Command::Gauge(a)) => handlers::gauge(&a, debug),
        Some(parse::Command::Pie(a)) => handlers::pie(&a, debug),
        Some(parse::Command::Stream(a)) => handlers::stream(&a, debug),
        Some(parse::Command::Colors) => {
            handlers::colors();
            Ok(())
        }
        Some(parse::Command::Palettes) => {
            handlers::palettes();
            Ok(())
        }
        Some(parse::Command::Examples) => {
            handlers::examples();
            Ok(())
        }
    }
}
