use clap::Parser;
use vl_core::cli::Cli;
use vl_core::exit_codes::ExitCode;
use vl_core::logging::init_logging;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli.log_options()) {
        eprintln!("warning: {e}");
    }

    let code = match vl_core::run(&cli) {
        Ok(outcome) => {
            println!("{outcome}");
            ExitCode::Clean
        }
        Err(e) => {
            tracing::debug!(code = e.code(), error = ?e, "invocation failed");
            eprintln!("error: {e}");
            ExitCode::from_error(&e)
        }
    };

    std::process::exit(code.as_i32());
}
