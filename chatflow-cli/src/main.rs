//! chatflow binary: parses the command line, runs one editor action and exits non-zero
//! when it fails.

use clap::Parser;
use chatflow_cli::{run_with_options, Cli, Console};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,chatflow=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let overrides = cli.overrides();

    let result = cli.command.into_action().and_then(|action| {
        let (mut out, mut notices) = (std::io::stdout(), std::io::stderr());
        let mut console = Console::new(&mut out, &mut notices);
        run_with_options(action, &overrides, &mut console)
    });

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
