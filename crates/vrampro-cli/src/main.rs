//! CLI entry point.
//!
//! Infrastructure is wired together only via `bootstrap`. Command dispatch
//! routes to handlers which delegate to the workflow coordinator.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use vrampro_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

/// `RUST_LOG` wins; otherwise `--verbose` selects debug output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_env(cli.volume, cli.dry_run, cli.json)?;
    let mut ctx = bootstrap(config);

    match command {
        Commands::Status => handlers::status::execute(&ctx)?,
        Commands::Options => handlers::options::execute(&ctx)?,
        Commands::Prepare => handlers::prepare::execute(&mut ctx).await?,
        Commands::Allocate(args) => handlers::allocate::execute(&mut ctx, &args).await?,
        Commands::Run(args) => handlers::run::execute(&mut ctx, &args).await?,
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        // Phase failures were already rendered by the handler
        if !matches!(err.downcast_ref::<CliError>(), Some(CliError::PhaseFailed { .. })) {
            eprintln!("Error: {err:#}");
        }
        std::process::exit(code);
    }
}
