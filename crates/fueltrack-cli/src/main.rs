//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to the record store.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fueltrack_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::new(cli.data_dir, cli.backend);
    let mut ctx = bootstrap(config).await?;

    match command {
        Commands::Paths => {
            handlers::paths::execute(&ctx);
        }
        Commands::Add {
            amount,
            cost,
            distance,
            date,
            station,
            notes,
        } => {
            let args = handlers::add::AddArgs {
                amount,
                cost,
                distance,
                date,
                station,
                notes,
            };
            handlers::add::execute(&mut ctx, args).await?;
        }
        Commands::List { search, limit } => {
            handlers::list::execute(&ctx, search.as_deref(), limit);
        }
        Commands::Edit {
            id,
            amount,
            cost,
            distance,
            date,
            station,
            notes,
        } => {
            let args = handlers::edit::EditArgs {
                id,
                amount,
                cost,
                distance,
                date,
                station,
                notes,
            };
            handlers::edit::execute(&mut ctx, args).await?;
        }
        Commands::Remove { id, force } => {
            handlers::remove::execute(&mut ctx, &id, force).await?;
        }
        Commands::Profile { command } => {
            handlers::profile::execute(&mut ctx, command).await?;
        }
        Commands::Stats {
            trend,
            stations,
            json,
        } => {
            handlers::stats::execute(&ctx, trend, stations, json)?;
        }
        Commands::Export { output } => {
            handlers::export::execute(&ctx, output)?;
        }
    }

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables before clap reads its `env` fallbacks
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}
