use anyhow::Context;
use clap::Parser;
use nd_web::{AppState, ROUTES};
use std::net::SocketAddr;
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about = "Admin console for the AI news aggregator", long_about = None)]
pub struct Cli {
    /// Storage backend holding the console state. Available: memory
    #[arg(long, default_value = "memory")]
    storage: String,
    /// Log verbosity (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: Level,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Serve the console over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:8080")]
        bind: SocketAddr,
    },
    /// Print the route table
    Routes,
}

fn print_routes() {
    let width = ROUTES.iter().map(|r| r.path.len()).max().unwrap_or(0);
    for route in ROUTES {
        println!("{:<6} {:<width$}  {}", route.method, route.path, route.description, width = width);
    }
}

async fn serve(storage: &str, bind: SocketAddr) -> anyhow::Result<()> {
    let storage = nd_storage::create_storage(storage).await?;
    let app = nd_web::create_app(AppState::new(storage));

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {}", bind))?;
    info!("🗞️ Console listening on http://{}", bind);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_max_level(cli.log_level).init();

    match cli.command {
        Commands::Serve { bind } => serve(&cli.storage, bind).await,
        Commands::Routes => {
            print_routes();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["nd", "serve"]);
        assert_eq!(cli.storage, "memory");
        assert_eq!(cli.log_level, Level::INFO);
        match cli.command {
            Commands::Serve { bind } => assert_eq!(bind, "127.0.0.1:8080".parse::<SocketAddr>().unwrap()),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_flags_parse() {
        let cli = Cli::parse_from(["nd", "--log-level", "debug", "serve", "--bind", "0.0.0.0:9000"]);
        assert_eq!(cli.log_level, Level::DEBUG);
        assert!(matches!(cli.command, Commands::Serve { bind } if bind.port() == 9000));
        assert!(Cli::try_parse_from(["nd", "--log-level", "loud", "routes"]).is_err());
    }
}
