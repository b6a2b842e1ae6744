use clap::Parser;

mod settings;

#[derive(Debug, Parser)]
#[command(name = "ledger", about = "Personal finance ledger served over HTTP")]
struct Cli {
    /// Settings file, without extension (toml, yaml and json are accepted).
    #[arg(long, env = "LEDGER_SETTINGS", default_value = "settings")]
    settings: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cli = Cli::parse();
    let settings = settings::Settings::new(&cli.settings)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "ledger={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    let ledger = engine::Ledger::builder()
        .path(&settings.ledger.path)
        .atomic_writes(settings.ledger.atomic_writes)
        .build();
    if ledger.init()? {
        tracing::info!("Created empty ledger at {}", ledger.path().display());
    }

    let addr = format!("{}:{}", settings.server.bind, settings.server.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            return Err(err.into());
        }
    };

    let state = server::ServerState::new(ledger, &settings.ledger.currency_symbol);
    server::run_with_listener(state, listener).await?;

    Ok(())
}
