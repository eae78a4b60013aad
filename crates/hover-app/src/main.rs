mod cli;
mod scenario;
mod session;

use std::path::Path;
use std::process::ExitCode;

use hover_common::Result;
use hover_config::{HoverConfig, ReloadManager};
use tracing::{error, info, warn};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};
use scenario::Scenario;
use session::Session;

fn load_config(path: Option<&Path>) -> Result<HoverConfig> {
    let config = match path {
        Some(path) => hover_config::load_config_from(path)?,
        None => hover_config::load_config()?,
    };
    Ok(config)
}

fn init_logging(args: &Args, config: &HoverConfig) {
    let fallback = config.logging.level.as_directive();
    let directive = args.log_level.as_deref().unwrap_or(fallback);
    let directive: Directive = directive.parse().unwrap_or_else(|e| {
        eprintln!("hover-sim: invalid log filter '{directive}' ({e}), using '{fallback}'");
        fallback.parse().unwrap_or_else(|_| LevelFilter::INFO.into())
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn replay(path: &Path, config: &HoverConfig) -> Result<Session> {
    let scenario = Scenario::load(path)?;
    let mut session = Session::new(config.editor);
    session.run(&scenario)?;
    Ok(session)
}

async fn watch(path: &Path, config_path: &Path, config: &HoverConfig) -> Result<()> {
    let mut session = replay(path, config)?;
    println!("{}", session.report());

    let (_, mut config_rx) = ReloadManager::start(config_path.to_path_buf()).await;
    info!(
        "watching {} for changes, Ctrl-C to stop",
        config_path.display()
    );

    loop {
        tokio::select! {
            changed = config_rx.changed() => {
                if changed.is_err() {
                    warn!("config reload stopped");
                    break;
                }
                let config = config_rx.borrow_and_update().clone();
                let changed = session.apply_config(&config);
                info!("config reloaded, {} editor(s) changed", changed.len());
                println!("--- config reloaded ---\n{}", session.report());
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                break;
            }
        }
    }
    Ok(())
}

async fn run(args: Args, config: HoverConfig) -> Result<()> {
    match &args.command {
        Command::Replay { scenario } => {
            let session = replay(scenario, &config)?;
            println!("{}", session.report());
        }
        Command::Watch { scenario } => {
            let config_path = match &args.config {
                Some(path) => path.clone(),
                None => hover_config::toml_loader::default_config_path()?,
            };
            watch(scenario, &config_path, &config).await?;
        }
        Command::PrintConfig => {
            println!("{}", hover_config::config_to_json(&config));
        }
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = cli::parse();

    let config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("hover-sim: {e}");
            return ExitCode::FAILURE;
        }
    };

    init_logging(&args, &config);

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("hover-sim: {e}");
            ExitCode::FAILURE
        }
    }
}
