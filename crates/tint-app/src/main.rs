mod cli;
mod commands;
mod output;
mod session;

use cli::{Command, ConfigCommand};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so its level can seed the filter.
    // `config init` must not trip over the default file that loading creates.
    let loaded = if matches!(args.command, Command::Config(ConfigCommand::Init { .. })) {
        Ok(tint_config::TintConfig::default())
    } else {
        tint_config::load_config_from(args.config.as_deref())
    };
    let log_directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.clone(),
        (None, Err(_)) => "tint=info".to_string(),
    };

    // Initialize logging on stderr so stdout stays clean for JSON output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    tracing::debug!("tint v{} starting", env!("CARGO_PKG_VERSION"));

    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        tint_config::TintConfig::default()
    });

    let session = match session::Session::new(config, args.data.clone()) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = commands::run(args.command, &session, args.config.as_deref()) {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
