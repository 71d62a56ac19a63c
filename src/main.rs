use std::path::PathBuf;

use clap::Parser;

use todo_web::config::{read_config, validate_config, AppConfig, ConfigError};
use todo_web::lifecycle;
use todo_web::observability::logging;

#[derive(Parser)]
#[command(name = "todo-web")]
#[command(about = "Web front end proxying to a to-do REST backend", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(short, long, env = "TODO_WEB_CONFIG")]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(long, env = "TODO_WEB_BIND")]
    bind: Option<String>,

    /// Override backend.base_url.
    #[arg(long, env = "TODO_WEB_BASE_URL")]
    base_url: Option<String>,
}

impl Cli {
    /// File (or defaults), then overrides, then one validation pass.
    fn into_config(self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => AppConfig::default(),
        };

        if let Some(bind) = self.bind {
            config.listener.bind_address = bind;
        }
        if let Some(base_url) = self.base_url {
            config.backend.base_url = base_url;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        backend = %config.backend.base_url,
        "todo-web starting"
    );

    lifecycle::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
