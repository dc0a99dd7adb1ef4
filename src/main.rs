use clap::{Parser, Subcommand};
use irisd::api::handlers::run_prediction;
use irisd::api::types::FEATURE_COUNT;
use irisd::api::{start_api_server, AppState};
use irisd::config::{AppConfig, LoggingConfig};
use irisd::error::{IrisdError, Result};
use irisd::ml::Classifier;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "irisd", version, about = "Iris species prediction HTTP service")]
struct Cli {
    /// Configuration directory
    #[arg(long, default_value = "config")]
    config_dir: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP prediction server (the default)
    Serve {
        /// Override the configured listen port
        #[arg(long)]
        port: Option<u16>,
        /// Override the configured model artifact path
        #[arg(long, env = "IRIS_MODEL")]
        model: Option<String>,
    },
    /// Predict a species from the command line
    Predict {
        /// Feature values: sepal length, sepal width, petal length, petal width
        #[arg(required = true, num_args = 4)]
        features: Vec<f64>,
        /// Override the configured model artifact path
        #[arg(long, env = "IRIS_MODEL")]
        model: Option<String>,
    },
    /// Load and validate a model artifact
    Check {
        /// Override the configured model artifact path
        #[arg(long, env = "IRIS_MODEL")]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Predict { features, model }) => {
            init_logging_simple();
            run_predict_mode(&cli, features, model.as_deref())?;
        }
        Some(Commands::Check { model }) => {
            init_logging_simple();
            run_check_mode(&cli, model.as_deref())?;
        }
        Some(Commands::Serve { port, model }) => {
            run_serve_mode(&cli, *port, model.as_deref()).await?;
        }
        None => {
            run_serve_mode(&cli, None, None).await?;
        }
    }

    Ok(())
}

async fn run_serve_mode(cli: &Cli, port: Option<u16>, model: Option<&str>) -> Result<()> {
    let mut config = AppConfig::load_from(&cli.config_dir)?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(model) = model {
        config.model.path = model.to_string();
    }
    if let Err(errors) = config.validate() {
        return Err(IrisdError::Validation(errors.join("; ")));
    }

    init_logging(&config.logging);

    let classifier = load_classifier(&config.model.path)?;
    info!(
        path = %config.model.path,
        classes = classifier.num_classes(),
        "Classifier loaded"
    );

    let state = AppState::new(Arc::new(classifier));
    start_api_server(state, &config.server.host, config.server.port).await
}

fn run_predict_mode(cli: &Cli, features: &[f64], model: Option<&str>) -> Result<()> {
    let path = resolve_model_path(cli, model)?;
    let classifier = load_classifier(&path)?;

    let response = run_prediction(&classifier, features)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn run_check_mode(cli: &Cli, model: Option<&str>) -> Result<()> {
    let path = resolve_model_path(cli, model)?;
    let classifier = load_classifier(&path)?;

    println!("model: {path}");
    println!("input_dim: {}", classifier.input_dim);
    println!("classes: {}", classifier.class_labels.join(", "));
    println!("layers: {}", classifier.layers.len());
    if !classifier.metadata.is_null() {
        println!("metadata: {}", serde_json::to_string(&classifier.metadata)?);
    }
    Ok(())
}

/// Load the artifact and check it against the service's fixed input shape.
/// A mismatched or corrupt artifact is fatal; no request can be served.
fn load_classifier(path: &str) -> Result<Classifier> {
    let classifier = Classifier::from_file(path)?;
    if classifier.input_dim != FEATURE_COUNT {
        return Err(IrisdError::Validation(format!(
            "model expects {} features, this service serves {FEATURE_COUNT}-feature requests",
            classifier.input_dim
        )));
    }
    Ok(classifier)
}

fn resolve_model_path(cli: &Cli, model: Option<&str>) -> Result<String> {
    if let Some(model) = model {
        return Ok(model.to_string());
    }
    let config = AppConfig::load_from(&cli.config_dir)?;
    Ok(config.model.path)
}

fn init_logging(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},irisd=debug", cfg.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if cfg.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn init_logging_simple() {
    // Minimal logging for CLI commands
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}
