use clap::Parser;
use gamesage_api::RestApi;
use gamesage_model::{ModelBundle, ModelPaths};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Finds the games most and least related to free text
#[derive(Parser, Debug)]
#[command(name = "gamesage")]
#[command(about = "LSA-based related-game lookup for GameNet", long_about = None)]
struct Args {
    /// Directory holding the catalog and model files
    #[arg(short, long, default_value = "./static")]
    model_dir: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 5000)]
    http_port: u16,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Catalog TSV, relative to the model directory
    #[arg(long)]
    catalog_file: Option<PathBuf>,

    #[arg(long)]
    stopwords_file: Option<PathBuf>,

    /// Multiword platform names
    #[arg(long)]
    platforms_file: Option<PathBuf>,

    /// Token to term id map (JSON)
    #[arg(long)]
    vocabulary_file: Option<PathBuf>,

    #[arg(long)]
    tfidf_file: Option<PathBuf>,

    #[arg(long)]
    lsi_file: Option<PathBuf>,

    /// Base forms known to the lemmatizer
    #[arg(long)]
    lemma_lexicon_file: Option<PathBuf>,

    /// Irregular forms for the lemmatizer
    #[arg(long)]
    lemma_exceptions_file: Option<PathBuf>,
}

impl Args {
    fn model_paths(&self) -> ModelPaths {
        let dir = &self.model_dir;
        let mut paths = ModelPaths::in_dir(dir);
        let overrides = [
            (&self.catalog_file, &mut paths.catalog),
            (&self.stopwords_file, &mut paths.stopwords),
            (&self.platforms_file, &mut paths.platform_names),
            (&self.vocabulary_file, &mut paths.vocabulary),
            (&self.tfidf_file, &mut paths.tfidf),
            (&self.lsi_file, &mut paths.lsi),
        ];
        for (file, path) in overrides {
            if let Some(file) = file {
                *path = dir.join(file);
            }
        }
        if let Some(file) = &self.lemma_lexicon_file {
            paths.lemma_lexicon = Some(dir.join(file));
        }
        if let Some(file) = &self.lemma_exceptions_file {
            paths.lemma_exceptions = Some(dir.join(file));
        }
        paths
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting GameSage v{}", env!("CARGO_PKG_VERSION"));
    info!("Model directory: {:?}", args.model_dir);
    info!("HTTP API port: {}", args.http_port);

    let bundle = ModelBundle::load(&args.model_paths())?;
    let sage = Arc::new(bundle.into_sage()?);
    info!("Models loaded, {} games in catalog", sage.catalog().len());

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(sage, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("GameSage started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
