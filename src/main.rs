use anyhow::Context;
use clap::Parser;
use pdfstudy::cli::Cli;
use pdfstudy::config::Config;
use pdfstudy::document::{PageExtractor, PdfExtractor};
use pdfstudy::generation::{GeminiBackend, GenerationClient, Generator};
use pdfstudy::headless::run_once;
use pdfstudy::logging::init_tracing;
use pdfstudy::ui::{self, UiOptions};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config);
    config.validate()?;

    let api_key = config.generation.resolve_api_key()?;
    let backend = GeminiBackend::new(&config.generation, api_key)
        .context("Failed to initialize the generation client")?;
    tracing::info!(model = backend.model(), "Generation backend ready");
    let generator: Arc<dyn Generator> = Arc::new(GenerationClient::new(backend));
    let extractor: Arc<dyn PageExtractor> = Arc::new(PdfExtractor);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start the async runtime")?;

    if let Some(action) = cli.action {
        let file = cli.file.as_deref().context("--action requires a FILE")?;
        let output = runtime.block_on(run_once(file, action, generator.as_ref(), extractor))?;
        let mut stdout = std::io::stdout();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        return Ok(());
    }

    ui::run(
        generator,
        extractor,
        runtime.handle().clone(),
        UiOptions {
            model: config.generation.model.clone(),
            tick_rate: Duration::from_millis(config.ui.tick_rate_ms),
            initial_file: cli.file,
        },
    )
}
