#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    if let Err(err) = native::try_main() {
        eprintln!("{err:#}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

// En la web el arranque lo hace `learnbd::start`
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Context as _;
    use clap::Parser as _;
    use learnbd::LearnApp;
    use learnbd::app::progress::{FileStore, ProgressStore, default_store_path, keys};
    use learnbd::data::ContentStore;

    pub fn try_main() -> anyhow::Result<()> {
        let cli = learnbd::cli::Cli::parse();
        learnbd::logging::init(cli.verbose).context("init logging")?;
        log::debug!("parsed cli: {cli:?}");

        let content = ContentStore::load_or_embedded(cli.content_dir.as_deref())
            .context("load course content")?;

        let path = match cli.store {
            Some(path) => path,
            None => default_store_path().context("no storage directory for progress")?,
        };
        log::info!("progress file: {}", path.display());
        let mut store = FileStore::open(path);
        if let Some(language) = &cli.language {
            store.set(keys::LANGUAGE, language);
        }

        let mut app = LearnApp::new(content, Box::new(store));
        if cli.reset_progress {
            app.reset_progress();
        }

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title("LearnBD")
                .with_inner_size([1200.0, 800.0]),
            ..Default::default()
        };
        eframe::run_native("LearnBD", options, Box::new(move |_cc| Ok(Box::new(app))))
            .map_err(|err| anyhow::anyhow!("run app: {err}"))
    }
}
