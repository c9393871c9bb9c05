use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(author, version, about = "Interactive Next.js course viewer")]
pub struct Cli {
    /// Directory with `steps_<lang>` and `courses_<lang>` files (json, yaml or yml).
    /// Falls back to the embedded content if it cannot be loaded.
    #[arg(long)]
    pub content_dir: Option<PathBuf>,

    /// Progress file. Defaults to the platform storage directory.
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Interface language, overriding the saved one.
    #[arg(long, value_parser = ["en", "fr"])]
    pub language: Option<String>,

    /// Erase saved positions and the completion flag before starting.
    #[arg(long, default_value_t = false)]
    pub reset_progress: bool,

    /// Debug logging for this app (ignored when `RUST_LOG` is set).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "learnbd",
            "--content-dir",
            "content",
            "--store",
            "/tmp/p.json",
            "--language",
            "fr",
            "--reset-progress",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.content_dir, Some(PathBuf::from("content")));
        assert_eq!(cli.store, Some(PathBuf::from("/tmp/p.json")));
        assert_eq!(cli.language.as_deref(), Some("fr"));
        assert!(cli.reset_progress);
        assert!(cli.verbose);
    }

    #[test]
    fn defaults_are_quiet() {
        let cli = Cli::try_parse_from(["learnbd"]).unwrap();
        assert!(!cli.verbose && !cli.reset_progress);
        assert_eq!(cli.store, None);
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Cli::try_parse_from(["learnbd", "--language", "de"]).is_err());
    }
}
