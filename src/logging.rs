use anyhow::Context as _;

/// Directiva por defecto cuando no hay `RUST_LOG`. Los backends de ventana y
/// render se quedan en `warn` para que no tapen el log de navegación.
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "learnbd=debug,eframe=warn,egui_glow=warn,egui_winit=warn,info"
    } else {
        "learnbd=info,eframe=warn,egui_glow=warn,egui_winit=warn,warn"
    }
}

/// Arranca el log de la app nativa a stderr.
/// `RUST_LOG` gana a `--verbose`; los `log::` de la librería llegan vía `tracing-log`.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => tracing_subscriber::EnvFilter::try_new(default_directive(verbose))
            .context("build log filter")?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("start logger: {err}"))?;

    log::debug!("logging ready (verbose: {verbose})");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        for verbose in [false, true] {
            assert!(tracing_subscriber::EnvFilter::try_new(default_directive(verbose)).is_ok());
        }
    }

    #[test]
    fn verbose_raises_only_our_crate() {
        assert!(default_directive(true).starts_with("learnbd=debug"));
        assert!(default_directive(false).starts_with("learnbd=info"));
        assert!(default_directive(true).contains("egui_glow=warn"));
    }
}
