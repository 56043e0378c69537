//! Logger setup for the CLI (`env_logger` on stderr) and the browser (`console_log`).

/// Environment variable that turns on debug logging in the CLI.
pub const DEBUG_ENV_VAR: &str = "CROSSGRID_DEBUG";

/// Whether a [`DEBUG_ENV_VAR`] value asks for debug output.
///
/// Unset, empty, `0`, `false`, `no` and `off` (any case) mean no.
#[cfg(not(target_arch = "wasm32"))]
fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty()
        && !["0", "false", "no", "off"]
            .iter()
            .any(|off| value.eq_ignore_ascii_case(off))
}

/// Debug logging was requested through the environment.
#[cfg(not(target_arch = "wasm32"))]
#[must_use]
pub fn debug_from_env() -> bool {
    std::env::var(DEBUG_ENV_VAR).is_ok_and(|value| is_truthy(&value))
}

/// Initialize logging for crossgrid.
///
/// Debug level is used when `debug_requested` is true. Natively,
/// [`DEBUG_ENV_VAR`] can also turn it on, and an explicit `RUST_LOG` filter
/// replaces both. A second call keeps the first logger.
pub fn init_logger(debug_requested: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let level = if debug_requested { log::Level::Debug } else { log::Level::Info };

        if let Err(e) = console_log::init_with_level(level) {
            let msg = format!("Failed to initialize console_log: {e}. Logging will be unavailable.");
            web_sys::console::error_1(&msg.into());
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let debug = debug_requested || debug_from_env();
        let level = if debug { log::LevelFilter::Debug } else { log::LevelFilter::Info };

        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(level)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false);

        if let Ok(filters) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filters);
        }

        if builder.try_init().is_ok() {
            log::debug!("Native logger initialized at {level} level");
        }
    }
}
