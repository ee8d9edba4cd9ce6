use log::LevelFilter;

/// Initialize the logger with the specified level
///
/// `RUST_LOG` still applies on top, e.g. to silence a single module.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
