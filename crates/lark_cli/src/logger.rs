use log::LevelFilter;

/// Initialize the logger; `RUST_LOG` may refine the level per module
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();
}
