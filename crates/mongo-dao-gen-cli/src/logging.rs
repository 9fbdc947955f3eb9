use env_logger::{Builder, Env};
use log::LevelFilter;

/// Installs the logger. `RUST_LOG` wins over the verbosity flag.
pub(crate) fn init(verbose: u8) {
    let level = level(verbose);
    let mut builder = Builder::from_env(Env::default().default_filter_or(level.as_str()));
    builder.format_timestamp(None).format_target(false);

    if builder.try_init().is_err() {
        log::debug!("logger already installed");
    }
}

fn level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
