use std::env;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// Filter from `EVENTBOARD_LOG` (default `eventboard=info,warn`, or
/// `eventboard=debug,info` when `DEBUG` is set). `EVENTBOARD_LOG_FORMAT=json`
/// switches to JSON lines. Output goes to stderr so it never mixes with the
/// rendered list.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("EVENTBOARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env::var("DEBUG").is_ok())));

    let format = env::var("EVENTBOARD_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn default_directives(debug: bool) -> &'static str {
    if debug {
        "eventboard=debug,info"
    } else {
        "eventboard=info,warn"
    }
}
