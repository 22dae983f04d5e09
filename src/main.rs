//! eventboard main entrypoint.

use eventboard::{logging, run};

fn main() {
    logging::init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
