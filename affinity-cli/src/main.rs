//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::init();
    if let Err(err) = affinity_cli::run() {
        eprintln!("affinity: {err}");
        std::process::exit(1);
    }
}
