use std::{env, process::ExitCode};

use tracing_subscriber::EnvFilter;

// Prints every monitor as JSON, or only the primary one when passed `--primary`.
//
// NOTE: on Linux this needs the `gtk` feature and a running display server, since
//       GDK can't be queried before GTK is initialized.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    #[cfg(all(target_os = "linux", feature = "gtk"))]
    if let Err(err) = gtk::init() {
        eprintln!("failed to initialize GTK: {err}");
        return ExitCode::FAILURE;
    }

    let primary_only = env::args().skip(1).any(|arg| arg == "--primary");
    let output = if primary_only {
        screen_geometry::primary_monitor().map(|primary| serde_json::json!(primary))
    } else {
        screen_geometry::monitors().map(|monitors| serde_json::json!(monitors))
    };

    match output {
        Ok(value) => {
            println!("{value:#}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
