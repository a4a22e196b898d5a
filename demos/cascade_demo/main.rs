//! # cascfig demo application
//!
//! A sample CLI tool that loads a YAML file plus its custom overrides. It
//! exists purely to demonstrate and manually verify cascfig's features.
//!
//! ## Running
//!
//! ```sh
//! cargo run --example cascade_demo
//! cargo run --example cascade_demo -- -c demo.yaml --dump-yaml
//! ```
//!
//! ## Features demonstrated
//!
//! | Feature                | How to exercise it                                                    |
//! |------------------------|-----------------------------------------------------------------------|
//! | Default value          | Run with no `cascade-demo.yaml` in cwd                                |
//! | Base file              | Create `cascade-demo.yaml` in cwd                                     |
//! | Custom override        | Add `cascade-demo.custom.yaml` with e.g. `server: {port: 9000}`       |
//! | Null reset             | `database: {url: ~}` in an override clears the optional URL           |
//! | Numbered overrides     | Add `cascade-demo.custom.01.yaml`, `cascade-demo.custom.02.yaml`, ... |
//! | Env placeholders       | Put `port: ${DEMO_PORT=4000}` in any file, set `DEMO_PORT`            |
//! | Alternate file         | `-c other.toml`                                                       |
//! | Dumps                  | `--dump-json`, `--dump-yaml`                                          |
//! | Load trace             | `RUST_LOG=cascfig=debug`                                              |

mod config;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cascfig::{Cascfig, ConfigArgs};

use config::DemoConfig;

const DEFAULT_FILE: &str = "cascade-demo.yaml";

/// cascfig demo: a sample CLI app for showcasing cascading config files.
#[derive(Parser, Debug)]
#[command(name = "cascade-demo")]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let defaults = DemoConfig::default();
    let mut config = DemoConfig::default();

    let source = Cascfig::builder()
        .load_from_args(&mut config, &cli.config, DEFAULT_FILE, Some(&defaults))
        .unwrap_or_else(|e| {
            eprintln!("Failed to load config:\n{e}");
            std::process::exit(1);
        });

    match &source {
        Some(path) => println!("# loaded from {}", path.display()),
        None => println!("# using built-in defaults"),
    }

    match cascfig::dump_yaml(&config) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
