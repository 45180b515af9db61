#[macro_use]
extern crate log;

mod data;
mod run;

use std::{process::ExitCode, sync::Arc};

use clap::{Parser, Subcommand};
use qari_host::prelude::{Config, HttpTransport, SourceManager};

#[derive(Parser)]
#[clap(version, about = "Browse the qari sources from the command line")]
struct Opts {
    /// Path to config.yml, defaults to $QARI_HOME/config.yml
    #[clap(short, long)]
    config: Option<String>,
    #[clap(subcommand)]
    subcmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every registered source
    Sources,
    /// Show the filters a source accepts
    Filters { source: i64 },
    Popular {
        source: i64,
        #[clap(short, long, default_value = "1")]
        page: i64,
    },
    Latest {
        source: i64,
        #[clap(short, long, default_value = "1")]
        page: i64,
    },
    Search {
        source: i64,
        #[clap(short, long, default_value = "1")]
        page: i64,
        #[clap(short, long)]
        query: Option<String>,
        /// Filter as key=value, e.g. `status=ongoing` or `genre[]=أكشن`
        #[clap(short, long = "filter")]
        filters: Vec<String>,
    },
    Detail { source: i64, path: String },
    Chapters { source: i64, path: String },
    Pages { source: i64, path: String },
}

fn init_logger() {
    let mut builder = env_logger::Builder::from_default_env();
    if std::env::var("RUST_LOG").is_err() {
        if let Ok(qari_log) = std::env::var("QARI_LOG") {
            builder.parse_filters(&format!(
                "qari={qari_log},qari_lib={qari_log},qari_sources={qari_log},qari_host={qari_log}"
            ));
        }
    }
    builder.init();
}

fn main() -> ExitCode {
    init_logger();

    let opts: Opts = Opts::parse();
    match execute(opts) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{err:?}");
            eprintln!("error: {}", run::describe(&err));
            ExitCode::FAILURE
        }
    }
}

fn execute(opts: Opts) -> anyhow::Result<String> {
    let config = Config::open(opts.config)?;
    debug!("config {:?}", config);

    let transport = Arc::new(HttpTransport::new(&config)?);
    let manager = SourceManager::with_builtin_sources(transport, config.max_chapter_pages)?;

    run::run(&manager, opts.subcmd)
}
