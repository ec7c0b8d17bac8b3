mod catalog;
mod inspect;

use anyhow::Context;
use catalog::Catalog;
use clap::{Parser, Subcommand};
use tracing::{debug, error, info, metadata::LevelFilter};
use tracing_subscriber::{prelude::*, EnvFilter};

#[derive(Subcommand)]
enum Command {
    /// List the bundled enumerations.
    List,

    /// Print the `(value, label)` choices of an enumeration, one per line.
    Choices {
        /// Enumeration to print. Case-insensitive.
        enumeration: String,
    },

    /// Look up a member by name.
    Get {
        /// Enumeration to look in. Case-insensitive.
        enumeration: String,

        /// Member name. Names are normalized the same way the enumeration normalizes them.
        name: String,

        /// Printed instead of failing when there is no such member.
        #[clap(long)]
        fallback: Option<String>,
    },
}

#[derive(Parser)]
struct Args {
    /// Tool to run.
    #[clap(subcommand)]
    command: Command,
}

fn fallible_main() -> anyhow::Result<()> {
    let args = Args::parse();

    debug!("Loading catalog");
    let catalog = Catalog::load().context("cannot build bundled enumerations")?;

    let output = match args.command {
        Command::List => inspect::list(&catalog),
        Command::Choices { enumeration } => inspect::choices(catalog.find(&enumeration)?),
        Command::Get {
            enumeration,
            name,
            fallback,
        } => {
            let class = catalog.find(&enumeration)?;
            let mut found = inspect::get(class, &name, fallback.as_deref())?;
            found.push('\n');
            found
        }
    };
    print!("{output}");

    Ok(())
}

fn main() {
    let subscriber = tracing_subscriber::registry()
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr));
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("cannot set default tracing subscriber: {err}");
    }

    info!("enumchoice version {}", env!("CARGO_PKG_VERSION"));

    if let Err(err) = fallible_main() {
        error!("{err:?}");
        std::process::exit(1);
    }
}
