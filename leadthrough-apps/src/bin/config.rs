use clap::{Parser, ValueEnum};
use schemars::schema_for;
use tracing::debug;

#[derive(Debug, Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
struct Args {
    #[command(subcommand)]
    subcommand: Subcommand,
}

#[derive(Debug, clap::Subcommand)]
enum Subcommand {
    /// Generate JSON schema for the specified config file.
    Schema {
        /// Kind of config file.
        #[arg(value_enum, ignore_case = true)]
        kind: ConfigKind,
    },
}

#[derive(Clone, Debug, ValueEnum)]
enum ConfigKind {
    RecorderConfig,
}

fn main() {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    debug!(?args);

    match args.subcommand {
        Subcommand::Schema { kind } => {
            let schema = match kind {
                ConfigKind::RecorderConfig => schema_for!(leadthrough_apps::RecorderConfig),
            };
            println!("{}", serde_json::to_string_pretty(&schema).unwrap());
        }
    }
}
