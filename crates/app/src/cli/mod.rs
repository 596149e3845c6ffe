use clap::{Parser, Subcommand};

mod db;
mod package;
mod packs;

#[derive(Debug, Parser)]
#[command(name = "packwise-app", about = "Packwise CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Packs(packs::PacksCommand),
    Package(package::PackageArgs),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Packs(command) => packs::run(command).await,
            Commands::Package(args) => package::run(args).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
