use clap::{Args, Subcommand};

mod list;
mod sync;

#[derive(Debug, Args)]
pub(crate) struct PacksCommand {
    #[command(subcommand)]
    command: PacksSubcommand,
}

#[derive(Debug, Subcommand)]
enum PacksSubcommand {
    List(list::ListPacksArgs),
    Sync(sync::SyncPacksArgs),
}

pub(crate) async fn run(command: PacksCommand) -> Result<(), String> {
    match command.command {
        PacksSubcommand::List(args) => list::run(args).await,
        PacksSubcommand::Sync(args) => sync::run(args).await,
    }
}
