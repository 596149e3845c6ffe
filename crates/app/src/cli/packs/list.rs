use clap::Args;
use packwise_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct ListPacksArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: ListPacksArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialise app: {error}"))?;

    let packs = app
        .packs
        .list_packs()
        .await
        .map_err(|error| format!("failed to list packs: {error}"))?;

    if packs.is_empty() {
        println!("no packs configured");
        return Ok(());
    }

    for pack in packs {
        println!("{}\tcreated_at: {}", pack.size, pack.created_at);
    }

    Ok(())
}
