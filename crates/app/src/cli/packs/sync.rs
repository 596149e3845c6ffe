use clap::Args;
use packwise_app::context::AppContext;

#[derive(Debug, Args)]
pub(crate) struct SyncPacksArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Pack sizes to keep; every other size is removed. Omit to remove all packs.
    #[arg(long = "size", value_name = "SIZE", value_delimiter = ',')]
    sizes: Vec<u64>,
}

pub(crate) async fn run(args: SyncPacksArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialise app: {error}"))?;

    app.packs
        .sync_packs(args.sizes)
        .await
        .map_err(|error| format!("failed to sync packs: {error}"))?;

    let sizes = app
        .packs
        .list_pack_sizes()
        .await
        .map_err(|error| format!("failed to list packs: {error}"))?;

    println!(
        "packs: {}",
        sizes
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}
