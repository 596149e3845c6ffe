use clap::Args;
use packwise_app::{context::AppContext, domain::packaging::PackagingServiceError};

#[derive(Debug, Args)]
pub(crate) struct PackageArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Number of items ordered
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    items: u64,
}

pub(crate) async fn run(args: PackageArgs) -> Result<(), String> {
    let app = AppContext::from_database_url(&args.database_url)
        .await
        .map_err(|error| format!("failed to initialise app: {error}"))?;

    let plan = app
        .packaging
        .pack_items(args.items)
        .await
        .map_err(|error| match error {
            PackagingServiceError::NoPacksConfigured => error.to_string(),
            error => format!("failed to pack items: {error}"),
        })?;

    for (size, count) in plan.iter() {
        println!("{size} x {count}");
    }

    println!("total_items: {}", plan.total_items());
    println!("surplus: {}", plan.surplus(args.items));
    println!("pack_count: {}", plan.pack_count());

    Ok(())
}
