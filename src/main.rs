use std::{io, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use furniture_pos::{
    catalog,
    config::{self, AppConfig},
    db::{self, DbPool, MigrationAction},
    entities::ProductType,
    errors::ServiceError,
    models::CartLineRequest,
    services::AppServices,
    session::ShopSession,
};
use serde::Serialize;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Shop);
    let migrate_on_connect = !matches!(command, Commands::Migrate(_));
    let context = CliContext::initialize(cli.database_url, migrate_on_connect).await?;

    match command {
        Commands::Shop => handle_shop(&context).await?,
        Commands::Seed(args) => handle_seed(&context, args, cli.json).await?,
        Commands::Catalog(command) => handle_catalog_command(&context, command, cli.json).await?,
        Commands::Cart(command) => handle_cart_command(&context, command, cli.json).await?,
        Commands::Migrate(args) => handle_migrate(&context, args).await?,
    }

    Ok(())
}

#[derive(Parser)]
#[command(
    name = "furniture-pos",
    about = "Point-of-sale inventory and shopping carts for a furniture store",
    version
)]
struct Cli {
    #[arg(
        long,
        global = true,
        action = ArgAction::SetTrue,
        help = "Render command output as pretty JSON when available"
    )]
    json: bool,
    #[arg(long, global = true, help = "Database URL, overriding configuration")]
    database_url: Option<String>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive shop on stdin/stdout (default)
    Shop,
    /// Load a catalog into the product tables
    Seed(SeedArgs),
    #[command(subcommand)]
    Catalog(CatalogCommands),
    #[command(subcommand)]
    Cart(CartCommands),
    /// Apply or roll back schema migrations
    Migrate(MigrateArgs),
}

#[derive(Args)]
struct SeedArgs {
    #[arg(long, help = "JSON catalog file; defaults to the built-in catalog")]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum CatalogCommands {
    /// List every product of one type
    List(CatalogListArgs),
    /// Show one product by model number
    Show(CatalogShowArgs),
}

#[derive(Args)]
struct CatalogListArgs {
    #[arg(value_enum)]
    product_type: ProductTypeArg,
}

#[derive(Args)]
struct CatalogShowArgs {
    #[arg(value_enum)]
    product_type: ProductTypeArg,
    model: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum ProductTypeArg {
    Chair,
    Bed,
    Bookshelf,
}

impl From<ProductTypeArg> for ProductType {
    fn from(arg: ProductTypeArg) -> Self {
        match arg {
            ProductTypeArg::Chair => ProductType::Chair,
            ProductTypeArg::Bed => ProductType::Bed,
            ProductTypeArg::Bookshelf => ProductType::Bookshelf,
        }
    }
}

#[derive(Subcommand)]
enum CartCommands {
    /// Add a product to a cart
    Add(CartAddArgs),
    /// Show a cart with line and grand totals
    Show(CartShowArgs),
}

#[derive(Args)]
struct CartAddArgs {
    #[arg(long, help = "Cart identifier, usually the shopper's name")]
    cart: String,
    #[arg(long = "type", help = "Product type: Chair, Bed or Bookshelf")]
    product_type: String,
    #[arg(long, help = "Model number, e.g. CH-001")]
    model: String,
    #[arg(long, default_value_t = 1)]
    quantity: i32,
}

#[derive(Args)]
struct CartShowArgs {
    #[arg(long, help = "Cart identifier")]
    cart: String,
}

#[derive(Args)]
struct MigrateArgs {
    #[arg(value_enum, default_value_t = MigrateArg::Up)]
    action: MigrateArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum MigrateArg {
    Up,
    Down,
    Fresh,
}

impl From<MigrateArg> for MigrationAction {
    fn from(arg: MigrateArg) -> Self {
        match arg {
            MigrateArg::Up => MigrationAction::Up,
            MigrateArg::Down => MigrationAction::Down,
            MigrateArg::Fresh => MigrationAction::Fresh,
        }
    }
}

struct CliContext {
    config: AppConfig,
    db: Arc<DbPool>,
    services: AppServices,
}

impl CliContext {
    async fn initialize(database_url: Option<String>, migrate: bool) -> Result<Self> {
        let mut config = config::load_config().context("failed to load application config")?;
        if let Some(url) = database_url {
            config.database_url = url;
        }
        config::init_tracing(config.log_level(), config.log_json);

        let db_pool = db::establish_connection_from_app_config(&config)
            .await
            .context("failed to connect to database")?;
        if migrate && config.auto_migrate {
            db::run_migrations(&db_pool)
                .await
                .context("failed to run database migrations")?;
        }
        let db = Arc::new(db_pool);
        let services = AppServices::new(db.clone());

        Ok(Self {
            config,
            db,
            services,
        })
    }
}

async fn handle_shop(context: &CliContext) -> Result<()> {
    if context.config.seed_on_startup {
        context
            .services
            .seeding
            .seed_default_catalog()
            .await
            .context("failed to seed the store catalog")?;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ShopSession::new(context.services.clone(), stdin.lock(), stdout.lock());
    session.run().await.context("shop session failed")?;
    info!("Shop session ended");
    Ok(())
}

async fn handle_seed(context: &CliContext, args: SeedArgs, json: bool) -> Result<()> {
    let records = match &args.catalog {
        Some(path) => catalog::load_catalog_file(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?,
        None => catalog::default_catalog(),
    };

    let report = context
        .services
        .seeding
        .insert_furniture(&records)
        .await
        .context("failed to seed products")?;

    if json {
        print_json(&report)?;
    } else {
        println!(
            "Inserted {} products, skipped {} already present",
            report.inserted, report.skipped
        );
    }
    Ok(())
}

async fn handle_catalog_command(
    context: &CliContext,
    command: CatalogCommands,
    json: bool,
) -> Result<()> {
    match command {
        CatalogCommands::List(args) => {
            let page = context
                .services
                .catalog
                .list_products(args.product_type.into())
                .await
                .context("failed to list products")?;
            if json {
                print_json(&page)?;
            } else {
                print!("{}", page);
            }
        }
        CatalogCommands::Show(args) => {
            let product_type = ProductType::from(args.product_type);
            let product = context
                .services
                .catalog
                .find_product(product_type, &args.model)
                .await
                .context("failed to look up product")?
                .ok_or_else(|| ServiceError::product_not_found(product_type, &args.model))?;
            if json {
                print_json(&product)?;
            } else {
                println!("{}", product);
            }
        }
    }
    Ok(())
}

async fn handle_cart_command(
    context: &CliContext,
    command: CartCommands,
    json: bool,
) -> Result<()> {
    match command {
        CartCommands::Add(args) => {
            let request =
                CartLineRequest::new(args.cart, args.product_type, args.model, args.quantity);
            let lines = context
                .services
                .carts
                .insert_cart_items(std::slice::from_ref(&request))
                .await
                .context("failed to add to cart")?;
            if json {
                print_json(&lines)?;
            } else {
                for line in &lines {
                    println!(
                        "Added {} x {} {} to cart. Cart {} now holds {}.",
                        request.quantity,
                        line.product_type,
                        line.model_no,
                        line.cart_id,
                        line.quantity
                    );
                }
            }
        }
        CartCommands::Show(args) => {
            let listing = context
                .services
                .listing
                .list_cart_contents(&args.cart)
                .await
                .context("failed to list cart")?;
            if json {
                print_json(&listing)?;
            } else {
                print!("{}", listing);
            }
        }
    }
    Ok(())
}

async fn handle_migrate(context: &CliContext, args: MigrateArgs) -> Result<()> {
    db::apply_migrations(&context.db, args.action.into())
        .await
        .context("migration failed")?;
    println!("Migrations applied");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
