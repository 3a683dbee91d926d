//! Coupons Application CLI

use std::{process, sync::Arc};

use clap::{Args, Parser, Subcommand};
use coupons_app::{
    database,
    domain::coupons::{
        CouponApplicationService, CouponsService, data::NewCouponRequest, models::Coupon,
        repository::PgCouponStore,
    },
};
use rust_decimal::Decimal;

#[derive(Debug, Parser)]
#[command(name = "coupons-app", about = "Coupons CLI", long_about = None)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Manage coupons
    Coupon(CouponCommand),

    /// Apply pending schema migrations
    Migrate,
}

#[derive(Debug, Args)]
struct CouponCommand {
    #[command(subcommand)]
    command: CouponSubcommand,
}

#[derive(Debug, Subcommand)]
enum CouponSubcommand {
    /// Create a coupon
    Create(CreateCouponArgs),

    /// Show one or more coupons by code
    Show(ShowCouponsArgs),
}

#[derive(Debug, Args)]
struct CreateCouponArgs {
    /// Coupon code; stored in lowercase
    #[arg(long)]
    code: String,

    /// Flat discount amount
    #[arg(long)]
    discount: Decimal,

    /// Minimum basket value
    #[arg(long)]
    min_basket_value: Option<Decimal>,
}

#[derive(Debug, Args)]
struct ShowCouponsArgs {
    /// Coupon codes, matched exactly
    #[arg(required = true)]
    codes: Vec<String>,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let database_url = cli
        .database_url
        .ok_or_else(|| "DATABASE_URL must be set".to_string())?;

    let pool = database::connect(&database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = CouponApplicationService::new(Arc::new(PgCouponStore::new(pool.clone())));

    match cli.command {
        Commands::Migrate => database::migrate(&pool)
            .await
            .map_err(|error| format!("failed to apply migrations: {error}")),
        Commands::Coupon(CouponCommand {
            command: CouponSubcommand::Create(args),
        }) => create_coupon(&service, args).await,
        Commands::Coupon(CouponCommand {
            command: CouponSubcommand::Show(args),
        }) => show_coupons(&service, args).await,
    }
}

async fn create_coupon(service: &dyn CouponsService, args: CreateCouponArgs) -> Result<(), String> {
    let coupon = service
        .create_coupon(Some(NewCouponRequest {
            code: Some(args.code),
            discount: args.discount,
            min_basket_value: args.min_basket_value,
        }))
        .await
        .map_err(|error| format!("failed to create coupon: {error}"))?;

    print_coupon(&coupon);

    Ok(())
}

async fn show_coupons(service: &dyn CouponsService, args: ShowCouponsArgs) -> Result<(), String> {
    let coupons = service
        .get_coupons(&args.codes)
        .await
        .map_err(|error| format!("failed to fetch coupons: {error}"))?;

    for coupon in &coupons {
        print_coupon(coupon);
    }

    Ok(())
}

fn print_coupon(coupon: &Coupon) {
    let min_basket_value = coupon
        .min_basket_value
        .map_or_else(|| "-".to_string(), |value| value.to_string());

    println!("coupon_uuid: {}", coupon.uuid);
    println!("code: {}", coupon.code);
    println!("discount: {}", coupon.discount);
    println!("min_basket_value: {min_basket_value}");
}
