//! `sugarrush` — demo driver for the catalog & session store.
//!
//! Stands in for the storefront UI: each subcommand maps to what a page
//! would do against the store. State lives in a JSON file under the data
//! directory, so sessions and stock survive between invocations.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use sugarrush_auth::{Identity, RouteDecision, View, route};
use sugarrush_catalog::{
    NewProduct, Product, ProductFilter, ProductPatch, filter_products, inventory_value,
    low_stock_count,
};
use sugarrush_core::ProductId;
use sugarrush_store::{JsonFileStorage, StoreApi};

#[derive(Parser)]
#[command(name = "sugarrush", about = "Sweet shop demo backend")]
struct Args {
    /// Directory holding the store file.
    #[arg(long, env = "SUGARRUSH_DATA_DIR", default_value = ".sugarrush")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the catalog, optionally filtered like the storefront grid.
    List {
        #[arg(long, default_value = "")]
        search: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value_t = 0)]
        min_price: u64,
        #[arg(long, default_value_t = u64::MAX)]
        max_price: u64,
    },
    /// Show one product.
    Show { id: String },
    /// Sign in (unrecognized credentials register a new customer).
    Login { username: String, password: String },
    /// Sign out.
    Logout,
    /// Print the active session.
    Whoami,
    /// Buy a product.
    Purchase {
        id: String,
        #[arg(long, default_value_t = 1)]
        amount: u32,
    },
    /// Add a product (admin).
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        price: u64,
        #[arg(long)]
        quantity: u32,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Update fields of a product (admin).
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        price: Option<u64>,
        #[arg(long)]
        quantity: Option<u32>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        image_url: Option<String>,
    },
    /// Delete a product (admin).
    Rm { id: String },
    /// Inventory dashboard numbers (admin).
    Stats,
}

fn main() -> Result<()> {
    sugarrush_observability::init();
    let args = Args::parse();

    let storage = JsonFileStorage::new(args.data_dir.join("store.json"));
    tracing::debug!(path = %storage.path().display(), "opening store");
    let api = StoreApi::open(storage).context("failed to open store")?;

    match args.command {
        Command::List {
            search,
            category,
            min_price,
            max_price,
        } => {
            let filter = ProductFilter {
                search,
                category,
                min_price,
                max_price,
            };
            let catalog = api.list_products()?;
            for product in filter_products(&catalog, &filter) {
                print_product(product);
            }
        }
        Command::Show { id } => match api.get_product(&ProductId::new(id))? {
            Some(product) => print_product(&product),
            None => bail!("no such product"),
        },
        Command::Login { username, password } => {
            let session = api.authenticate(&username, &password)?;
            println!(
                "signed in as {} ({})",
                session.identity.username, session.identity.role
            );
        }
        Command::Logout => {
            api.end_session()?;
            println!("signed out");
        }
        Command::Whoami => match api.current_identity()? {
            Some(identity) => println!("{} ({})", identity.username, identity.role),
            None => println!("not signed in"),
        },
        Command::Purchase { id, amount } => {
            if api.current_identity()?.is_none() {
                bail!("sign in before purchasing");
            }
            let updated = api.purchase(&ProductId::new(id), amount)?;
            println!("purchased {} x{amount}, {} left", updated.name, updated.quantity);
        }
        Command::Add {
            name,
            category,
            price,
            quantity,
            description,
            image_url,
        } => {
            require_admin(&api)?;
            let created = api.create_product(NewProduct {
                name,
                category,
                price,
                quantity,
                description,
                image_url,
            })?;
            println!("created {} ({})", created.name, created.id);
        }
        Command::Update {
            id,
            name,
            category,
            price,
            quantity,
            description,
            image_url,
        } => {
            require_admin(&api)?;
            let patch = ProductPatch {
                name,
                category,
                price,
                quantity,
                description,
                image_url,
            };
            let updated = api.update_product(&ProductId::new(id), patch)?;
            print_product(&updated);
        }
        Command::Rm { id } => {
            require_admin(&api)?;
            api.delete_product(&ProductId::new(id))?;
            println!("deleted");
        }
        Command::Stats => {
            require_admin(&api)?;
            let catalog = api.list_products()?;
            println!("products:        {}", catalog.len());
            println!("inventory value: {}", inventory_value(&catalog));
            println!("low stock:       {}", low_stock_count(&catalog));
        }
    }

    Ok(())
}

/// Gate admin commands the way the admin view is gated.
fn require_admin<S: sugarrush_store::Storage>(api: &StoreApi<S>) -> Result<Identity> {
    let identity = api.current_identity()?;
    match (route(identity.as_ref(), View::Admin), identity) {
        (RouteDecision::Render, Some(identity)) => Ok(identity),
        (RouteDecision::Render, None) | (RouteDecision::RedirectToLogin, _) => {
            bail!("sign in first (try: login admin password)")
        }
        (RouteDecision::RedirectToHome, _) => bail!("admin role required"),
    }
}

fn print_product(product: &Product) {
    println!(
        "{:<38} {:<28} {:<12} price {:>5}  stock {:>4}",
        product.id.as_str(),
        product.name,
        product.category,
        product.price,
        product.quantity
    );
}
