//! Dragonfruit CLI - drive a shopping cart from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Print the current cart
//! df-cli show
//!
//! # Add one unit of product 1
//! df-cli add 1
//!
//! # Remove product 1 entirely
//! df-cli remove 1
//!
//! # Request a quantity change for product 1
//! df-cli update 1 -1
//! ```
//!
//! # Commands
//!
//! - `show` - Print the current cart
//! - `add` - Add a product to the cart
//! - `remove` - Remove a product from the cart
//! - `update` - Change a product's quantity

#![cfg_attr(not(test), forbid(unsafe_code))]
// Cart contents go to stdout; diagnostics go through tracing.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use dragonfruit_core::ProductId;

mod commands;

#[derive(Parser)]
#[command(name = "df-cli")]
#[command(author, version, about = "Dragonfruit cart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current cart
    Show,
    /// Add one unit of a product to the cart
    Add {
        /// Product id
        id: i32,
    },
    /// Remove a product from the cart entirely
    Remove {
        /// Product id
        id: i32,
    },
    /// Request a quantity change for a product already in the cart
    Update {
        /// Product id
        id: i32,
        /// Signed quantity delta (negative values decrease)
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter; defaults to info for our crates
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dragonfruit_cart=info,dragonfruit_cli=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut cart = commands::cart::open()?;

    match cli.command {
        Commands::Show => commands::cart::show(&cart),
        Commands::Add { id } => {
            cart.add_product(ProductId::new(id)).await?;
            commands::cart::show(&cart);
        }
        Commands::Remove { id } => {
            cart.remove_product(ProductId::new(id))?;
            commands::cart::show(&cart);
        }
        Commands::Update { id, delta } => {
            cart.update_product_amount(ProductId::new(id), delta).await?;
            commands::cart::show(&cart);
        }
    }
    Ok(())
}
