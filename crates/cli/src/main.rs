//! Cardápio CLI - The storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the menu
//! cardapio menu
//!
//! # Add a configured product to the cart
//! cardapio add 1 --size g --flavor "Sabor 1" --flavor "Sabor 2" --extra borda
//!
//! # Show the cart, change quantities, remove lines
//! cardapio cart
//! cardapio inc <line-id>
//! cardapio dec <line-id>
//! cardapio remove <line-id>
//! cardapio clear
//!
//! # Identify yourself and browse past orders
//! cardapio identify --phone 92984076278 --name "Ana Souza"
//! cardapio orders
//! cardapio repeat 52
//! ```
//!
//! Every invocation opens its own handle onto the shared data file
//! (`CARDAPIO_DATA_FILE`), so concurrent invocations behave like separate
//! browser tabs over the same storage.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Command output goes to stdout; this is the CLI's user interface.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

use commands::{CliError, Context};

#[derive(Parser)]
#[command(name = "cardapio")]
#[command(author, version, about = "Cardápio storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the menu
    Menu,
    /// Add a product to the cart
    Add {
        /// Product ID as shown on the menu
        product: String,

        /// Size option ID
        #[arg(short, long)]
        size: String,

        /// Flavor name (repeat for multiple flavors)
        #[arg(short, long = "flavor")]
        flavors: Vec<String>,

        /// Extra option ID (repeat for multiple extras)
        #[arg(short, long = "extra")]
        extras: Vec<String>,

        /// Free-text notes for the kitchen
        #[arg(short, long, default_value = "")]
        notes: String,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Show the cart
    Cart,
    /// Increase a cart line's quantity by one
    Inc {
        /// Line ID as shown by `cart`
        line: String,
    },
    /// Decrease a cart line's quantity (never below one)
    Dec {
        /// Line ID as shown by `cart`
        line: String,
    },
    /// Remove a cart line
    Remove {
        /// Line ID as shown by `cart`
        line: String,
    },
    /// Empty the cart
    Clear,
    /// Identify yourself by WhatsApp number and name
    Identify {
        /// WhatsApp number, 11 digits (DDD + 9 digits), mask optional
        #[arg(short, long)]
        phone: String,

        /// First and last name
        #[arg(short, long)]
        name: String,
    },
    /// Show the identified customer
    Whoami,
    /// Show the order history
    Orders,
    /// Add every item of a past order back into the cart
    Repeat {
        /// Order number as shown by `orders`
        order: u32,
    },
    /// Review the order before sending it
    Checkout,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = Context::from_env()?;

    match cli.command {
        Commands::Menu => commands::menu::show(&ctx),
        Commands::Add {
            product,
            size,
            flavors,
            extras,
            notes,
            quantity,
        } => commands::cart::add(&ctx, &product, &size, flavors, extras, notes, quantity)?,
        Commands::Cart => commands::cart::show(&ctx),
        Commands::Inc { line } => commands::cart::increment(&ctx, &line),
        Commands::Dec { line } => commands::cart::decrement(&ctx, &line),
        Commands::Remove { line } => commands::cart::remove(&ctx, &line),
        Commands::Clear => commands::cart::clear(&ctx),
        Commands::Identify { phone, name } => commands::identify::save(&ctx, &phone, &name)?,
        Commands::Whoami => commands::identify::show(&ctx)?,
        Commands::Orders => commands::orders::show(&ctx),
        Commands::Repeat { order } => commands::cart::repeat(&ctx, order)?,
        Commands::Checkout => commands::cart::checkout(&ctx)?,
    }
    Ok(())
}
