//! Command implementations for the Cardápio CLI.

pub mod cart;
pub mod identify;
pub mod menu;
pub mod orders;

use cardapio_storefront::cart::CartService;
use cardapio_storefront::catalog::Catalog;
use cardapio_storefront::config::{ConfigError, StorefrontConfig};
use cardapio_storefront::orders::{Order, PriceTable, sample_history};
use cardapio_storefront::store::{JsonFileStore, SharedStore, StoreError};
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration failed to load.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The shared store could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The given product ID is not in the catalog.
    #[error("No product with ID `{0}` on the menu")]
    UnknownProduct(String),

    /// The given order number is not in the history.
    #[error("No order #{0} in the history")]
    UnknownOrder(u32),

    /// The product selection did not validate.
    #[error("{0}")]
    Selection(String),

    /// The phone number or name did not validate.
    #[error("{0}")]
    Profile(String),

    /// Checkout was attempted with an empty cart.
    #[error("Seu carrinho está vazio.")]
    EmptyCart,

    /// Checkout was attempted before identification.
    #[error("Identifique-se antes de finalizar o pedido.")]
    NotIdentified,
}

/// Everything a command needs: the cart service over the configured data
/// file plus the demo catalog and order history.
pub struct Context {
    pub config: StorefrontConfig,
    pub cart: CartService,
    pub catalog: Catalog,
    pub prices: PriceTable,
    pub history: Vec<Order>,
}

impl Context {
    /// Assemble the context from the environment.
    ///
    /// Each CLI invocation is one "tab": it opens its own handle onto the
    /// shared data file, so concurrent invocations see each other's writes
    /// the same way browser tabs do.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration fails to load.
    pub fn from_env() -> Result<Self, CliError> {
        let config = StorefrontConfig::from_env()?;
        let store = SharedStore::new(JsonFileStore::new(&config.data_file));
        let cart = CartService::new(store.open());

        Ok(Self {
            config,
            cart,
            catalog: Catalog::sample(),
            prices: PriceTable::sample(),
            history: sample_history(),
        })
    }
}
