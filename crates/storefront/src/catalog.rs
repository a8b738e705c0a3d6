//! Product catalog and configuration.
//!
//! A product is configured on its detail page: one size, up to
//! `max_flavors` flavors (at least one when the product has flavors at
//! all), any number of extras, free-text notes and a quantity. The unit
//! price is the base price plus the size delta plus the chosen extras.

use cardapio_core::{LineDraft, ProductId};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A selectable size and its price delta over the base price.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeOption {
    /// Stable option ID.
    pub id: String,
    /// Display label, stored on the cart line.
    pub label: String,
    /// Added to the base price when chosen.
    pub delta: Decimal,
}

/// A selectable extra and its price.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtraOption {
    /// Stable option ID.
    pub id: String,
    /// Display label, stored on the cart line.
    pub label: String,
    /// Added to the unit price when chosen.
    pub price: Decimal,
}

/// One orderable product.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Catalog ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Menu description.
    pub description: String,
    /// Price before size and extras.
    pub base_price: Decimal,
    /// Maximum number of flavors the customer may pick.
    pub max_flavors: usize,
    /// Available flavors; empty when the product has none to pick.
    pub flavors: Vec<String>,
    /// Available sizes; the first one is the default.
    pub sizes: Vec<SizeOption>,
    /// Available extras.
    pub extras: Vec<ExtraOption>,
}

/// Validation errors when configuring a product.
///
/// These block the add-to-cart action with an inline message; they are
/// never fatal.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The chosen size is not one of the product's sizes.
    #[error("unknown size `{0}`")]
    UnknownSize(String),
    /// A chosen extra is not one of the product's extras.
    #[error("unknown extra `{0}`")]
    UnknownExtra(String),
    /// A chosen flavor is not on the product's flavor list.
    #[error("unknown flavor `{0}`")]
    UnknownFlavor(String),
    /// The product requires at least one flavor and none was chosen.
    #[error("at least one flavor must be chosen")]
    FlavorRequired,
    /// More flavors were chosen than the product allows.
    #[error("at most {max} flavors may be chosen")]
    TooManyFlavors {
        /// The product's flavor cap.
        max: usize,
    },
}

impl SelectionError {
    /// Inline message shown on the product page (pt-BR).
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::FlavorRequired => "Escolha pelo menos 1 sabor.".to_owned(),
            Self::TooManyFlavors { max } => format!(
                "Você pode escolher no máximo {max} sabor{}.",
                if *max > 1 { "es" } else { "" }
            ),
            Self::UnknownSize(_) | Self::UnknownExtra(_) | Self::UnknownFlavor(_) => {
                "Opção indisponível.".to_owned()
            }
        }
    }
}

/// The customer's choices on a product page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen size option ID.
    pub size_id: String,
    /// Chosen flavors, in selection order.
    pub flavors: Vec<String>,
    /// Chosen extra option IDs, in selection order.
    pub extras: Vec<String>,
    /// Free-text notes; trimmed before it reaches the cart.
    pub notes: String,
    /// Requested quantity.
    pub quantity: u32,
}

impl Selection {
    /// The page's initial state: the given size, nothing else chosen.
    #[must_use]
    pub fn of_size(size_id: impl Into<String>) -> Self {
        Self {
            size_id: size_id.into(),
            flavors: Vec::new(),
            extras: Vec::new(),
            notes: String::new(),
            quantity: 1,
        }
    }
}

impl Product {
    /// Unit price for a selection: base + size delta + chosen extras.
    ///
    /// # Errors
    ///
    /// Returns an error if the size or any extra is not offered by this
    /// product.
    pub fn unit_price(&self, selection: &Selection) -> Result<Decimal, SelectionError> {
        let size = self
            .sizes
            .iter()
            .find(|s| s.id == selection.size_id)
            .ok_or_else(|| SelectionError::UnknownSize(selection.size_id.clone()))?;

        let mut price = self.base_price + size.delta;
        for extra_id in &selection.extras {
            let extra = self
                .extras
                .iter()
                .find(|e| &e.id == extra_id)
                .ok_or_else(|| SelectionError::UnknownExtra(extra_id.clone()))?;
            price += extra.price;
        }
        Ok(price)
    }

    /// Validate a selection and turn it into a cart line draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the size, a flavor or an extra is not offered,
    /// if the product requires a flavor and none was chosen, or if more
    /// than `max_flavors` were chosen.
    pub fn configure(&self, selection: &Selection) -> Result<LineDraft, SelectionError> {
        if !self.flavors.is_empty() {
            if selection.flavors.is_empty() {
                return Err(SelectionError::FlavorRequired);
            }
            if selection.flavors.len() > self.max_flavors {
                return Err(SelectionError::TooManyFlavors {
                    max: self.max_flavors,
                });
            }
            for flavor in &selection.flavors {
                if !self.flavors.contains(flavor) {
                    return Err(SelectionError::UnknownFlavor(flavor.clone()));
                }
            }
        }

        let unit_price = self.unit_price(selection)?;
        let size_label = self
            .sizes
            .iter()
            .find(|s| s.id == selection.size_id)
            .map(|s| s.label.clone())
            .unwrap_or_default();
        let extra_labels = selection
            .extras
            .iter()
            .filter_map(|id| self.extras.iter().find(|e| &e.id == id))
            .map(|e| e.label.clone())
            .collect();

        Ok(LineDraft {
            product_id: self.id.clone(),
            name: self.name.clone(),
            size: size_label,
            flavors: selection.flavors.clone(),
            extras: extra_labels,
            notes: selection.notes.trim().to_owned(),
            quantity: selection.quantity,
            unit_price,
        })
    }
}

/// The product catalog.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look a product up by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// All products, in menu order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The demo catalog.
    #[must_use]
    pub fn sample() -> Self {
        let size = |id: &str, label: &str, delta| SizeOption {
            id: id.to_owned(),
            label: label.to_owned(),
            delta,
        };
        let extra = |id: &str, label: &str, price| ExtraOption {
            id: id.to_owned(),
            label: label.to_owned(),
            price,
        };

        Self::new(vec![
            Product {
                id: ProductId::new("1"),
                name: "Pizza da Casa".to_owned(),
                description: "Massa artesanal, molho da casa e até dois sabores.".to_owned(),
                base_price: dec!(14.00),
                max_flavors: 2,
                flavors: vec![
                    "Sabor 1".to_owned(),
                    "Sabor 2".to_owned(),
                    "Sabor 3".to_owned(),
                    "Sabor 4".to_owned(),
                ],
                sizes: vec![
                    size("p", "Tam 1", dec!(0)),
                    size("m", "Tam 2", dec!(7)),
                    size("g", "Tam 3", dec!(12)),
                ],
                extras: vec![
                    extra("borda", "Adicional 1", dec!(6)),
                    extra("catupiry", "Adicional 2", dec!(4)),
                    extra("bacon", "Adicional 3", dec!(5)),
                ],
            },
            Product {
                id: ProductId::new("2"),
                name: "X-Salada".to_owned(),
                description: "Pão, hambúrguer, queijo, alface, tomate e molho.".to_owned(),
                base_price: dec!(10.00),
                max_flavors: 1,
                flavors: vec!["Tradicional".to_owned()],
                sizes: vec![size("u", "Único", dec!(0))],
                extras: vec![
                    extra("ovo", "Ovo", dec!(2)),
                    extra("cheddar", "Cheddar", dec!(3)),
                ],
            },
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn pizza() -> Product {
        Catalog::sample().get(&ProductId::new("1")).unwrap().clone()
    }

    #[test]
    fn test_unit_price_adds_size_and_extras() {
        let product = pizza();
        let mut selection = Selection::of_size("g");
        selection.flavors = vec!["Sabor 1".to_owned()];
        selection.extras = vec!["borda".to_owned(), "bacon".to_owned()];

        // 14 base + 12 size + 6 + 5 extras
        assert_eq!(product.unit_price(&selection).unwrap(), dec!(37));
    }

    #[test]
    fn test_configure_builds_the_draft() {
        let product = pizza();
        let mut selection = Selection::of_size("m");
        selection.flavors = vec!["Sabor 2".to_owned(), "Sabor 4".to_owned()];
        selection.extras = vec!["catupiry".to_owned()];
        selection.notes = "  tirar cebola  ".to_owned();
        selection.quantity = 2;

        let draft = product.configure(&selection).unwrap();
        assert_eq!(draft.size, "Tam 2");
        assert_eq!(draft.extras, vec!["Adicional 2"]);
        assert_eq!(draft.notes, "tirar cebola");
        assert_eq!(draft.unit_price, dec!(25));

        let line = draft.into_line("l-1".into());
        assert_eq!(line.line_total, dec!(50));
    }

    #[test]
    fn test_flavor_required() {
        let product = pizza();
        let selection = Selection::of_size("p");

        let err = product.configure(&selection).unwrap_err();
        assert_eq!(err, SelectionError::FlavorRequired);
        assert_eq!(err.user_message(), "Escolha pelo menos 1 sabor.");
    }

    #[test]
    fn test_flavor_cap() {
        let product = pizza();
        let mut selection = Selection::of_size("p");
        selection.flavors = vec![
            "Sabor 1".to_owned(),
            "Sabor 2".to_owned(),
            "Sabor 3".to_owned(),
        ];

        let err = product.configure(&selection).unwrap_err();
        assert_eq!(err, SelectionError::TooManyFlavors { max: 2 });
        assert_eq!(err.user_message(), "Você pode escolher no máximo 2 sabores.");
    }

    #[test]
    fn test_singular_flavor_cap_message() {
        let err = SelectionError::TooManyFlavors { max: 1 };
        assert_eq!(err.user_message(), "Você pode escolher no máximo 1 sabor.");
    }

    #[test]
    fn test_unknown_size_rejected() {
        let product = pizza();
        let mut selection = Selection::of_size("xg");
        selection.flavors = vec!["Sabor 1".to_owned()];

        assert_eq!(
            product.unit_price(&selection).unwrap_err(),
            SelectionError::UnknownSize("xg".to_owned())
        );
    }

    #[test]
    fn test_unknown_flavor_rejected() {
        let product = pizza();
        let mut selection = Selection::of_size("p");
        selection.flavors = vec!["Sabor 9".to_owned()];

        assert_eq!(
            product.configure(&selection).unwrap_err(),
            SelectionError::UnknownFlavor("Sabor 9".to_owned())
        );
    }

    #[test]
    fn test_product_without_flavor_choices_needs_none() {
        let catalog = Catalog::sample();
        let burger = catalog.get(&ProductId::new("2")).unwrap();
        let mut product = burger.clone();
        product.flavors.clear();

        let draft = product.configure(&Selection::of_size("u")).unwrap();
        assert!(draft.flavors.is_empty());
        assert_eq!(draft.unit_price, dec!(10));
    }

    #[test]
    fn test_catalog_lookup_miss() {
        assert!(Catalog::sample().get(&ProductId::new("404")).is_none());
    }
}
