//! Menu listing.

use cardapio_storefront::format::brl;

use super::Context;

/// Print the menu: every product with its sizes, flavors and extras.
pub fn show(ctx: &Context) {
    for product in ctx.catalog.products() {
        println!("[{}] {} - {}", product.id, product.name, brl(product.base_price));
        println!("    {}", product.description);

        if !product.flavors.is_empty() {
            println!(
                "    Sabores (até {}): {}",
                product.max_flavors,
                product.flavors.join(", ")
            );
        }
        for size in &product.sizes {
            if size.delta.is_zero() {
                println!("    Tamanho {}: {}", size.id, size.label);
            } else {
                println!("    Tamanho {}: {} (+{})", size.id, size.label, brl(size.delta));
            }
        }
        for extra in &product.extras {
            println!("    Adicional {}: {} (+{})", extra.id, extra.label, brl(extra.price));
        }
        println!();
    }
}
