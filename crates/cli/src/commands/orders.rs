//! Order history listing.

use cardapio_storefront::format::order_timestamp;

use super::Context;

/// Print the order history, newest first.
pub fn show(ctx: &Context) {
    for order in &ctx.history {
        println!(
            "Pedido #{} - {} [{}]",
            order.id,
            order.total,
            order.status.label()
        );
        println!("  {}", order_timestamp(order.date));
        for item in &order.items {
            println!("  {item}");
        }
        println!();
    }
}
