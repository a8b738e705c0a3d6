//! Cart commands: show, add, quantity changes, clear and repeat-order.

use cardapio_core::{CartLine, LineId, ProductId};
use cardapio_storefront::cart::CartSummary;
use cardapio_storefront::catalog::Selection;
use cardapio_storefront::format::{brl, delivery_label};
use cardapio_storefront::store::keys;

use super::{CliError, Context};

/// Print the cart with one row per line plus the totals block.
pub fn show(ctx: &Context) {
    let lines = ctx.cart.read();
    if lines.is_empty() {
        println!("Seu carrinho está vazio.");
        return;
    }

    for line in &lines {
        print_line(line);
    }

    let summary = CartSummary::compute(&lines, ctx.config.delivery_fee);
    println!();
    println!("Subtotal: {}", brl(summary.subtotal));
    println!("Entrega:  {}", delivery_label(summary.delivery));
    println!("Total:    {}", brl(summary.total));
}

/// Configure a product and add it to the cart.
///
/// # Errors
///
/// Returns an error when the product is unknown or the selection does not
/// validate (missing flavor, too many flavors, unknown option).
pub fn add(
    ctx: &Context,
    product_id: &str,
    size: &str,
    flavors: Vec<String>,
    extras: Vec<String>,
    notes: String,
    quantity: u32,
) -> Result<(), CliError> {
    let product = ctx
        .catalog
        .get(&ProductId::new(product_id))
        .ok_or_else(|| CliError::UnknownProduct(product_id.to_owned()))?;

    let selection = Selection {
        size_id: size.to_owned(),
        flavors,
        extras,
        notes,
        quantity,
    };
    let draft = product
        .configure(&selection)
        .map_err(|e| CliError::Selection(e.user_message()))?;

    let lines = ctx.cart.add_line(draft);
    println!("Adicionado: {} x{}", product.name, quantity);
    println!("Itens no carrinho: {}", total_units(&lines));
    Ok(())
}

/// Increase a line's quantity by one.
pub fn increment(ctx: &Context, line_id: &str) {
    ctx.cart.increment(&LineId::new(line_id));
    show(ctx);
}

/// Decrease a line's quantity, never below one.
pub fn decrement(ctx: &Context, line_id: &str) {
    ctx.cart.decrement(&LineId::new(line_id));
    show(ctx);
}

/// Remove a line.
pub fn remove(ctx: &Context, line_id: &str) {
    ctx.cart.remove(&LineId::new(line_id));
    show(ctx);
}

/// Empty the cart.
pub fn clear(ctx: &Context) {
    ctx.cart.clear();
    println!("Carrinho esvaziado.");
}

/// Add every item of a past order back into the cart.
///
/// # Errors
///
/// Returns an error when the order number is not in the history.
pub fn repeat(ctx: &Context, order_id: u32) -> Result<(), CliError> {
    let order = ctx
        .history
        .iter()
        .find(|o| o.id == order_id)
        .ok_or(CliError::UnknownOrder(order_id))?;

    let lines = ctx.cart.repeat_order(order, &ctx.prices);
    println!("Pedido #{order_id} adicionado ao carrinho.");
    println!("Itens no carrinho: {}", total_units(&lines));
    Ok(())
}

/// Review the order before sending it.
///
/// Checkout itself is out of scope; this prints the final summary for the
/// identified customer and stops there.
///
/// # Errors
///
/// Returns an error when the cart is empty, no customer is identified, or
/// the store cannot be read.
pub fn checkout(ctx: &Context) -> Result<(), CliError> {
    let lines = ctx.cart.read();
    if lines.is_empty() {
        return Err(CliError::EmptyCart);
    }
    let profile = ctx
        .cart
        .handle()
        .read_json::<cardapio_core::Profile>(keys::USER_PROFILE)?
        .ok_or(CliError::NotIdentified)?;

    println!("Pedido de {} {}", profile.name, profile.phone.masked());
    println!();
    show(ctx);
    println!();
    println!("Envie o pedido pelo WhatsApp para concluir.");
    Ok(())
}

fn total_units(lines: &[CartLine]) -> u32 {
    lines.iter().map(|l| l.quantity).sum()
}

fn print_line(line: &CartLine) {
    println!(
        "[{}] {} x{}  {}  (unit. {})",
        line.line_id,
        line.name,
        line.quantity,
        brl(line.line_total),
        brl(line.unit_price),
    );
    if !line.size.is_empty() {
        println!("    Tamanho: {}", line.size);
    }
    if !line.flavors.is_empty() {
        println!("    Sabores: {}", line.flavors.join(", "));
    }
    if !line.extras.is_empty() {
        println!("    Adicionais: {}", line.extras.join(", "));
    }
    if !line.notes.is_empty() {
        println!("    Obs.: {}", line.notes);
    }
}
