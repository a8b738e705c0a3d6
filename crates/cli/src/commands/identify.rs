//! Customer identification: save and show the stored profile.

use cardapio_core::Profile;
use cardapio_storefront::store::keys;

use super::{CliError, Context};

/// Validate and store the customer profile.
///
/// # Errors
///
/// Returns an error when the phone or name does not validate, or when the
/// profile cannot be written to the store.
pub fn save(ctx: &Context, phone: &str, name: &str) -> Result<(), CliError> {
    let profile = Profile::parse(phone, name)
        .map_err(|e| CliError::Profile(e.user_message().to_owned()))?;

    ctx.cart
        .handle()
        .write_json(keys::USER_PROFILE, &profile)?;

    println!("Identificado: {} {}", profile.name, profile.phone.masked());
    Ok(())
}

/// Show the stored profile, if any.
///
/// # Errors
///
/// Returns an error when the store cannot be read.
pub fn show(ctx: &Context) -> Result<(), CliError> {
    match ctx.cart.handle().read_json::<Profile>(keys::USER_PROFILE)? {
        Some(profile) => println!("{} {}", profile.name, profile.phone.masked()),
        None => println!("Nenhum cliente identificado."),
    }
    Ok(())
}
