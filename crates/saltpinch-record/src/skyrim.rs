//! Well-known Skyrim keys

use crate::{FormKey, ModKey, ModType};

/// Base game master file name
pub const SKYRIM_ESM: &str = "Skyrim.esm";

/// Local id of the vanilla Salt Pile ingredient
pub const SALT_PILE_ID: u32 = 0x03_4CDF;

/// `Skyrim.esm`
#[must_use]
pub fn skyrim_esm() -> ModKey {
    ModKey::new("Skyrim", ModType::Master).unwrap_or_else(|_| unreachable!("literal name"))
}

/// Vanilla Salt Pile ingredient, `034CDF:Skyrim.esm`
#[must_use]
pub fn salt_pile() -> FormKey {
    FormKey::new(skyrim_esm(), SALT_PILE_ID).unwrap_or_else(|_| unreachable!("literal id"))
}
