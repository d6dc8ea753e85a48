pub mod render;
pub mod score;
pub mod simulate;

use scrivepad::alphabet::{AlphabetDefinition, Letter};
use scrivepad::error::{ScrivePadError, SpResult};

pub fn resolve_letter(alphabet: &AlphabetDefinition, identifier: &str) -> SpResult<Letter> {
    alphabet.get(identifier).cloned().ok_or_else(|| {
        ScrivePadError::InvalidArgument(format!(
            "Unknown letter '{}' (available: {:?})",
            identifier,
            alphabet.identifiers()
        ))
    })
}
