use crate::alphabet::{
    AlphabetDefinition, AlphabetMeta, ControlPoint, Letter, LetterSegment, BASE_LINE, MIDDLE_LINE,
    TOP_LINE,
};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum KnownLetter {
    CapitalA,
}

impl KnownLetter {
    /// Single-character identifier used for lookup and in alphabet files.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::CapitalA => "A",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::iter().find(|l| l.identifier() == identifier)
    }

    pub fn definition(&self) -> Letter {
        match self {
            Self::CapitalA => capital_a(),
        }
    }
}

// Left leg up to the apex, right leg down, then the crossbar at the middle
// line as a separate stroke.
fn capital_a() -> Letter {
    Letter::new(vec![
        LetterSegment::new(vec![
            ControlPoint::new(0.0, BASE_LINE),
            ControlPoint::new(0.1, (2.0 * BASE_LINE) / 3.0 + TOP_LINE / 3.0),
            ControlPoint::new(0.2, BASE_LINE / 3.0 + (2.0 * TOP_LINE) / 3.0),
            ControlPoint::new(0.3, TOP_LINE),
            ControlPoint::new(0.4, BASE_LINE / 3.0 + (2.0 * TOP_LINE) / 3.0),
            ControlPoint::new(0.5, (2.0 * BASE_LINE) / 3.0 + TOP_LINE / 3.0),
            ControlPoint::new(0.6, BASE_LINE),
        ]),
        LetterSegment::new(vec![
            ControlPoint::new(0.1, MIDDLE_LINE),
            ControlPoint::new(0.2, MIDDLE_LINE),
            ControlPoint::new(0.3, MIDDLE_LINE),
            ControlPoint::new(0.4, MIDDLE_LINE),
            ControlPoint::new(0.5, MIDDLE_LINE),
        ]),
    ])
}

pub fn get_all_letters() -> HashMap<KnownLetter, Letter> {
    let mut map = HashMap::new();
    for letter in KnownLetter::iter() {
        map.insert(letter, letter.definition());
    }
    map
}

/// The built-in letter set as an `AlphabetDefinition`, keyed by identifier.
pub fn builtin_alphabet() -> AlphabetDefinition {
    let letters = KnownLetter::iter()
        .map(|l| (l.identifier().to_string(), l.definition()))
        .collect();
    AlphabetDefinition {
        meta: AlphabetMeta {
            name: "builtin".to_string(),
            ..Default::default()
        },
        letters,
    }
}
