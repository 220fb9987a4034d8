use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use super::de;

// ---------------------------------------------------------------------------
// CardType
// ---------------------------------------------------------------------------

/// Top-level card category, from the upstream `card_type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CardType {
    Trap,
    Spell,
    Monster,
}

impl FromStr for CardType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trap" => Ok(Self::Trap),
            "spell" => Ok(Self::Spell),
            "monster" => Ok(Self::Monster),
            other => Err(format!("unknown card type: {other:?}")),
        }
    }
}

impl<'de> Deserialize<'de> for CardType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Trap => "Trap",
            Self::Spell => "Spell",
            Self::Monster => "Monster",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// Card — static card metadata plus artwork
// ---------------------------------------------------------------------------

/// A single named card as returned by `card_data/{name}`.
///
/// `image` is not part of the JSON payload; it is filled from
/// `card_image/{name}` by [`CardQuery::get_by_name`].
///
/// [`CardQuery::get_by_name`]: crate::queries::cards::CardQuery::get_by_name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    #[serde(rename = "text", default, deserialize_with = "de::string_or_default")]
    pub description: String,
    pub card_type: CardType,
    /// e.g. `"Normal Monster"`, `"Spellcaster / Effect"`.
    #[serde(rename = "type", default)]
    pub monster_type: Option<String>,
    #[serde(rename = "family", default)]
    pub attribute: Option<String>,
    #[serde(rename = "atk", default, deserialize_with = "de::opt_int")]
    pub attack: Option<i64>,
    #[serde(rename = "def", default, deserialize_with = "de::opt_int")]
    pub defense: Option<i64>,
    #[serde(default, deserialize_with = "de::opt_int")]
    pub level: Option<i64>,
    /// Spell/trap property such as `"Continuous"` or `"Quick-Play"`.
    #[serde(rename = "property", default)]
    pub extra_properties: Option<String>,
    #[serde(skip)]
    pub image: Vec<u8>,
}

impl Card {
    pub fn is_monster(&self) -> bool {
        self.card_type == CardType::Monster
    }

    /// True once artwork bytes have been attached.
    pub fn has_image(&self) -> bool {
        !self.image.is_empty()
    }
}
