//! Fixed value sets for listing fields.
//!
//! Every value has a serialized key (`tools`), a display label
//! (`Tools & DIY`) and is parsed leniently from either, ignoring case and
//! punctuation, so `"Tools"`, `"tools & diy"` and `"TOOLS"` all agree.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
}

fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Find the value whose key, label or short name normalizes to the same text as `input`.
pub(crate) fn parse_labeled<T: Copy>(
    kind: &'static str,
    input: &str,
    all: &[T],
    names: impl Fn(&T) -> [&'static str; 3],
) -> Result<T, ParseLabelError> {
    let wanted = normalize(input);
    if !wanted.is_empty() {
        for value in all {
            if names(value).iter().any(|name| normalize(name) == wanted) {
                return Ok(*value);
            }
        }
    }
    Err(ParseLabelError {
        kind,
        value: input.to_string(),
    })
}

/// Listing category, as offered by the marketplace category picker
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Electronics,
    Furniture,
    Clothing,
    Shoes,
    Accessories,
    Vehicles,
    Books,
    Hobbies,
    Sports,
    Kitchen,
    Tools,
    RealEstate,
    Health,
    Pets,
    Business,
    Toys,
    MusicalInstruments,
    Office,
    Collectibles,
    Baby,
    Garden,
    Events,
}

impl Category {
    pub const ALL: [Category; 22] = [
        Category::Electronics,
        Category::Furniture,
        Category::Clothing,
        Category::Shoes,
        Category::Accessories,
        Category::Vehicles,
        Category::Books,
        Category::Hobbies,
        Category::Sports,
        Category::Kitchen,
        Category::Tools,
        Category::RealEstate,
        Category::Health,
        Category::Pets,
        Category::Business,
        Category::Toys,
        Category::MusicalInstruments,
        Category::Office,
        Category::Collectibles,
        Category::Baby,
        Category::Garden,
        Category::Events,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Furniture => "furniture",
            Category::Clothing => "clothing",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
            Category::Vehicles => "vehicles",
            Category::Books => "books",
            Category::Hobbies => "hobbies",
            Category::Sports => "sports",
            Category::Kitchen => "kitchen",
            Category::Tools => "tools",
            Category::RealEstate => "real-estate",
            Category::Health => "health",
            Category::Pets => "pets",
            Category::Business => "business",
            Category::Toys => "toys",
            Category::MusicalInstruments => "musical-instruments",
            Category::Office => "office",
            Category::Collectibles => "collectibles",
            Category::Baby => "baby",
            Category::Garden => "garden",
            Category::Events => "events",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics & Gadgets",
            Category::Furniture => "Furniture & Home Decor",
            Category::Clothing => "Clothing & Fashion",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
            Category::Vehicles => "Vehicles & Auto Parts",
            Category::Books => "Books & Education",
            Category::Hobbies => "Hobbies & Leisure",
            Category::Sports => "Sports & Outdoor",
            Category::Kitchen => "Kitchen & Home Essentials",
            Category::Tools => "Tools & DIY",
            Category::RealEstate => "Real Estate & Property",
            Category::Health => "Health & Beauty",
            Category::Pets => "Pets & Animals",
            Category::Business => "Business & Industrial",
            Category::Toys => "Toys & Games",
            Category::MusicalInstruments => "Musical Instruments",
            Category::Office => "Office & Stationery",
            Category::Collectibles => "Collectibles & Antiques",
            Category::Baby => "Baby & Kids",
            Category::Garden => "Garden & Outdoor",
            Category::Events => "Event & Party Supplies",
        }
    }

    /// First word of the label, e.g. "Tools" for "Tools & DIY"
    fn short_name(&self) -> &'static str {
        let label = self.label();
        label.split(" & ").next().unwrap_or(label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labeled("category", s, &Category::ALL, |c| {
            [c.key(), c.label(), c.short_name()]
        })
    }
}

/// Physical condition of the item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    UsedLikeNew,
    UsedGood,
    UsedFair,
    ForParts,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::UsedLikeNew,
        Condition::UsedGood,
        Condition::UsedFair,
        Condition::ForParts,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::UsedLikeNew => "used-like-new",
            Condition::UsedGood => "used-good",
            Condition::UsedFair => "used-fair",
            Condition::ForParts => "for-parts",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::UsedLikeNew => "Used - Like New",
            Condition::UsedGood => "Used - Good",
            Condition::UsedFair => "Used - Fair",
            Condition::ForParts => "For Parts",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Condition {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labeled("condition", s, &Condition::ALL, |c| {
            [c.key(), c.label(), c.label()]
        })
    }
}

/// Why the item is listed. Shown on the card, never filtered on.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Sell,
    Trade,
    Donate,
    Repair,
}

impl Purpose {
    pub const ALL: [Purpose; 4] = [
        Purpose::Sell,
        Purpose::Trade,
        Purpose::Donate,
        Purpose::Repair,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Purpose::Sell => "sell",
            Purpose::Trade => "trade",
            Purpose::Donate => "donate",
            Purpose::Repair => "repair",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Purpose::Sell => "💵 For sale",
            Purpose::Trade => "🤝 Looking to trade/barter",
            Purpose::Donate => "🔄 Donate or give away",
            Purpose::Repair => "🔧 Looking for someone to fix/repurpose",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Purpose {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_labeled("purpose", s, &Purpose::ALL, |p| {
            [p.key(), p.label(), p.key()]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_key_label_and_short_name() {
        assert_eq!("tools".parse::<Category>().unwrap(), Category::Tools);
        assert_eq!("Tools & DIY".parse::<Category>().unwrap(), Category::Tools);
        assert_eq!("Tools".parse::<Category>().unwrap(), Category::Tools);
        assert_eq!("real-estate".parse::<Category>().unwrap(), Category::RealEstate);
        assert_eq!("Furniture".parse::<Category>().unwrap(), Category::Furniture);
    }

    #[test]
    fn test_category_keys_match_serde() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.key()));
        }
    }

    #[test]
    fn test_condition_variants() {
        assert_eq!("Used - Good".parse::<Condition>().unwrap(), Condition::UsedGood);
        assert_eq!("Used-LikeNew".parse::<Condition>().unwrap(), Condition::UsedLikeNew);
        assert_eq!("for parts".parse::<Condition>().unwrap(), Condition::ForParts);
    }

    #[test]
    fn test_unknown_and_empty_rejected() {
        let err = "Spaceships".parse::<Category>().unwrap_err();
        assert_eq!(err.kind, "category");
        assert!("".parse::<Condition>().is_err());
        assert!("barter".parse::<Purpose>().is_err());
    }
}
