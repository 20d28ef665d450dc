//! Serde support in the JSON layout of stored boards
//!
//! ```json
//! {
//!     "deal": { "n": ["SA", "SK", ...], "e": [...], "s": [...], "w": [...] },
//!     "vulnerability": "BOTH",
//!     "dealer": "E",
//!     "bids": ["1H", "PASS", "4H", "X", "PASS", "PASS", "PASS"],
//!     "cards": ["ST", "SA", "S2", "H2"]
//! }
//! ```

use crate::{
    Bid, Call, Card, Deal, Hand, ParseHandError, Seat, SmallSet as _, Strain, Vulnerability,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Serialize through [`Display`](core::fmt::Display) and deserialize through
/// [`FromStr`](core::str::FromStr)
macro_rules! impl_serde_via_str {
    ($($type:ty),+ $(,)?) => {$(
        impl Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                s.parse().map_err(|e| de::Error::custom(format!("{e}: {s:?}")))
            }
        }
    )+};
}

impl_serde_via_str!(Strain, Bid, Call, Seat, Card, Vulnerability);

/// Hands keyed by lowercase seat letters
#[derive(Serialize, Deserialize)]
struct DealRepr {
    n: Vec<Card>,
    e: Vec<Card>,
    s: Vec<Card>,
    w: Vec<Card>,
}

impl Serialize for Deal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let cards = |seat: Seat| self[seat].iter().rev().collect();

        DealRepr {
            n: cards(Seat::North),
            e: cards(Seat::East),
            s: cards(Seat::South),
            w: cards(Seat::West),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Deal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let DealRepr { n, e, s, w } = DealRepr::deserialize(deserializer)?;
        let mut deal = Self::default();
        let mut dealt = Hand::EMPTY;

        for (seat, cards) in Seat::ALL.into_iter().zip([n, e, s, w]) {
            for card in cards {
                if !dealt.insert(card) {
                    return Err(de::Error::custom(ParseHandError::OverlappingHands));
                }
                deal[seat].insert(card);
            }
        }

        Ok(deal)
    }
}
