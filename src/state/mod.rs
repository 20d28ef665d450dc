#[cfg(test)]
mod test;

use crate::{Call, Card, Deal, Hand, Phase, Seat};
use core::fmt;
use core::str::FromStr;
use thiserror::Error;
use tracing::{debug, trace};

bitflags::bitflags! {
    /// Vulnerable pairs of a board
    ///
    /// The engine never consults vulnerability; it only carries it for
    /// consumers such as scoring.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Vulnerability: u8 {
        /// Neither pair is vulnerable
        const NONE = 0;
        /// North-South are vulnerable
        const NS = 0b01;
        /// East-West are vulnerable
        const EW = 0b10;
        /// Both pairs are vulnerable
        const BOTH = Self::NS.bits() | Self::EW.bits();
    }
}

const _: () = assert!(matches!(Vulnerability::all(), Vulnerability::BOTH));
const _: () = assert!(matches!(Vulnerability::NS.union(Vulnerability::EW), Vulnerability::BOTH));

impl Vulnerability {
    /// Whether the pair of a seat is vulnerable
    #[must_use]
    pub const fn is_vulnerable(self, seat: Seat) -> bool {
        match seat {
            Seat::North | Seat::South => self.contains(Self::NS),
            Seat::East | Seat::West => self.contains(Self::EW),
        }
    }
}

impl fmt::Display for Vulnerability {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match (self.contains(Self::NS), self.contains(Self::EW)) {
            (false, false) => "NONE",
            (true, false) => "NS",
            (false, true) => "EW",
            (true, true) => "BOTH",
        })
    }
}

/// Error raised when parsing a [`Vulnerability`]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid vulnerability: must be one of NONE, NS, EW, BOTH")]
pub struct ParseVulnerabilityError;

impl FromStr for Vulnerability {
    type Err = ParseVulnerabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" | "-" => Ok(Self::NONE),
            "NS" => Ok(Self::NS),
            "EW" => Ok(Self::EW),
            "BOTH" | "ALL" => Ok(Self::BOTH),
            _ => Err(ParseVulnerabilityError),
        }
    }
}

/// An immutable snapshot of a board
///
/// The deal, the dealer, and the vulnerability are fixed when a board is
/// created.  A game advances only by appending calls and then cards, so a
/// snapshot fully determines the phase, the contract, and the seat on turn.
///
/// The engine trusts a snapshot to be well-formed: the hands partition the
/// deck, no call follows the end of the auction, and every card is played
/// legally.  [`GameState::validate`] checks the last two at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// The four hands as dealt
    #[cfg_attr(feature = "serde", serde(default))]
    pub deal: Deal,

    /// Vulnerable pairs, carried for consumers only
    #[cfg_attr(feature = "serde", serde(default))]
    pub vulnerability: Vulnerability,

    /// The first seat to call
    pub dealer: Seat,

    /// Calls in chronological order, starting from the dealer
    #[cfg_attr(feature = "serde", serde(default, rename = "bids"))]
    pub calls: Vec<Call>,

    /// Cards in the order of play, four per trick
    #[cfg_attr(feature = "serde", serde(default))]
    pub cards: Vec<Card>,
}

/// A call or a card that the rules do not allow at the moment
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The call is not allowed
    #[error("Call {0} is not allowed at the moment")]
    Call(Call),

    /// The card is not allowed
    #[error("Card {0} is not allowed at the moment")]
    Card(Card),
}

/// Error raised when a snapshot cannot be reached by legal moves
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Move #{index} of its sequence is illegal")]
pub struct InvalidStateError {
    /// Index of the offending move in [`GameState::calls`] or
    /// [`GameState::cards`]
    pub index: usize,

    /// The offending move
    #[source]
    pub source: IllegalMove,
}

impl GameState {
    /// Create a board before the first call
    #[must_use]
    pub const fn new(deal: Deal, dealer: Seat, vulnerability: Vulnerability) -> Self {
        Self {
            deal,
            vulnerability,
            dealer,
            calls: Vec::new(),
            cards: Vec::new(),
        }
    }

    /// The snapshot after appending a call, legal or not
    #[must_use]
    pub fn with_call(&self, call: Call) -> Self {
        let mut next = self.clone();
        next.calls.push(call);
        next
    }

    /// The snapshot after appending a card, legal or not
    #[must_use]
    pub fn with_card(&self, card: Card) -> Self {
        let mut next = self.clone();
        next.cards.push(card);
        next
    }

    /// The snapshot after making a call
    ///
    /// # Errors
    /// [`IllegalMove::Call`] if [`GameState::is_call_legal`] rejects the call
    pub fn try_call(&self, call: Call) -> Result<Self, IllegalMove> {
        if !self.is_call_legal(call) {
            debug!(%call, seat = ?self.current_seat(), phase = ?self.phase(), "Rejected call");
            return Err(IllegalMove::Call(call));
        }

        let next = self.with_call(call);

        if next.phase() != Phase::Auction {
            trace!(contract = ?next.contract(), declarer = ?next.declarer(), "Auction closed");
        }
        Ok(next)
    }

    /// The snapshot after playing a card
    ///
    /// # Errors
    /// [`IllegalMove::Card`] if [`GameState::is_card_legal`] rejects the card
    pub fn try_card(&self, card: Card) -> Result<Self, IllegalMove> {
        if !self.is_card_legal(card) {
            debug!(%card, seat = ?self.current_seat(), phase = ?self.phase(), "Rejected card");
            return Err(IllegalMove::Card(card));
        }
        Ok(self.with_card(card))
    }

    /// All cards played so far
    #[must_use]
    pub fn played(&self) -> Hand {
        self.cards.iter().copied().collect()
    }

    /// Cards a seat has yet to play
    #[must_use]
    pub fn remaining(&self, seat: Seat) -> Hand {
        self.deal[seat] - self.played()
    }

    /// Check that the snapshot is reachable from its empty auction by legal
    /// moves only
    ///
    /// The shape of the deal is not checked.
    ///
    /// # Errors
    /// [`InvalidStateError`] pointing at the first illegal call or card
    pub fn validate(&self) -> Result<(), InvalidStateError> {
        let mut replay = Self::new(self.deal, self.dealer, self.vulnerability);

        for (index, &call) in self.calls.iter().enumerate() {
            if !replay.is_call_legal(call) {
                debug!(index, %call, "Snapshot contains an illegal call");
                return Err(InvalidStateError {
                    index,
                    source: IllegalMove::Call(call),
                });
            }
            replay.calls.push(call);
        }

        for (index, &card) in self.cards.iter().enumerate() {
            if !replay.is_card_legal(card) {
                debug!(index, %card, "Snapshot contains an illegal card");
                return Err(InvalidStateError {
                    index,
                    source: IllegalMove::Card(card),
                });
            }
            replay.cards.push(card);
        }

        Ok(())
    }
}
