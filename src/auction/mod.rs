
use crate::{Bid, Call, Contract, GameState, Penalty, Seat};

/// Stage of a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Phase {
    /// Calls are being made
    Auction,
    /// Cards are being played
    Play,
    /// All 52 cards are played, or the board is passed out
    Completed,
}

impl GameState {
    /// The stage of the board
    ///
    /// The auction closes after three consecutive passes following at least
    /// one other call, or after four opening passes.  The latter completes the
    /// board without play.
    #[must_use]
    pub fn phase(&self) -> Phase {
        let passed_out = self.calls == [Call::Pass; 4];

        if self.cards.len() == 52 || passed_out {
            Phase::Completed
        } else if self.calls.len() > 3 && self.calls.ends_with(&[Call::Pass; 3]) {
            Phase::Play
        } else {
            Phase::Auction
        }
    }

    /// The last bid and its index in [`GameState::calls`]
    pub(crate) fn last_bid(&self) -> Option<(usize, Bid)> {
        self.calls
            .iter()
            .enumerate()
            .rev()
            .find_map(|(index, call)| match call {
                Call::Bid(bid) => Some((index, *bid)),
                _ => None,
            })
    }

    /// The contract so far, or the final contract once the auction closes
    ///
    /// Only the latest double or redouble after the last bid counts.
    #[must_use]
    pub fn contract(&self) -> Option<Contract> {
        let (index, bid) = self.last_bid()?;

        let penalty = self.calls[index + 1..]
            .iter()
            .rev()
            .find_map(|call| match call {
                Call::Double => Some(Penalty::Doubled),
                Call::Redouble => Some(Penalty::Redoubled),
                _ => None,
            })
            .unwrap_or(Penalty::None);

        Some(Contract { bid, penalty })
    }

    /// The declarer, the first of the contracting pair to name the strain
    #[must_use]
    pub fn declarer(&self) -> Option<Seat> {
        let (last, bid) = self.last_bid()?;
        let side = last & 1;

        let first = self
            .calls
            .iter()
            .enumerate()
            .skip(side)
            .step_by(2)
            .find_map(|(index, call)| match call {
                Call::Bid(named) if named.strain == bid.strain => Some(index),
                _ => None,
            })?;

        Some(self.dealer.after(first))
    }

    /// The dummy, partner of the declarer
    #[must_use]
    pub fn dummy(&self) -> Option<Seat> {
        self.declarer().map(Seat::partner)
    }
}
