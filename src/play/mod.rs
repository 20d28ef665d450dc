
use crate::{Card, GameState, Phase, Seat, Strain, Suit};
use tracing::trace;

/// Position of the winning card in a complete trick
///
/// `trick[0]` is the lead.  The highest trump wins if any trump is played,
/// otherwise the highest card of the led suit.  A discard never wins.
#[must_use]
pub fn winning_position(trick: [Card; 4], strain: Strain) -> usize {
    let trump = Suit::try_from(strain).ok();
    let lead = trick[0].suit();
    let key = |card: Card| {
        (
            Some(card.suit()) == trump,
            card.suit() == lead,
            card.rank(),
        )
    };

    (1..4).fold(0, |best, position| {
        if key(trick[position]) > key(trick[best]) {
            position
        } else {
            best
        }
    })
}

impl GameState {
    /// The four cards of a trick, if all of them are played
    #[must_use]
    pub fn trick(&self, index: usize) -> Option<[Card; 4]> {
        let start = index.checked_mul(4)?;
        self.cards.get(start..start.checked_add(4)?)?.try_into().ok()
    }

    /// The number of complete tricks
    #[must_use]
    pub fn completed_tricks(&self) -> usize {
        self.cards.len() / 4
    }

    /// The player on lead to the first trick, left of the declarer
    #[must_use]
    pub fn opening_leader(&self) -> Option<Seat> {
        self.declarer().map(Seat::lho)
    }

    /// The leader of a trick, the winner of the previous trick
    ///
    /// Fails if a previous trick is incomplete.
    fn leader(&self, index: usize) -> Option<Seat> {
        let strain = self.contract()?.strain();

        (0..index).try_fold(self.opening_leader()?, |leader, previous| {
            Some(leader.after(winning_position(self.trick(previous)?, strain)))
        })
    }

    /// The winner of a complete trick
    ///
    /// Returns [`None`] if the trick is not complete yet, or there is no
    /// contract.
    #[must_use]
    pub fn trick_winner(&self, index: usize) -> Option<Seat> {
        let trick = self.trick(index)?;
        let strain = self.contract()?.strain();
        let winner = self.leader(index)?.after(winning_position(trick, strain));
        trace!(index, %winner, "Resolved trick");
        Some(winner)
    }

    /// Winners of all complete tricks in order
    #[must_use]
    pub fn trick_winners(&self) -> Vec<Seat> {
        let (Some(contract), Some(mut leader)) = (self.contract(), self.opening_leader()) else {
            return Vec::new();
        };

        self.cards
            .chunks_exact(4)
            .filter_map(|trick| <[Card; 4]>::try_from(trick).ok())
            .map(|trick| {
                leader = leader.after(winning_position(trick, contract.strain()));
                leader
            })
            .collect()
    }

    /// The seat whose turn it is, even if it is dummy
    ///
    /// Returns [`None`] once the board is completed.
    #[must_use]
    pub fn current_seat(&self) -> Option<Seat> {
        match self.phase() {
            Phase::Auction => Some(self.dealer.after(self.calls.len())),
            Phase::Play => {
                let leader = self.leader(self.cards.len() / 4)?;
                Some(leader.after(self.cards.len() % 4))
            }
            Phase::Completed => None,
        }
    }

    /// The player to act, who is the declarer whenever the seat on turn is
    /// the dummy of the standing contract
    #[must_use]
    pub fn current_player(&self) -> Option<Seat> {
        let seat = self.current_seat()?;

        if self.dummy() == Some(seat) {
            Some(seat.partner())
        } else {
            Some(seat)
        }
    }
}
