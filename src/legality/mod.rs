
use crate::{Bid, Call, Card, GameState, Hand, Penalty, Phase, SmallSet as _};

impl GameState {
    /// Whether a call is legal at the moment
    ///
    /// - A bid must outrank the last bid.
    /// - A double applies only to an undoubled bid of the opponents.
    /// - A redouble applies only to a double of our bid.
    /// - A pass is always legal during the auction.
    #[must_use]
    pub fn is_call_legal(&self, call: Call) -> bool {
        if self.phase() != Phase::Auction {
            return false;
        }

        let Some((index, _)) = self.last_bid() else {
            return matches!(call, Call::Pass | Call::Bid(Bid { level: 1..=7, .. }));
        };

        let Some(contract) = self.contract() else {
            return false;
        };

        // Whether the last bid was made by the side now on call
        let ours = index & 1 == self.calls.len() & 1;

        match call {
            Call::Pass => true,
            Call::Bid(bid) => (1..=7).contains(&bid.level) && bid > contract.bid,
            Call::Double => contract.penalty == Penalty::None && !ours,
            Call::Redouble => contract.penalty == Penalty::Doubled && ours,
        }
    }

    /// Whether a card is legal for the seat on turn
    ///
    /// The card must come from the cards the seat still holds, and it must
    /// follow the led suit if the seat holds any card of that suit.  When it is
    /// dummy's turn, the card comes from dummy's hand, though the declarer
    /// chooses it.
    #[must_use]
    pub fn is_card_legal(&self, card: Card) -> bool {
        self.legal_cards().contains(card)
    }

    /// All legal calls at the moment in ascending order
    #[must_use]
    pub fn legal_calls(&self) -> Vec<Call> {
        [Call::Pass, Call::Double, Call::Redouble]
            .into_iter()
            .chain(Bid::all().map(Call::Bid))
            .filter(|&call| self.is_call_legal(call))
            .collect()
    }

    /// All legal cards for the seat on turn
    #[must_use]
    pub fn legal_cards(&self) -> Hand {
        if self.phase() != Phase::Play {
            return Hand::EMPTY;
        }

        let Some(seat) = self.current_seat() else {
            return Hand::EMPTY;
        };

        let hand = self.remaining(seat);
        let lead = match self.cards.len() % 4 {
            0 => None,
            played => self.cards.get(self.cards.len() - played),
        };

        match lead {
            Some(lead) if !hand[lead.suit()].is_empty() => {
                let mut following = Hand::EMPTY;
                following[lead.suit()] = hand[lead.suit()];
                following
            }
            _ => hand,
        }
    }
}
