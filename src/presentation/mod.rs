
use crate::{Card, GameState, Hand, Seat, SmallSet as _, Strain, Suit};

/// Whether two suits share a colour, ♣♠ being black and ♦♥ red
const fn same_colour(a: Suit, b: Suit) -> bool {
    matches!(a as u8 ^ b as u8, 0 | 3)
}

/// Suits ordered by length with colours alternating where the shape allows
fn shape_order(hand: Hand) -> [Suit; 4] {
    // Stable, so equal lengths keep the ascending suit order
    let mut order = Suit::ASC;
    order.sort_by_key(|&suit| hand[suit].len());

    if same_colour(order[2], order[3]) {
        order[..3].rotate_right(1);
    }

    if same_colour(order[1], order[2]) {
        order[..2].rotate_right(1);
    }

    order.reverse();
    order
}

/// The order in which to display the suits of a hand
///
/// A suit contract puts the trump suit first, followed by the remaining
/// suits in alternating colours.  Which of the two suits of the other colour
/// comes second depends on their lengths.  Notrump, or no strain at all, puts
/// long suits first and breaks up runs of the same colour.
///
/// The lengths are those of `hand` as given, usually the hand as dealt, so the
/// order stays put during the play.
#[must_use]
pub fn suit_order(hand: Hand, trump: Option<Strain>) -> [Suit; 4] {
    use Suit::{Clubs as C, Diamonds as D, Hearts as H, Spades as S};

    let longer = |a: Suit, b: Suit| hand[a].len() >= hand[b].len();

    match trump {
        Some(Strain::Clubs) if longer(H, D) => [C, H, S, D],
        Some(Strain::Clubs) => [C, D, S, H],
        Some(Strain::Diamonds) if longer(S, C) => [D, S, H, C],
        Some(Strain::Diamonds) => [D, C, H, S],
        Some(Strain::Hearts) if longer(S, C) => [H, S, D, C],
        Some(Strain::Hearts) => [H, C, D, S],
        Some(Strain::Spades) if longer(H, D) => [S, H, C, D],
        Some(Strain::Spades) => [S, D, C, H],
        Some(Strain::Notrump) | None => shape_order(hand),
    }
}

impl GameState {
    /// Cards a seat has yet to play, sorted for display
    ///
    /// Suits come in [`suit_order`] of the hand as dealt, and ranks descend
    /// within each suit.
    #[must_use]
    pub fn ordered_hand(&self, seat: Seat, trump: Option<Strain>) -> Vec<Card> {
        let remaining = self.remaining(seat);

        suit_order(self.deal[seat], trump)
            .into_iter()
            .flat_map(|suit| remaining[suit].iter().rev().map(move |rank| Card::new(suit, rank)))
            .collect()
    }

    /// [`GameState::ordered_hand`] of every seat, indexed by `seat as usize`
    #[must_use]
    pub fn ordered_hands(&self, trump: Option<Strain>) -> [Vec<Card>; 4] {
        Seat::ALL.map(|seat| self.ordered_hand(seat, trump))
    }
}
