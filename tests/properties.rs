//! Property tests for trick resolution and hand presentation

mod support;

use bridge_rules::{suit_order, winning_position, Card, Deal, GameState, Hand, Seat, Strain, Suit};
use proptest::prelude::*;
use support::{gens, proptest_config};

/// Independent oracle: the highest trump if any, else the highest card of the
/// led suit
fn oracle(trick: [Card; 4], strain: Strain) -> usize {
    let lead = trick[0].suit();
    let highest = |suit: Suit| {
        (0..4)
            .filter(|&i| trick[i].suit() == suit)
            .max_by_key(|&i| trick[i].rank())
    };

    Suit::try_from(strain)
        .ok()
        .and_then(highest)
        .or_else(|| highest(lead))
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_winning_position_matches_oracle(trick in gens::trick(), strain in gens::strain()) {
        prop_assert_eq!(winning_position(trick, strain), oracle(trick, strain));
    }

    #[test]
    fn prop_winner_follows_or_trumps(trick in gens::trick(), strain in gens::strain()) {
        let winner = trick[winning_position(trick, strain)];
        let trump = Suit::try_from(strain).ok();
        let trumped = trick.iter().any(|card| Some(card.suit()) == trump);

        if trumped {
            prop_assert_eq!(Some(winner.suit()), trump);
        } else {
            prop_assert_eq!(winner.suit(), trick[0].suit());
        }
    }

    #[test]
    fn prop_rotating_trick_keeps_winning_card(trick in gens::trick(), strain in gens::strain()) {
        // Any card of the led suit may lead without changing the winner
        let winner = trick[winning_position(trick, strain)];
        let lead = trick[0].suit();

        for start in (1..4).filter(|&i| trick[i].suit() == lead) {
            let mut rotated = trick;
            rotated.swap(0, start);
            prop_assert_eq!(rotated[winning_position(rotated, strain)], winner);
        }
    }

    #[test]
    fn prop_suit_order_is_permutation(deal in gens::deal(), strain in gens::strain()) {
        for trump in [Some(strain), None] {
            let mut order = suit_order(deal[Seat::North], trump);
            order.sort();
            prop_assert_eq!(order, Suit::ASC);
        }
    }

    #[test]
    fn prop_ordered_hand_is_remaining_hand(
        deal in gens::deal(),
        dealer in gens::seat(),
        strain in gens::strain(),
        played in 0..13usize,
    ) {
        // Pretend everyone has played their lowest cards in order
        let mut board = GameState::new(deal, dealer, Default::default());
        board.cards = Seat::ALL
            .into_iter()
            .flat_map(|seat| deal[seat].iter().take(played))
            .collect();

        for seat in Seat::ALL {
            let ordered = board.ordered_hand(seat, Some(strain));
            prop_assert_eq!(ordered.len(), 13 - played);
            prop_assert_eq!(ordered.iter().copied().collect::<Hand>(), board.remaining(seat));

            // Suits stay together with ranks descending
            let order = suit_order(deal[seat], Some(strain));
            let position = |card: &Card| order.iter().position(|&suit| suit == card.suit());
            for pair in ordered.windows(2) {
                let key = |card: &Card| (position(card), core::cmp::Reverse(card.rank()));
                prop_assert!(key(&pair[0]) < key(&pair[1]));
            }
        }
    }

    #[test]
    fn prop_deal_io(deal in gens::deal(), seat in gens::seat()) {
        prop_assert_eq!(deal.display(seat).to_string().parse::<Deal>(), Ok(deal));
    }
}
