//! Proptest generators for boards and tricks

use bridge_rules::{Card, Deal, Hand, Seat, SmallSet as _, Strain, Vulnerability};
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use rand::rngs::StdRng;
use rand::SeedableRng as _;

/// A random strain, notrump included
pub fn strain() -> impl Strategy<Value = Strain> {
    select(Strain::ALL.to_vec())
}

/// A random seat
pub fn seat() -> impl Strategy<Value = Seat> {
    select(Seat::ALL.to_vec())
}

/// A random vulnerability
pub fn vulnerability() -> impl Strategy<Value = Vulnerability> {
    select(vec![
        Vulnerability::NONE,
        Vulnerability::NS,
        Vulnerability::EW,
        Vulnerability::BOTH,
    ])
}

/// A random deal, reproducible from its seed
pub fn deal() -> impl Strategy<Value = Deal> {
    any::<u64>().prop_map(|seed| Deal::new(&mut StdRng::seed_from_u64(seed)))
}

/// Four distinct cards in random order
pub fn trick() -> impl Strategy<Value = [Card; 4]> {
    let deck: Vec<Card> = Hand::ALL.iter().collect();

    subsequence(deck, 4)
        .prop_shuffle()
        .prop_map(|cards| [cards[0], cards[1], cards[2], cards[3]])
}
