use super::*;
use crate::test::{card, deal, state};
use crate::{Bid, SmallSet as _, Strain};
use std::error::Error as _;

const AUCTION: &str = "1H PASS 4H PASS PASS PASS";
const PLAY: &str = "ST SA S2 H2 C2 CJ CA C5 DA D5 D2 DJ";

#[test]
fn test_vulnerability() {
    assert!(!Vulnerability::NONE.is_vulnerable(Seat::North));
    assert!(Vulnerability::NS.is_vulnerable(Seat::South));
    assert!(!Vulnerability::NS.is_vulnerable(Seat::East));
    assert!(Vulnerability::EW.is_vulnerable(Seat::West));
    assert!(Seat::ALL.into_iter().all(|seat| Vulnerability::BOTH.is_vulnerable(seat)));
}

#[test]
fn test_vulnerability_io() {
    for vulnerability in [Vulnerability::NONE, Vulnerability::NS, Vulnerability::EW, Vulnerability::BOTH] {
        assert_eq!(vulnerability.to_string().parse(), Ok(vulnerability));
    }

    assert_eq!("ns".parse(), Ok(Vulnerability::NS));
    assert_eq!("-".parse(), Ok(Vulnerability::NONE));
    assert_eq!("All".parse(), Ok(Vulnerability::BOTH));
    assert_eq!("NE".parse::<Vulnerability>(), Err(ParseVulnerabilityError));
}

#[test]
fn test_new_board() {
    let board = GameState::new(deal(), Seat::East, Vulnerability::EW);
    assert_eq!(board.phase(), Phase::Auction);
    assert_eq!(board.current_seat(), Some(Seat::East));
    assert!(board.calls.is_empty());
    assert!(board.played().is_empty());
}

#[test]
fn test_with_moves_do_not_mutate() {
    let board = GameState::new(deal(), Seat::North, Vulnerability::NONE);
    let next = board.with_call(Call::Double);
    assert!(board.calls.is_empty());
    assert_eq!(next.calls, [Call::Double]);
    assert_eq!(next.with_card(card("SA")).cards, [card("SA")]);
}

#[test]
fn test_try_call() {
    let board = GameState::new(deal(), Seat::North, Vulnerability::NONE);
    assert_eq!(board.try_call(Call::Double), Err(IllegalMove::Call(Call::Double)));

    let opening = Call::Bid(Bid::new(1, Strain::Hearts));
    let next = board.try_call(opening).expect("an opening bid is legal");
    assert_eq!(next.calls, [opening]);
    assert_eq!(next.current_seat(), Some(Seat::East));
}

#[test]
fn test_try_card() {
    let board = state(Seat::South, AUCTION, "");
    assert_eq!(board.try_card(card("SA")), Err(IllegalMove::Card(card("SA"))));

    let next = board.try_card(card("ST")).expect("West may lead a spade");
    assert_eq!(next.current_seat(), Some(Seat::North));

    let auction = state(Seat::South, "1H PASS", "");
    assert_eq!(auction.try_card(card("ST")), Err(IllegalMove::Card(card("ST"))));
}

#[test]
fn test_remaining() {
    let board = state(Seat::South, AUCTION, "ST SA S2 H2");
    assert_eq!(board.played().len(), 4);
    assert_eq!(board.remaining(Seat::South).len(), 12);
    assert_eq!(board.remaining(Seat::West).len(), 12);
    assert!(!board.remaining(Seat::North).contains(card("SA")));
    assert!(board.remaining(Seat::North).contains(card("SK")));
}

#[test]
fn test_validate() {
    assert_eq!(state(Seat::South, AUCTION, PLAY).validate(), Ok(()));
    assert_eq!(state(Seat::North, "PASS PASS PASS PASS", "").validate(), Ok(()));
}

#[test]
fn test_validate_illegal_call() {
    let error = state(Seat::North, "1H 1C", "").validate().unwrap_err();
    assert_eq!(error.index, 1);
    assert_eq!(error.source, IllegalMove::Call(Call::Bid(Bid::new(1, Strain::Clubs))));

    let error = state(Seat::North, "1H PASS PASS PASS PASS", "").validate().unwrap_err();
    assert_eq!(error.index, 4);
}

#[test]
fn test_validate_illegal_card() {
    // East must follow spades after ST SA
    let error = state(Seat::South, AUCTION, "ST SA H6").validate().unwrap_err();
    assert_eq!(error.index, 2);
    assert_eq!(error.source, IllegalMove::Card(card("H6")));

    let error = state(Seat::South, AUCTION, "ST ST").validate().unwrap_err();
    assert_eq!(error.index, 1);
}

#[test]
fn test_error_messages() {
    let error = InvalidStateError {
        index: 3,
        source: IllegalMove::Call(Call::Redouble),
    };
    assert_eq!(error.to_string(), "Move #3 of its sequence is illegal");
    assert_eq!(
        error.source().map(ToString::to_string).as_deref(),
        Some("Call XX is not allowed at the moment")
    );
}
