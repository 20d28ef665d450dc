//! This crate aims to be the rules engine of computer bridge in Rust.
//!
//! Everything revolves around [`GameState`], an immutable snapshot of a board:
//! the deal, the dealer, the calls so far, and the cards played so far.  Every
//! fact needed to drive a game is derived from a snapshot on demand.
//!
//! - The auction: [`GameState::phase`], [`GameState::contract`],
//!   [`GameState::declarer`], [`GameState::dummy`]
//! - The play: [`GameState::trick_winner`], [`GameState::current_seat`],
//!   [`GameState::current_player`]
//! - Legality: [`GameState::is_call_legal`], [`GameState::is_card_legal`]
//! - Presentation: [`GameState::ordered_hands`]
//!
//! A caller advances a game by appending one legal call or card at a time,
//! e.g. with [`GameState::try_call`] and [`GameState::try_card`].
#![warn(missing_docs)]

mod auction;
mod contract;
mod deal;
mod legality;
mod play;
mod presentation;
#[cfg(feature = "serde")]
mod serialization;
mod state;

pub use auction::*;
pub use contract::*;
pub use deal::*;
pub use play::*;
pub use presentation::*;
pub use state::*;
