
use crate::Strain;
use core::fmt;
use core::num::{NonZeroU8, Wrapping};
use core::ops::{Add, BitAnd, BitOr, BitXor, Index, IndexMut, Not, Sub};
use core::str::FromStr;
use once_cell::sync::Lazy;
use rand::prelude::SliceRandom as _;
use regex::Regex;
use thiserror::Error;

/// A suit of playing cards
///
/// Suits are convertible to [`Strain`]s since suits form a subset of strains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// ♣, convertible to [`Strain::Clubs`]
    Clubs,
    /// ♦, convertible to [`Strain::Diamonds`]
    Diamonds,
    /// ♥, convertible to [`Strain::Hearts`]
    Hearts,
    /// ♠, convertible to [`Strain::Spades`]
    Spades,
}

impl Suit {
    /// Suits in the ascending order, the order in this crate
    pub const ASC: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Suits in the descending order, the order of PBN hands
    pub const DESC: [Self; 4] = [Self::Spades, Self::Hearts, Self::Diamonds, Self::Clubs];

    /// The letter of the suit in text forms
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Self::Clubs),
            'D' => Some(Self::Diamonds),
            'H' => Some(Self::Hearts),
            'S' => Some(Self::Spades),
            _ => None,
        }
    }
}

impl From<Suit> for Strain {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Self::Clubs,
            Suit::Diamonds => Self::Diamonds,
            Suit::Hearts => Self::Hearts,
            Suit::Spades => Self::Spades,
        }
    }
}

/// Error raised when converting [`Strain::Notrump`] to a suit
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Notrump is not a suit")]
pub struct SuitFromNotrumpError;

impl TryFrom<Strain> for Suit {
    type Error = SuitFromNotrumpError;

    fn try_from(strain: Strain) -> Result<Self, Self::Error> {
        match strain {
            Strain::Clubs => Ok(Self::Clubs),
            Strain::Diamonds => Ok(Self::Diamonds),
            Strain::Hearts => Ok(Self::Hearts),
            Strain::Spades => Ok(Self::Spades),
            Strain::Notrump => Err(SuitFromNotrumpError),
        }
    }
}

/// Position at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Seat {
    /// Dealer of Board 1, partner of [`Seat::South`]
    North,
    /// Dealer of Board 2, partner of [`Seat::West`]
    East,
    /// Dealer of Board 3, partner of [`Seat::North`]
    South,
    /// Dealer of Board 4, partner of [`Seat::East`]
    West,
}

impl Seat {
    /// Seats in the clockwise order, indexed by `seat as usize`
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The partner sitting across the table
    #[must_use]
    pub fn partner(self) -> Self {
        self + Wrapping(2)
    }

    /// The left-hand opponent, next in turn
    #[must_use]
    pub fn lho(self) -> Self {
        self + Wrapping(1)
    }

    /// The seat `steps` turns after this one
    pub(crate) fn after(self, steps: usize) -> Self {
        #[allow(clippy::cast_possible_truncation)]
        let steps = (steps & 3) as u8;
        self + Wrapping(steps)
    }
}

impl Add<Wrapping<u8>> for Seat {
    type Output = Self;

    fn add(self, rhs: Wrapping<u8>) -> Self {
        Self::ALL[usize::from((Wrapping(self as u8) + rhs).0 & 3)]
    }
}

impl Sub<Wrapping<u8>> for Seat {
    type Output = Self;

    fn sub(self, rhs: Wrapping<u8>) -> Self {
        Self::ALL[usize::from((Wrapping(self as u8) - rhs).0 & 3)]
    }
}

impl From<Seat> for char {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::North => 'N',
            Seat::East => 'E',
            Seat::South => 'S',
            Seat::West => 'W',
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(char::from(*self))
    }
}

/// Error raised when parsing a [`Seat`]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid seat: must be one of N, E, S, W")]
pub struct ParseSeatError;

impl Seat {
    const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'E' => Some(Self::East),
            'S' => Some(Self::South),
            'W' => Some(Self::West),
            _ => None,
        }
    }
}

impl FromStr for Seat {
    type Err = ParseSeatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_letter(c).ok_or(ParseSeatError),
            _ => Err(ParseSeatError),
        }
    }
}

const RANK_LETTERS: &[u8; 13] = b"23456789TJQKA";

fn rank_from_letter(c: char) -> Option<u8> {
    let c = c.to_ascii_uppercase();
    #[allow(clippy::cast_possible_truncation)]
    RANK_LETTERS
        .iter()
        .position(|&letter| char::from(letter) == c)
        .map(|index| index as u8 + 2)
}

fn rank_letter(rank: u8) -> char {
    char::from(RANK_LETTERS[usize::from(rank - 2)])
}

/// A playing card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card(NonZeroU8);

impl Card {
    /// Create a card from suit and rank
    ///
    /// The rank is a number from 2 to 14.  J, Q, K, A are encoded as 11, 12,
    /// 13, 14 respectively.
    ///
    /// # Panics
    /// Panics if the rank is not in the range 2..=14.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        assert!(rank >= 2 && rank <= 14);
        match NonZeroU8::new(rank << 2 | suit as u8) {
            Some(bits) => Self(bits),
            None => unreachable!(),
        }
    }

    /// The suit of the card
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ASC[(self.0.get() & 3) as usize]
    }

    /// The rank of the card
    ///
    /// The rank is a number from 2 to 14.  J, Q, K, A are denoted as 11, 12,
    /// 13, 14 respectively.
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0.get() >> 2
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        f.write_char(self.suit().letter())?;
        f.write_char(rank_letter(self.rank()))
    }
}

/// Error raised when parsing a [`Card`]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseCardError {
    /// The first letter is not one of C, D, H, S
    #[error("Invalid suit: must be one of C, D, H, S")]
    InvalidSuit,

    /// The rank is not one of 2-9, T (or 10), J, Q, K, A
    #[error("Invalid rank: must be one of 2-9, T, J, Q, K, A")]
    InvalidRank,
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let suit = chars
            .next()
            .and_then(Suit::from_letter)
            .ok_or(ParseCardError::InvalidSuit)?;

        let rank = match chars.as_str() {
            "10" => 10,
            rest => {
                let mut rest = rest.chars();
                match (rest.next(), rest.next()) {
                    (Some(c), None) => rank_from_letter(c).ok_or(ParseCardError::InvalidRank)?,
                    _ => return Err(ParseCardError::InvalidRank),
                }
            }
        };

        Ok(Self::new(suit, rank))
    }
}

/// A bitset whose size is known at compile time
pub trait SmallSet<T>: Copy + Eq + BitAnd + BitOr + BitXor + Not + Sub {
    /// The empty set
    const EMPTY: Self;

    /// The set containing all possible values
    const ALL: Self;

    /// The number of elements in the set
    #[must_use]
    fn len(self) -> usize;

    /// Whether the set is empty
    #[must_use]
    fn is_empty(self) -> bool {
        self == Self::EMPTY
    }

    /// Whether the set contains a value
    fn contains(self, value: T) -> bool;

    /// Insert a value into the set
    fn insert(&mut self, value: T) -> bool;

    /// Remove a value from the set
    fn remove(&mut self, value: T) -> bool;

    /// Toggle a value in the set
    fn toggle(&mut self, value: T) -> bool;
}

/// A set of cards of the same suit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Holding(u16);

impl SmallSet<u8> for Holding {
    const EMPTY: Self = Self(0);
    const ALL: Self = Self(0x7FFC);

    fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    fn contains(self, rank: u8) -> bool {
        self.0 & 1 << rank != 0
    }

    fn insert(&mut self, rank: u8) -> bool {
        let insertion = 1 << rank & Self::ALL.0;
        let inserted = insertion & !self.0 != 0;
        self.0 |= insertion;
        inserted
    }

    fn remove(&mut self, rank: u8) -> bool {
        let removed = self.contains(rank);
        self.0 &= !(1 << rank);
        removed
    }

    fn toggle(&mut self, rank: u8) -> bool {
        self.0 ^= 1 << rank & Self::ALL.0;
        self.contains(rank)
    }
}

impl Holding {
    /// Iterate over the ranks in the holding, from the lowest to the highest
    ///
    /// Call [`Iterator::rev`] for the other way round.
    #[must_use]
    pub const fn iter(self) -> HoldingIter {
        HoldingIter { rest: self.0 }
    }
}

/// Iterator over the ranks in a [`Holding`]
#[derive(Debug, Clone)]
pub struct HoldingIter {
    rest: u16,
}

impl Iterator for HoldingIter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.rest == 0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let rank = self.rest.trailing_zeros() as u8;
        self.rest &= self.rest - 1;
        Some(rank)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.rest.count_ones() as usize;
        (len, Some(len))
    }
}

impl DoubleEndedIterator for HoldingIter {
    fn next_back(&mut self) -> Option<u8> {
        if self.rest == 0 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation)]
        let rank = 15 - self.rest.leading_zeros() as u8;
        self.rest &= !(1 << rank);
        Some(rank)
    }
}

impl ExactSizeIterator for HoldingIter {}

impl IntoIterator for Holding {
    type Item = u8;
    type IntoIter = HoldingIter;

    fn into_iter(self) -> HoldingIter {
        self.iter()
    }
}

impl BitAnd for Holding {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl BitOr for Holding {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitXor for Holding {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Not for Holding {
    type Output = Self;

    fn not(self) -> Self {
        Self::ALL ^ self
    }
}

impl Sub for Holding {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self & !rhs
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use fmt::Write;
        self.iter()
            .rev()
            .try_for_each(|rank| f.write_char(rank_letter(rank)))
    }
}

/// Error raised when parsing a [`Holding`], a [`Hand`], or a [`Deal`]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseHandError {
    /// Ranks are not all valid or in descending order
    #[error("Ranks are not all valid or in descending order")]
    InvalidHolding,

    /// The same rank appears more than once
    #[error("The same rank appears more than once")]
    RepeatedRank,

    /// A suit is missing or there are more than 4 suits
    #[error("The hand does not contain 4 suits")]
    NotFourSuits,

    /// The deal is not in the `<seat>:<hand> <hand> <hand> <hand>` form
    #[error("Invalid deal: must be <seat>:<hand> <hand> <hand> <hand>")]
    InvalidDeal,

    /// The same card is dealt to more than one hand
    #[error("The same card is dealt to more than one hand")]
    OverlappingHands,
}

impl FromStr for Holding {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut holding = Self::EMPTY;
        let mut lowest = 15;
        let mut spots = 0;
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            let rank = match c {
                'x' | 'X' => {
                    spots += 1;
                    continue;
                }
                '1' if chars.next_if_eq(&'0').is_some() => 10,
                c => rank_from_letter(c).ok_or(ParseHandError::InvalidHolding)?,
            };

            // Spot cards go last, and explicit ranks strictly descend
            if spots > 0 || rank >= lowest {
                return Err(ParseHandError::InvalidHolding);
            }
            lowest = rank;
            holding.insert(rank);
        }

        // Spot cards take the lowest ranks
        for rank in (2..).take(spots) {
            if rank >= lowest {
                return Err(ParseHandError::RepeatedRank);
            }
            holding.insert(rank);
        }

        Ok(holding)
    }
}

/// A hand of playing cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Hand(pub [Holding; 4]);

impl Index<Suit> for Hand {
    type Output = Holding;

    fn index(&self, suit: Suit) -> &Holding {
        &self.0[suit as usize]
    }
}

impl IndexMut<Suit> for Hand {
    fn index_mut(&mut self, suit: Suit) -> &mut Holding {
        &mut self.0[suit as usize]
    }
}

impl Hand {
    /// Iterate over the cards in the hand
    ///
    /// Cards come out suit by suit in [`Suit::ASC`] order, and from the lowest
    /// to the highest rank within a suit.
    pub fn iter(self) -> impl DoubleEndedIterator<Item = Card> {
        Suit::ASC
            .into_iter()
            .flat_map(move |suit| self[suit].iter().map(move |rank| Card::new(suit, rank)))
    }

    fn zip_with(self, rhs: Self, op: impl Fn(Holding, Holding) -> Holding) -> Self {
        Self(core::array::from_fn(|i| op(self.0[i], rhs.0[i])))
    }
}

impl SmallSet<Card> for Hand {
    const EMPTY: Self = Self([Holding::EMPTY; 4]);
    const ALL: Self = Self([Holding::ALL; 4]);

    fn len(self) -> usize {
        self.0.iter().map(|holding| holding.len()).sum()
    }

    fn contains(self, card: Card) -> bool {
        self[card.suit()].contains(card.rank())
    }

    fn insert(&mut self, card: Card) -> bool {
        self[card.suit()].insert(card.rank())
    }

    fn remove(&mut self, card: Card) -> bool {
        self[card.suit()].remove(card.rank())
    }

    fn toggle(&mut self, card: Card) -> bool {
        self[card.suit()].toggle(card.rank())
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut hand = Self::EMPTY;
        iter.into_iter().for_each(|card| {
            hand.insert(card);
        });
        hand
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self[Suit::Spades])?;
        Suit::DESC[1..]
            .iter()
            .try_for_each(|&suit| write!(f, ".{}", self[suit]))
    }
}

impl FromStr for Hand {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(Self::EMPTY);
        }

        let mut hand = Self::EMPTY;
        let mut holdings = s.split('.');

        for suit in Suit::DESC {
            let holding = holdings.next().ok_or(ParseHandError::NotFourSuits)?;
            hand[suit] = holding.parse()?;
        }

        match holdings.next() {
            Some(_) => Err(ParseHandError::NotFourSuits),
            None => Ok(hand),
        }
    }
}

impl BitAnd for Hand {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.zip_with(rhs, BitAnd::bitand)
    }
}

impl BitOr for Hand {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.zip_with(rhs, BitOr::bitor)
    }
}

impl BitXor for Hand {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.zip_with(rhs, BitXor::bitxor)
    }
}

impl Not for Hand {
    type Output = Self;

    fn not(self) -> Self {
        Self::ALL ^ self
    }
}

impl Sub for Hand {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self & !rhs
    }
}

/// A deal of four hands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Deal(pub [Hand; 4]);

impl Index<Seat> for Deal {
    type Output = Hand;

    fn index(&self, seat: Seat) -> &Hand {
        &self.0[seat as usize]
    }
}

impl IndexMut<Seat> for Deal {
    fn index_mut(&mut self, seat: Seat) -> &mut Hand {
        &mut self.0[seat as usize]
    }
}

/// A deck of playing cards
#[derive(Debug, Clone, Default)]
struct Deck {
    /// The cards in the deck
    cards: Vec<Card>,
}

impl Deck {
    /// Create a standard 52-card deck
    #[must_use]
    fn standard_52() -> Self {
        Self {
            cards: Hand::ALL.iter().collect(),
        }
    }

    /// Deal the deck into four hands
    #[must_use]
    fn deal(self) -> Deal {
        let mut deal = Deal::default();

        for (index, card) in self.cards.into_iter().enumerate() {
            deal[Seat::ALL[index & 3]].insert(card);
        }

        deal
    }

    /// Shuffle the deck
    fn shuffle(&mut self, rng: &mut (impl rand::Rng + ?Sized)) {
        self.cards.shuffle(rng);
    }
}

struct DealDisplay {
    deal: Deal,
    seat: Seat,
}

impl fmt::Display for DealDisplay {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}:{} {} {} {}",
            self.seat,
            self.deal[self.seat],
            self.deal[self.seat + Wrapping(1)],
            self.deal[self.seat + Wrapping(2)],
            self.deal[self.seat + Wrapping(3)],
        )
    }
}

impl Deal {
    /// Create a deal from a shuffled standard 52-card deck
    pub fn new(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        let mut deck = Deck::standard_52();
        deck.shuffle(rng);
        deck.deal()
    }

    /// Display the deal from a seat's perspective
    #[must_use]
    pub fn display(self, seat: Seat) -> impl fmt::Display {
        DealDisplay { deal: self, seat }
    }

    /// The seat holding a card, if any
    #[must_use]
    pub fn holder(&self, card: Card) -> Option<Seat> {
        Seat::ALL.into_iter().find(|&seat| self[seat].contains(card))
    }
}

impl fmt::Display for Deal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display(Seat::North))
    }
}

static DEAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([NESWnesw])\s*:\s*(\S+)\s+(\S+)\s+(\S+)\s+(\S+)\s*$")
        .expect("the deal pattern is a valid regex")
});

impl FromStr for Deal {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let captures = DEAL_PATTERN
            .captures(s)
            .ok_or(ParseHandError::InvalidDeal)?;

        let first = captures[1]
            .chars()
            .next()
            .and_then(Seat::from_letter)
            .ok_or(ParseHandError::InvalidDeal)?;

        let mut deal = Self::default();
        let mut dealt = Hand::EMPTY;

        for offset in 0..4 {
            let hand: Hand = captures[usize::from(offset) + 2].parse()?;

            if !(dealt & hand).is_empty() {
                return Err(ParseHandError::OverlappingHands);
            }
            dealt = dealt | hand;
            deal[first + Wrapping(offset)] = hand;
        }

        Ok(deal)
    }
}
