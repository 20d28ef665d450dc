
use core::fmt;
use core::str::FromStr;
use thiserror::Error;

/// Denomination, a suit or notrump
///
/// We choose this representation over `Option<Suit>` because we are not sure if
/// the latter can be optimized to a single byte.
///
/// The declaration order is the ranking order of the auction, so deriving
/// [`PartialOrd`] and [`Ord`] gives ♣ < ♦ < ♥ < ♠ < NT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Strain {
    /// ♣
    Clubs,
    /// ♦
    Diamonds,
    /// ♥
    Hearts,
    /// ♠
    Spades,
    /// NT, the strain not proposing a trump suit
    Notrump,
}

impl Strain {
    /// Helper constant for iteration over all strains
    pub const ALL: [Self; 5] = [
        Self::Clubs,
        Self::Diamonds,
        Self::Hearts,
        Self::Spades,
        Self::Notrump,
    ];
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Clubs => "C",
            Self::Diamonds => "D",
            Self::Hearts => "H",
            Self::Spades => "S",
            Self::Notrump => "NT",
        })
    }
}

/// A call that proposes a contract
///
/// The order of the fields ensures natural ordering by deriving [`PartialOrd`]
/// and [`Ord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bid {
    /// The number of tricks (adding the book of 6 tricks) to take to fulfill
    /// the contract
    pub level: u8,

    /// The strain of the contract
    pub strain: Strain,
}

impl Bid {
    /// Create a bid from level and strain
    #[must_use]
    pub const fn new(level: u8, strain: Strain) -> Self {
        Self { level, strain }
    }

    /// All 35 bids in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=7).flat_map(|level| Strain::ALL.into_iter().map(move |strain| Self::new(level, strain)))
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.level, self.strain)
    }
}

/// Any legal announcement in the bidding stage
///
/// The derived order puts the non-bids first and then the bids in ascending
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Call {
    /// A call indicating no wish to change the contract
    Pass,
    /// A call increasing penalties and bonuses for the contract
    Double,
    /// A call doubling the score to the previous double
    Redouble,
    /// A call proposing a contract
    Bid(Bid),
}

impl From<Bid> for Call {
    fn from(bid: Bid) -> Self {
        Self::Bid(bid)
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("PASS"),
            Self::Double => f.write_str("X"),
            Self::Redouble => f.write_str("XX"),
            Self::Bid(bid) => write!(f, "{bid}"),
        }
    }
}

/// Error raised when parsing a [`Call`] or a [`Bid`]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ParseCallError {
    /// The level is not a digit from 1 to 7
    #[error("Invalid level: must be from 1 to 7")]
    InvalidLevel,

    /// The strain is not one of C, D, H, S, NT
    #[error("Invalid strain: must be one of C, D, H, S, NT")]
    InvalidStrain,

    /// Neither a bid nor one of PASS, X, XX
    #[error("Invalid call: must be a bid, PASS, X, or XX")]
    InvalidCall,
}

impl FromStr for Strain {
    type Err = ParseCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "C" => Ok(Self::Clubs),
            "D" => Ok(Self::Diamonds),
            "H" => Ok(Self::Hearts),
            "S" => Ok(Self::Spades),
            "N" | "NT" => Ok(Self::Notrump),
            _ => Err(ParseCallError::InvalidStrain),
        }
    }
}

impl FromStr for Bid {
    type Err = ParseCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let level = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .filter(|level| (1..=7).contains(level))
            .ok_or(ParseCallError::InvalidLevel)?;

        #[allow(clippy::cast_possible_truncation)]
        Ok(Self::new(level as u8, chars.as_str().parse()?))
    }
}

impl FromStr for Call {
    type Err = ParseCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "P" | "PASS" => Ok(Self::Pass),
            "X" => Ok(Self::Double),
            "XX" => Ok(Self::Redouble),
            other if other.starts_with(|c: char| c.is_ascii_digit()) => {
                other.parse().map(Self::Bid)
            }
            _ => Err(ParseCallError::InvalidCall),
        }
    }
}

/// Penalty inflicted on a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Penalty {
    /// No penalty
    None,
    /// Penalty by [`Call::Double`]
    Doubled,
    /// Penalty by [`Call::Redouble`]
    Redoubled,
}

/// The statement of the pair winning the bidding that they will take at least
/// the number of tricks (in addition to the book of 6 tricks), and the strain
/// denotes the trump suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Contract {
    /// The basic part of a contract
    pub bid: Bid,
    /// The penalty inflicted on the contract
    pub penalty: Penalty,
}

impl From<Bid> for Contract {
    fn from(bid: Bid) -> Self {
        Self {
            bid,
            penalty: Penalty::None,
        }
    }
}

impl Contract {
    /// Create a contract from level, strain, and penalty
    #[must_use]
    pub const fn new(level: u8, strain: Strain, penalty: Penalty) -> Self {
        Self {
            bid: Bid::new(level, strain),
            penalty,
        }
    }

    /// The trump strain of this contract
    #[must_use]
    pub const fn strain(self) -> Strain {
        self.bid.strain
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.penalty {
            Penalty::None => write!(f, "{}", self.bid),
            Penalty::Doubled => write!(f, "{}X", self.bid),
            Penalty::Redoubled => write!(f, "{}XX", self.bid),
        }
    }
}
