//! Oracle coins and three-coin tosses.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{CastError, CastResult};

/// One face of an oracle coin.
///
/// Heads carries weight 3, tails weight 2, so three coins always sum to
/// a value in 6..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Coin {
    /// The yang face, weight 3.
    Heads,
    /// The yin face, weight 2.
    Tails,
}

impl Coin {
    /// Numeric weight of this face.
    pub fn value(self) -> u8 {
        match self {
            Self::Heads => 3,
            Self::Tails => 2,
        }
    }

    /// Flip a coin with even odds, independent of earlier flips.
    pub fn flip(rng: &mut StdRng) -> Self {
        if rng.random_bool(0.5) {
            Self::Heads
        } else {
            Self::Tails
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heads => write!(f, "heads"),
            Self::Tails => write!(f, "tails"),
        }
    }
}

/// Exactly three coins thrown together for one casting step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toss {
    coins: [Coin; 3],
}

impl Toss {
    /// Create a toss from three known faces.
    pub fn new(coins: [Coin; 3]) -> Self {
        Self { coins }
    }

    /// Throw all three coins fresh.
    pub fn random(rng: &mut StdRng) -> Self {
        Self {
            coins: [Coin::flip(rng), Coin::flip(rng), Coin::flip(rng)],
        }
    }

    /// The three faces of this toss.
    pub fn coins(&self) -> [Coin; 3] {
        self.coins
    }

    /// Re-flip a single coin in place, keeping the other two.
    pub fn reflip(&mut self, index: usize, rng: &mut StdRng) -> CastResult<Coin> {
        let slot = self
            .coins
            .get_mut(index)
            .ok_or(CastError::CoinIndex(index))?;
        *slot = Coin::flip(rng);
        Ok(*slot)
    }

    /// Total of the three coin weights, always in 6..=9.
    pub fn sum(&self) -> u8 {
        self.coins.iter().map(|c| c.value()).sum()
    }
}

impl std::fmt::Display for Toss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.coins[0],
            self.coins[1],
            self.coins[2],
            self.sum()
        )
    }
}
