//! Cast lines and their polarity.

use serde::{Deserialize, Serialize};

use crate::coin::Toss;

/// Polarity of a line: solid yang or broken yin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Polarity {
    /// A solid line.
    Yang,
    /// A broken line.
    Yin,
}

impl Polarity {
    /// The opposite polarity.
    pub fn flipped(self) -> Self {
        match self {
            Self::Yang => Self::Yin,
            Self::Yin => Self::Yang,
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yang => write!(f, "yang"),
            Self::Yin => write!(f, "yin"),
        }
    }
}

/// One line of a figure, fixed at the moment its three coins land.
///
/// The coin sum alone determines everything: 6 is old yin (changing),
/// 7 young yang, 8 young yin, 9 old yang (changing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Total of the three coin weights (6..=9).
    pub sum: u8,
    /// Yang for sums 7 and 9, yin for 6 and 8.
    pub polarity: Polarity,
    /// True for sums 6 and 9: this line flips in the relating figure.
    pub changing: bool,
}

impl Line {
    /// Reduce a toss to its line.
    pub fn from_toss(toss: Toss) -> Self {
        let sum = toss.sum();
        let polarity = if sum == 7 || sum == 9 {
            Polarity::Yang
        } else {
            Polarity::Yin
        };
        let changing = sum == 6 || sum == 9;
        Self {
            sum,
            polarity,
            changing,
        }
    }
}

impl From<Toss> for Line {
    fn from(toss: Toss) -> Self {
        Self::from_toss(toss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coin::Coin;

    fn line_for(coins: [Coin; 3]) -> Line {
        Line::from_toss(Toss::new(coins))
    }

    #[test]
    fn sum_six_is_old_yin() {
        let line = line_for([Coin::Tails; 3]);
        assert_eq!(line.sum, 6);
        assert_eq!(line.polarity, Polarity::Yin);
        assert!(line.changing);
    }

    #[test]
    fn sum_seven_is_young_yang() {
        let line = line_for([Coin::Heads, Coin::Tails, Coin::Tails]);
        assert_eq!(line.sum, 7);
        assert_eq!(line.polarity, Polarity::Yang);
        assert!(!line.changing);
    }

    #[test]
    fn sum_eight_is_young_yin() {
        let line = line_for([Coin::Heads, Coin::Heads, Coin::Tails]);
        assert_eq!(line.sum, 8);
        assert_eq!(line.polarity, Polarity::Yin);
        assert!(!line.changing);
    }

    #[test]
    fn sum_nine_is_old_yang() {
        let line = line_for([Coin::Heads; 3]);
        assert_eq!(line.sum, 9);
        assert_eq!(line.polarity, Polarity::Yang);
        assert!(line.changing);
    }

    #[test]
    fn every_combination_matches_the_table() {
        let faces = [Coin::Heads, Coin::Tails];
        for a in faces {
            for b in faces {
                for c in faces {
                    let line = line_for([a, b, c]);
                    let expected = match line.sum {
                        6 => (Polarity::Yin, true),
                        7 => (Polarity::Yang, false),
                        8 => (Polarity::Yin, false),
                        9 => (Polarity::Yang, true),
                        other => panic!("unreachable sum {other}"),
                    };
                    assert_eq!((line.polarity, line.changing), expected);
                }
            }
        }
    }

    #[test]
    fn polarity_flip() {
        assert_eq!(Polarity::Yang.flipped(), Polarity::Yin);
        assert_eq!(Polarity::Yin.flipped(), Polarity::Yang);
    }

    #[test]
    fn round_trip_serde() {
        let line = line_for([Coin::Heads; 3]);
        let json = serde_json::to_string(&line).unwrap();
        let back: Line = serde_json::from_str(&json).unwrap();
        assert_eq!(back, line);
    }
}
