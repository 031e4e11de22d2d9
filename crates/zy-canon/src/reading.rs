//! Resolving a complete figure into its reading.

use serde::{Deserialize, Serialize};
use zy_cast::Figure;

use crate::canon::Canon;
use crate::error::CanonResult;
use crate::record::Hexagram;

/// The outcome of resolving a complete figure against the canon.
///
/// Resolution is deterministic: given six lines it performs only the
/// lookups, no randomness and no I/O. The relating hexagram exists iff at
/// least one line is changing; otherwise it is absent, not empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// The record for the figure as cast.
    pub primary: Hexagram,
    /// The record for the derived figure, when any line is changing.
    pub relating: Option<Hexagram>,
    /// Positions (1..6, bottom up) of the changing lines.
    pub changing_positions: Vec<u8>,
}

impl Reading {
    /// Resolve a complete figure against the reference table.
    pub fn resolve(figure: &Figure, canon: &Canon) -> CanonResult<Self> {
        let primary = canon.hexagram(figure.key()?)?.clone();
        let relating = if figure.has_changing() {
            let derived = figure.relating()?;
            Some(canon.hexagram(derived.key()?)?.clone())
        } else {
            None
        };
        Ok(Self {
            primary,
            relating,
            changing_positions: figure.changing_positions(),
        })
    }

    /// The single changing line, when exactly one line changed.
    ///
    /// That line's commentary is the focus of the reading.
    pub fn focus_line(&self) -> Option<u8> {
        match self.changing_positions.as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::LineText;
    use std::collections::BTreeMap;
    use zy_cast::{Coin, Line, Toss};

    fn record(number: u8, name: &str, key: &str) -> Hexagram {
        let lines = (1..=6)
            .map(|n| {
                (
                    n,
                    LineText {
                        text: format!("{name} line {n}."),
                        comments: String::new(),
                    },
                )
            })
            .collect::<BTreeMap<_, _>>();
        Hexagram {
            number,
            name: name.to_string(),
            glyph: String::new(),
            key: key.parse().unwrap(),
            judgment: format!("Judgment of {name}."),
            image: format!("Image of {name}."),
            lines,
        }
    }

    fn canon() -> Canon {
        Canon::from_records([
            record(1, "The Creative", "111111"),
            record(2, "The Receptive", "000000"),
        ])
    }

    fn line(sum: u8) -> Line {
        let coins = match sum {
            6 => [Coin::Tails; 3],
            7 => [Coin::Heads, Coin::Tails, Coin::Tails],
            8 => [Coin::Heads, Coin::Heads, Coin::Tails],
            9 => [Coin::Heads; 3],
            other => panic!("bad sum {other}"),
        };
        Line::from_toss(Toss::new(coins))
    }

    fn figure(sums: [u8; 6]) -> Figure {
        let mut fig = Figure::new();
        for s in sums {
            fig.cast(line(s)).unwrap();
        }
        fig
    }

    #[test]
    fn static_figure_has_no_relating() {
        let fig = figure([7; 6]);
        let reading = Reading::resolve(&fig, &canon()).unwrap();
        assert_eq!(reading.primary.number, 1);
        assert!(reading.relating.is_none());
        assert!(reading.changing_positions.is_empty());
        assert!(reading.focus_line().is_none());
    }

    #[test]
    fn all_old_yang_relates_to_the_receptive() {
        let fig = figure([9; 6]);
        let reading = Reading::resolve(&fig, &canon()).unwrap();
        assert_eq!(reading.primary.number, 1);
        assert_eq!(reading.relating.as_ref().unwrap().number, 2);
        assert_eq!(reading.changing_positions, vec![1, 2, 3, 4, 5, 6]);
        assert!(reading.focus_line().is_none());
    }

    #[test]
    fn single_changing_line_is_the_focus() {
        // Only the bottom line is old yang; the relating figure flips it.
        let fig = figure([9, 7, 7, 7, 7, 7]);
        let table = Canon::from_records([
            record(1, "The Creative", "111111"),
            record(44, "Coming to Meet", "111110"),
        ]);
        let reading = Reading::resolve(&fig, &table).unwrap();
        assert_eq!(reading.focus_line(), Some(1));
        assert_eq!(reading.relating.as_ref().unwrap().number, 44);
    }

    #[test]
    fn resolution_is_deterministic() {
        let fig = figure([9, 7, 6, 8, 7, 9]);
        let table = Canon::from_records(
            (0..64u8).map(|bits| {
                let key: String = (0..6)
                    .rev()
                    .map(|i| if bits & (1 << i) != 0 { '1' } else { '0' })
                    .collect();
                record(bits + 1, &format!("Hexagram {}", bits + 1), &key)
            }),
        );
        let first = Reading::resolve(&fig, &table).unwrap();
        let second = Reading::resolve(&fig, &table).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_relating_record_surfaces_data_fault() {
        let fig = figure([9; 6]);
        let table = Canon::from_records([record(1, "The Creative", "111111")]);
        let err = Reading::resolve(&fig, &table).unwrap_err();
        assert!(matches!(err, crate::error::CanonError::UnknownKey(_)));
    }

    #[test]
    fn incomplete_figure_cannot_resolve() {
        let mut fig = Figure::new();
        fig.cast(line(7)).unwrap();
        assert!(matches!(
            Reading::resolve(&fig, &canon()),
            Err(crate::error::CanonError::Cast(_))
        ));
    }
}
