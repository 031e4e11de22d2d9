//! Figures: six lines stacked bottom to top.

use serde::{Deserialize, Serialize};

use crate::error::{CastError, CastResult};
use crate::key::HexKey;
use crate::line::Line;

/// An ordered stack of up to six cast lines, bottom line first.
///
/// A figure grows one line per casting step and is complete at six.
/// Positions are numbered 1 (bottom, cast first) through 6 (top).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    lines: Vec<Line>,
}

impl Figure {
    /// Create an empty figure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line, returning its 1-based position.
    ///
    /// Rejected once six lines are present.
    pub fn cast(&mut self, line: Line) -> CastResult<u8> {
        if self.lines.len() >= 6 {
            return Err(CastError::FigureFull);
        }
        self.lines.push(line);
        Ok(self.lines.len() as u8)
    }

    /// The lines cast so far, bottom to top.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines cast so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when no lines have been cast.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// True when all six lines are present.
    pub fn is_complete(&self) -> bool {
        self.lines.len() == 6
    }

    /// True when at least one cast line is changing.
    pub fn has_changing(&self) -> bool {
        self.lines.iter().any(|l| l.changing)
    }

    /// Positions (1..6, bottom up) of the changing lines.
    pub fn changing_positions(&self) -> Vec<u8> {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.changing)
            .map(|(i, _)| (i + 1) as u8)
            .collect()
    }

    /// Derive the relating figure by flipping every changing line.
    ///
    /// Only defined for a complete figure with at least one changing line;
    /// when nothing changes there is no relating figure at all. Flipped
    /// lines keep their `changing` mark so the derived figure still shows
    /// which positions moved.
    pub fn relating(&self) -> CastResult<Figure> {
        if !self.is_complete() {
            return Err(CastError::Incomplete(self.lines.len()));
        }
        if !self.has_changing() {
            return Err(CastError::NoChangingLines);
        }
        let lines = self
            .lines
            .iter()
            .map(|l| {
                if l.changing {
                    Line {
                        polarity: l.polarity.flipped(),
                        ..*l
                    }
                } else {
                    *l
                }
            })
            .collect();
        Ok(Figure { lines })
    }

    /// Encode the complete figure as its lookup key.
    pub fn key(&self) -> CastResult<HexKey> {
        let polarities: Vec<_> = self.lines.iter().map(|l| l.polarity).collect();
        let polarities: [_; 6] = polarities
            .try_into()
            .map_err(|_| CastError::Incomplete(self.lines.len()))?;
        Ok(HexKey::from_polarities_bottom_up(&polarities))
    }
}
