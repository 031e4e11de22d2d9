//! Three-coin casting mechanics for the Zhouyi oracle.
//!
//! A casting step throws three coins (heads 3, tails 2), reducing their sum
//! to one of six stacked lines. Six steps build a [`Figure`] from the bottom
//! up; figures with changing lines derive a relating figure, and every
//! complete figure encodes to a six-bit [`HexKey`] for reference lookup.

pub mod coin;
pub mod error;
pub mod figure;
pub mod key;
pub mod line;

pub use coin::{Coin, Toss};
pub use error::{CastError, CastResult};
pub use figure::Figure;
pub use key::HexKey;
pub use line::{Line, Polarity};
