//! Game logic module
//!
//! Contains the color palette, question generation and grading,
//! the selection roulette, the session clock and running statistics.

pub mod clock;
pub mod palette;
pub mod question;
pub mod roulette;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use clock::SessionClock;
pub use palette::{PaletteEntry, PALETTE, PALETTE_SIZE};
pub use question::{Attribute, Question};
pub use roulette::{Roulette, RouletteEvent};
pub use session::{PendingAnswer, Session};
pub use stats::GameStats;
