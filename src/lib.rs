// Alpha-beta decision engine for the two-player fishing game
pub mod board;
pub mod search;

pub use board::{Action, PlayerId, Pos, Snapshot, StateAdapter};
pub use search::{decide, Decision, SearchParams};
