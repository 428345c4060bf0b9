pub mod alphabeta;
pub mod driver;
pub mod eval;
pub mod order;
pub mod params;
pub mod tt;

pub use alphabeta::{SearchNode, SearchResult, Searcher, Side};
pub use driver::{decide, decide_until, Decision};
pub use eval::{Evaluator, HeuristicVariant};
pub use params::{ConfigError, Preset, SearchParams};
