pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod service;
pub mod store;

pub use engine::{find_combos, search_combos, SearchConfig};
pub use error::{MenuError, Result};
pub use models::{ComboResult, ConstraintSet, MenuItem};
