pub mod combo;
pub mod constraints;
pub mod menu_item;
pub mod request;

pub use combo::{Combo, ComboResult, ComboTotals};
pub use constraints::{parse_bound, parse_count, Bound, ConstraintSet, Macro, MacroBounds};
pub use menu_item::{MenuItem, UNKNOWN_CATEGORY};
pub use request::{ComboRequest, RawMacros};
