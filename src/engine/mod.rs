pub mod constants;
pub mod enumeration;
pub mod feasibility;
pub mod formatting;
pub mod pruning;
pub mod sampling;
pub mod search;

pub use constants::*;
pub use enumeration::{combinations_for_size, enumerate, total_combos, ComboIter};
pub use feasibility::{first_violation, is_feasible, totals_within};
pub use formatting::format_combo;
pub use pruning::{prune, select_pool, violates_max};
pub use sampling::{requested_count, sample};
pub use search::{feasible_combos, find_combos, search_combos, SearchConfig};
