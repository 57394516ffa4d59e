pub mod export;
pub mod prompts;
pub mod render;

pub use export::{combos_json, write_combos_csv};
pub use prompts::{
    collect_constraints, prompt_bound, prompt_categories, prompt_count, prompt_range,
    prompt_restaurant, prompt_yes_no,
};
pub use render::{display_combos, display_list, display_menu};
