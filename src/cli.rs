use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::{parse_count, ConstraintSet, Macro};

/// Name Your Calories — find restaurant menu combos that fit your macros.
#[derive(Parser, Debug)]
#[command(name = "nyc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the menu store JSON file.
    #[arg(short, long, global = true, default_value = "menu_items.json")]
    pub file: PathBuf,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List restaurants in the store.
    Restaurants,

    /// List the menu categories of a restaurant.
    Categories {
        restaurant: String,
    },

    /// Browse single menu items within a calorie range.
    Menu {
        restaurant: String,

        #[arg(long)]
        calorie_min: Option<String>,

        #[arg(long)]
        calorie_max: Option<String>,
    },

    /// Find random combos of 2 to 5 items that fit the given ranges.
    Combos(ComboArgs),

    /// Answer a JSON combo request from a file, or stdin with "-".
    Request {
        path: PathBuf,
    },

    /// Build a combo search interactively.
    Interactive,

    /// Merge menu items from a CSV file into the store.
    Import {
        csv: PathBuf,
    },
}

/// Arguments of the `combos` subcommand.
///
/// Bounds are taken as text; anything that is not a number means no bound.
#[derive(Args, Debug, Default)]
pub struct ComboArgs {
    pub restaurant: String,

    /// Category to include (repeatable). Omit for all categories.
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    #[arg(long)]
    pub calorie_min: Option<String>,
    #[arg(long)]
    pub calorie_max: Option<String>,
    #[arg(long)]
    pub protein_min: Option<String>,
    #[arg(long)]
    pub protein_max: Option<String>,
    #[arg(long)]
    pub fat_min: Option<String>,
    #[arg(long)]
    pub fat_max: Option<String>,
    #[arg(long)]
    pub carb_min: Option<String>,
    #[arg(long)]
    pub carb_max: Option<String>,

    /// Number of combos to return. Omitted, zero or invalid means 10.
    #[arg(short, long, allow_hyphen_values = true)]
    pub num: Option<String>,

    /// Largest combo size to consider (at most 5).
    #[arg(long, default_value = "5")]
    pub max_size: usize,

    /// Seed for reproducible sampling.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,

    /// Also write results to this CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}

impl ComboArgs {
    /// Build engine constraints, parsing bounds leniently.
    pub fn to_constraints(&self) -> ConstraintSet {
        let mut constraints = ConstraintSet::new()
            .with_restaurant(self.restaurant.as_str())
            .with_categories(self.categories.iter().cloned())
            .with_raw_range(Macro::Calories, raw(&self.calorie_min), raw(&self.calorie_max))
            .with_raw_range(Macro::Protein, raw(&self.protein_min), raw(&self.protein_max))
            .with_raw_range(Macro::Fat, raw(&self.fat_min), raw(&self.fat_max))
            .with_raw_range(Macro::Carbs, raw(&self.carb_min), raw(&self.carb_max));
        constraints.num = self.num.as_deref().and_then(parse_count);
        constraints
    }
}

fn raw(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}
