use std::io::Read;
use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing_subscriber::EnvFilter;

use name_your_calories::cli::{Cli, ComboArgs, Command};
use name_your_calories::engine::{find_combos, SearchConfig};
use name_your_calories::error::Result;
use name_your_calories::interface::{
    collect_constraints, combos_json, display_combos, display_list, display_menu,
    write_combos_csv,
};
use name_your_calories::models::parse_bound;
use name_your_calories::service::{require_restaurant, search_restaurant, serve_json};
use name_your_calories::store::{import_csv, load_menu, save_menu, MenuStore};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for tables and JSON.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Restaurants => cmd_restaurants(&cli.file),
        Command::Categories { restaurant } => cmd_categories(&cli.file, &restaurant),
        Command::Menu {
            restaurant,
            calorie_min,
            calorie_max,
        } => cmd_menu(
            &cli.file,
            &restaurant,
            calorie_min.as_deref(),
            calorie_max.as_deref(),
        ),
        Command::Combos(args) => cmd_combos(&cli.file, &args),
        Command::Request { path } => cmd_request(&cli.file, &path),
        Command::Interactive => cmd_interactive(&cli.file),
        Command::Import { csv } => cmd_import(&cli.file, &csv),
    }
}

/// Load the store, treating a missing file as an empty store.
fn open_store(path: &Path) -> Result<MenuStore> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "menu store not found, starting empty");
        return Ok(MenuStore::default());
    }
    let items = load_menu(path)?;
    tracing::info!(items = items.len(), path = %path.display(), "loaded menu store");
    Ok(MenuStore::new(items))
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    tracing::debug!(seed, "sampling seed");
    StdRng::seed_from_u64(seed)
}

/// List every restaurant in the store.
fn cmd_restaurants(file: &Path) -> Result<()> {
    let store = open_store(file)?;
    display_list(&store.restaurants(), "Restaurants");
    Ok(())
}

/// List categories for one restaurant.
fn cmd_categories(file: &Path, restaurant: &str) -> Result<()> {
    let store = open_store(file)?;
    let restaurant = require_restaurant(&store, restaurant)?;
    display_list(&store.categories(&restaurant), "Categories");
    Ok(())
}

/// Browse single items within an optional calorie range.
fn cmd_menu(
    file: &Path,
    restaurant: &str,
    calorie_min: Option<&str>,
    calorie_max: Option<&str>,
) -> Result<()> {
    let store = open_store(file)?;
    let restaurant = require_restaurant(&store, restaurant)?;

    let items = store.menu(
        &restaurant,
        calorie_min.and_then(parse_bound),
        calorie_max.and_then(parse_bound),
    );
    display_menu(&items, &restaurant);
    Ok(())
}

/// Search combos from command-line constraints.
fn cmd_combos(file: &Path, args: &ComboArgs) -> Result<()> {
    let store = open_store(file)?;
    let constraints = args.to_constraints();
    let config = SearchConfig {
        max_size: args.max_size,
        ..Default::default()
    };

    let mut rng = seeded_rng(args.seed);
    let results = search_restaurant(&store, &constraints, &config, &mut rng)?;

    if args.json {
        println!("{}", combos_json(&results)?);
    } else {
        display_combos(&results);
    }

    if let Some(path) = &args.csv {
        write_combos_csv(&results, path)?;
        println!("Wrote {} combos to {}", results.len(), path.display());
    }

    Ok(())
}

/// Answer a JSON request read from a file or stdin.
fn cmd_request(file: &Path, path: &Path) -> Result<()> {
    let store = open_store(file)?;

    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };

    let results = serve_json(&store, &json, &SearchConfig::default(), &mut rand::thread_rng())?;
    println!("{}", combos_json(&results)?);
    Ok(())
}

/// Prompt for a restaurant, categories and ranges, then search.
fn cmd_interactive(file: &Path) -> Result<()> {
    let store = open_store(file)?;
    if store.is_empty() {
        println!("The menu store is empty. Use 'import' to add items first.");
        return Ok(());
    }

    println!("Loaded {} menu items", store.len());
    println!();

    let config = SearchConfig::default();
    let constraints = collect_constraints(&store, config.default_count)?;
    let pool = store.items_for(constraints.restaurant.as_deref().unwrap_or_default());

    let results = find_combos(pool, &constraints, &config, &mut rand::thread_rng());
    display_combos(&results);
    Ok(())
}

/// Merge CSV rows into the store file.
fn cmd_import(file: &Path, csv: &Path) -> Result<()> {
    let mut store = open_store(file)?;
    let before = store.len();

    let imported = import_csv(csv)?;
    let count = imported.len();
    for item in imported {
        store.insert(item);
    }

    save_menu(file, &store.to_items())?;
    println!(
        "Imported {} rows ({} new items). Store now has {} items.",
        count,
        store.len() - before,
        store.len()
    );
    Ok(())
}
