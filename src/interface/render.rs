use crate::models::{ComboResult, MenuItem};

/// Display combos as a numbered list with totals.
pub fn display_combos(results: &[ComboResult]) {
    if results.is_empty() {
        println!("No combos match those constraints.");
        return;
    }

    println!();
    println!("=== Combos ({}) ===", results.len());
    println!();

    for (i, result) in results.iter().enumerate() {
        println!(
            "{:>3}. {} item{}: {}",
            i + 1,
            result.count,
            if result.count == 1 { "" } else { "s" },
            result.items.join(" + ")
        );
        println!(
            "     {:>5} cal | P {:.1}g | F {:.1}g | C {:.1}g",
            result.total.calories, result.total.protein, result.total.fat, result.total.carbs
        );
    }

    println!();
}

/// Display single menu items in a table.
pub fn display_menu(items: &[&MenuItem], title: &str) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, items.len());
    println!();

    let width = items.iter().map(|i| i.name.len()).max().unwrap_or(10);

    for item in items {
        println!(
            "  {:<width$}  {:>5} cal | P {:>5.1} | F {:>5.1} | C {:>5.1} | {}",
            item.name,
            item.calories,
            item.protein,
            item.fat,
            item.carbs,
            item.category_or_unknown(),
            width = width
        );
    }

    println!();
}

/// Display a plain list of names.
pub fn display_list(values: &[String], title: &str) {
    if values.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!("{}:", title);
    for value in values {
        println!("  {}", value);
    }
}
