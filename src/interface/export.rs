use std::path::Path;

use crate::error::Result;
use crate::models::ComboResult;

/// Round to n decimal places for output.
fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Write combo results to a CSV file, one row per combo.
pub fn write_combos_csv(results: &[ComboResult], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["rank", "count", "items", "calories", "protein", "fat", "carbs"])?;

    for (i, result) in results.iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            result.count.to_string(),
            result.items.join(" + "),
            result.total.calories.to_string(),
            round_to(result.total.protein, 2).to_string(),
            round_to(result.total.fat, 2).to_string(),
            round_to(result.total.carbs, 2).to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Serialize combo results as pretty JSON.
pub fn combos_json(results: &[ComboResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
