use crate::models::{Combo, ComboResult};

/// Map a combo to its output record.
pub fn format_combo(combo: &Combo) -> ComboResult {
    ComboResult {
        items: combo.names(),
        count: combo.len(),
        total: combo.totals(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    #[test]
    fn test_format_combo() {
        let a = MenuItem::new("Spicy Chicken Sandwich", "chick-fil-a", 450, 28.0, 19.0, 45.0);
        let b = MenuItem::new("Waffle Fries", "chick-fil-a", 420, 5.0, 24.0, 45.0);
        let c = MenuItem::new("Diet Lemonade", "chick-fil-a", 60, 0.0, 0.0, 15.0);
        let result = format_combo(&Combo::new(vec![&a, &b, &c]));

        assert_eq!(
            result.items,
            vec!["Spicy Chicken Sandwich", "Waffle Fries", "Diet Lemonade"]
        );
        assert_eq!(result.count, 3);
        assert_eq!(result.total.calories, 930);
        assert_eq!(result.total.protein, 33.0);
        assert_eq!(result.total.fat, 43.0);
        assert_eq!(result.total.carbs, 105.0);
    }

    #[test]
    fn test_json_shape() {
        let a = MenuItem::new("A", "r", 200, 10.0, 5.0, 20.0);
        let b = MenuItem::new("B", "r", 150, 8.0, 3.0, 15.0);
        let json = serde_json::to_value(format_combo(&Combo::new(vec![&a, &b]))).unwrap();

        assert_eq!(json["items"], serde_json::json!(["A", "B"]));
        assert_eq!(json["count"], 2);
        assert_eq!(json["total"]["calories"], 350);
        assert_eq!(json["total"]["protein"], 18.0);
    }
}
