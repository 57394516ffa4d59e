use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Restaurant not found: {}{}", .name, suggestion_hint(.suggestion))]
    RestaurantNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Menu store is empty")]
    EmptyStore,
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_not_found_message() {
        let err = MenuError::RestaurantNotFound {
            name: "mcdonald".to_string(),
            suggestion: Some("mcdonalds".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Restaurant not found: mcdonald (did you mean 'mcdonalds'?)"
        );

        let err = MenuError::RestaurantNotFound {
            name: "nowhere".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Restaurant not found: nowhere");
    }
}
