//! Raw form values and their conversion into request bodies

use crate::error::ApiError;
use chrono::NaiveDate;
use spendboard_types::{Category, Expense, ExpenseCreate, ExpensePatch, DEFAULT_CURRENCY};

/// Field values exactly as read from the form inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub amount: String,
    pub currency: String,
    pub category: String,
    pub date: String,
    pub merchant: String,
    pub description: String,
}

impl Default for ExpenseDraft {
    fn default() -> Self {
        Self {
            amount: String::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            category: Category::Food.as_str().to_string(),
            date: String::new(),
            merchant: String::new(),
            description: String::new(),
        }
    }
}

impl From<&Expense> for ExpenseDraft {
    fn from(expense: &Expense) -> Self {
        Self {
            amount: expense.amount.clone(),
            currency: expense.currency.clone(),
            category: expense.category.as_str().to_string(),
            date: expense.date.format("%Y-%m-%d").to_string(),
            merchant: expense.merchant.clone(),
            description: expense.description.clone(),
        }
    }
}

impl ExpenseDraft {
    /// Build the create body. Empty merchant/description become absent
    /// fields; amount is passed through as text for the backend to validate.
    pub fn into_create(self) -> Result<ExpenseCreate, ApiError> {
        let category = self
            .category
            .parse::<Category>()
            .map_err(|_| ApiError::InvalidDraft {
                field: "category",
                value: self.category.clone(),
            })?;
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d").map_err(|_| {
            ApiError::InvalidDraft {
                field: "date",
                value: self.date.clone(),
            }
        })?;
        let currency = if self.currency.trim().is_empty() {
            DEFAULT_CURRENCY.to_string()
        } else {
            self.currency.trim().to_string()
        };

        Ok(ExpenseCreate {
            amount: self.amount.trim().to_string(),
            currency,
            category,
            date,
            description: non_empty(self.description),
            merchant: non_empty(self.merchant),
        })
    }

    /// Same fields as a full-record PATCH
    pub fn into_patch(self) -> Result<ExpensePatch, ApiError> {
        self.into_create().map(ExpensePatch::from)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn required_only() -> ExpenseDraft {
        ExpenseDraft {
            amount: "12.50".to_string(),
            category: "food".to_string(),
            date: "2024-01-01".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_fields_only_omit_optionals() {
        let create = required_only().into_create().unwrap();
        let body = serde_json::to_value(&create).unwrap();

        assert_eq!(
            body,
            json!({
                "amount": "12.50",
                "currency": "USD",
                "category": "food",
                "date": "2024-01-01"
            })
        );
        assert!(body.get("merchant").is_none());
        assert!(body.get("description").is_none());
    }

    #[test]
    fn test_optional_fields_are_kept() {
        let draft = ExpenseDraft {
            merchant: "Corner Shop".to_string(),
            description: "milk".to_string(),
            currency: "EUR".to_string(),
            ..required_only()
        };
        let create = draft.into_create().unwrap();
        assert_eq!(create.merchant.as_deref(), Some("Corner Shop"));
        assert_eq!(create.description.as_deref(), Some("milk"));
        assert_eq!(create.currency, "EUR");
    }

    #[test]
    fn test_unparseable_date_is_reported() {
        let draft = ExpenseDraft {
            date: "01/02/2024".to_string(),
            ..required_only()
        };
        let err = draft.into_create().unwrap_err();
        assert_eq!(err.to_string(), "Invalid date: '01/02/2024'");
    }

    #[test]
    fn test_unknown_category_is_reported() {
        let draft = ExpenseDraft {
            category: "travel".to_string(),
            ..required_only()
        };
        assert!(matches!(
            draft.into_create(),
            Err(ApiError::InvalidDraft { field: "category", .. })
        ));
    }

    #[test]
    fn test_prefill_from_expense() {
        let expense: Expense = serde_json::from_value(json!({
            "id": 3,
            "amount": "9.99",
            "currency": "GBP",
            "category": "shopping",
            "date": "2024-05-17",
            "description": "",
            "merchant": "Market",
            "created_at": "2024-05-17T08:00:00Z",
            "updated_at": "2024-05-17T08:00:00Z"
        }))
        .unwrap();

        let draft = ExpenseDraft::from(&expense);
        assert_eq!(draft.date, "2024-05-17");
        assert_eq!(draft.category, "shopping");

        let patch = draft.into_patch().unwrap();
        assert_eq!(patch.merchant.as_deref(), Some("Market"));
        assert_eq!(patch.description, None);
        assert_eq!(patch.amount.as_deref(), Some("9.99"));
    }
}
