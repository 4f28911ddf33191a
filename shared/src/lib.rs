use serde::{Deserialize, Serialize};

/// Expense ID in format: "expense::<epoch_millis>"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    /// Expense amount in dollars (non-negative)
    pub amount: f64,
    /// Description of the expense (max 256 characters)
    pub description: String,
    /// Spending category; out-of-enum values are preserved verbatim
    pub category: Category,
    /// Calendar date in ISO 8601 format (YYYY-MM-DD)
    pub date: String,
}

/// Spending category for an expense record.
///
/// The UI only offers the six known variants; anything else encountered in
/// persisted data is carried through `Unknown` so it round-trips unchanged
/// and renders with the "Other" presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Other,
    /// Unrecognized raw category value, preserved as stored
    Unknown(String),
}

impl Category {
    /// The closed set of categories offered for selection
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Bills,
        Category::Other,
    ];

    /// The raw wire value, exactly as stored
    pub fn as_str(&self) -> &str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Entertainment => "entertainment",
            Category::Shopping => "shopping",
            Category::Bills => "bills",
            Category::Other => "other",
            Category::Unknown(raw) => raw,
        }
    }

    /// Human-readable label for display
    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food & Dining",
            Category::Transport => "Transportation",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Bills => "Bills & Utilities",
            Category::Other | Category::Unknown(_) => "Other",
        }
    }

    /// Emoji icon for display
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Food => "🍔",
            Category::Transport => "🚗",
            Category::Entertainment => "🎬",
            Category::Shopping => "🛒",
            Category::Bills => "📄",
            Category::Other | Category::Unknown(_) => "💰",
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "food" => Category::Food,
            "transport" => Category::Transport,
            "entertainment" => Category::Entertainment,
            "shopping" => Category::Shopping,
            "bills" => Category::Bills,
            "other" => Category::Other,
            _ => Category::Unknown(raw),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl Expense {
    /// Generate an expense ID from a creation timestamp
    pub fn generate_id(epoch_millis: u64) -> String {
        format!("expense::{}", epoch_millis)
    }

    /// Structural validity check applied when loading persisted data.
    ///
    /// Mirrors the storage contract: a record is kept only if it carries a
    /// non-empty id, a finite amount, and non-empty description, category,
    /// and date. Records failing this check are dropped individually.
    pub fn is_structurally_valid(&self) -> bool {
        !self.id.is_empty()
            && self.amount.is_finite()
            && !self.description.is_empty()
            && !self.category.as_str().is_empty()
            && !self.date.is_empty()
    }
}

/// User-supplied filter criteria for the expense list.
///
/// Empty strings impose no constraint; all non-empty criteria must hold
/// simultaneously for a record to pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Exact, case-sensitive match against the stored category value
    pub category: String,
    /// Inclusive lower bound, compared lexicographically (YYYY-MM-DD)
    pub date_from: String,
    /// Inclusive upper bound, compared lexicographically (YYYY-MM-DD)
    pub date_to: String,
    /// Case-insensitive substring match against the description
    pub search_text: String,
}

impl FilterCriteria {
    /// Whether no criterion is active (whitespace-only search counts as empty)
    pub fn is_empty(&self) -> bool {
        self.category.is_empty()
            && self.date_from.is_empty()
            && self.date_to.is_empty()
            && self.search_text.trim().is_empty()
    }

    /// Number of active structured filters (category + date bounds).
    /// The search box is surfaced separately and not counted here.
    pub fn active_count(&self) -> usize {
        [&self.category, &self.date_from, &self.date_to]
            .iter()
            .filter(|value| !value.is_empty())
            .count()
    }
}

/// Request for creating a new expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub date: String,
}

/// Request for rewriting an existing expense record (all fields overwritten)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateExpenseRequest {
    pub amount: f64,
    pub description: String,
    pub category: Category,
    pub date: String,
}

/// Specific validation errors for expense form input
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExpenseValidationError {
    #[error("description is required")]
    EmptyDescription,
    #[error("description is too long ({0} characters)")]
    DescriptionTooLong(usize),
    #[error("amount is required")]
    EmptyAmount,
    #[error("amount is not a valid number: {0}")]
    InvalidAmount(String),
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("a category must be selected")]
    MissingCategory,
    #[error("date is required")]
    EmptyDate,
    #[error("date must be a calendar date in YYYY-MM-DD format: {0}")]
    InvalidDate(String),
}

/// Result of validating raw expense form input
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseValidation {
    pub errors: Vec<ExpenseValidationError>,
    /// Parsed amount, present only when the amount field validated cleanly
    pub cleaned_amount: Option<f64>,
}

impl ExpenseValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate raw expense form input before it becomes a create/update request.
///
/// Incomplete or malformed input never reaches the expense service; the form
/// simply refuses to submit (there is no user-facing error surface for this).
pub fn validate_expense_input(
    amount_input: &str,
    description: &str,
    category: Option<&Category>,
    date: &str,
    config: &TrackerConfig,
) -> ExpenseValidation {
    let mut errors = Vec::new();
    let mut cleaned_amount = None;

    let amount_input = amount_input.trim();
    if amount_input.is_empty() {
        errors.push(ExpenseValidationError::EmptyAmount);
    } else {
        match amount_input.parse::<f64>() {
            Ok(value) if !value.is_finite() => {
                errors.push(ExpenseValidationError::InvalidAmount(amount_input.to_string()));
            }
            Ok(value) if value < 0.0 => {
                errors.push(ExpenseValidationError::NegativeAmount);
            }
            Ok(value) => cleaned_amount = Some(value),
            Err(_) => {
                errors.push(ExpenseValidationError::InvalidAmount(amount_input.to_string()));
            }
        }
    }

    let trimmed_description = description.trim();
    if trimmed_description.is_empty() {
        errors.push(ExpenseValidationError::EmptyDescription);
    } else if trimmed_description.len() > config.max_description_length {
        errors.push(ExpenseValidationError::DescriptionTooLong(trimmed_description.len()));
    }

    if category.is_none() {
        errors.push(ExpenseValidationError::MissingCategory);
    }

    if date.trim().is_empty() {
        errors.push(ExpenseValidationError::EmptyDate);
    } else if chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d").is_err() {
        errors.push(ExpenseValidationError::InvalidDate(date.trim().to_string()));
    }

    ExpenseValidation {
        errors,
        cleaned_amount,
    }
}

/// What happens to the filtered view after a mutation of the canonical
/// collection (add/edit/delete).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterPolicy {
    /// Re-apply the active criteria to the new canonical collection, so the
    /// user's filter survives mutations
    ReapplyCriteria,
    /// Reset the view to the full canonical collection and drop the active
    /// criteria until the filter bar fires again
    ResetView,
}

/// Configuration for the expense tracker application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub currency_symbol: String,
    pub max_description_length: usize,
    pub filter_policy: FilterPolicy,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            max_description_length: 256,
            filter_policy: FilterPolicy::ReapplyCriteria,
        }
    }
}
