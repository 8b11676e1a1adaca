// errors.rs
use std::fmt;
use thiserror::Error;

/// Errors raised by the parking inventory itself.
/// None of them is fatal: a failed operation leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    #[error("Parking spot {number} already exists")]
    DuplicateNumber { number: String },

    #[error("Parking spot {number} not found")]
    NotFound { number: String },

    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
}

pub type InventoryResult<T> = Result<T, InventoryError>;

/// One offending form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every field at fault in a single validation pass, so the form layer can
/// flag all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    pub fields: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push(FieldError::new(field, message));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.field).collect()
    }

    /// `Ok(())` when nothing was collected, the validation error otherwise.
    pub fn into_result(self) -> InventoryResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(InventoryError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", err.field, err.message)?;
        }
        Ok(())
    }
}

/// Errors surfaced by the command line front end.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Seed data error: {0}")]
    Seed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Xlsx(String),
}

pub type AppResult<T> = Result<T, AppError>;
