use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid brand: {0} (expected British Jewel|Bellex|Lagacy Ice)")]
    InvalidBrand(String),
    #[error("invalid lead type: {0} (expected Hot|Warm|Cold)")]
    InvalidLeadType(String),
    #[error("invalid store type: {0} (expected Super Market|Hyper Market)")]
    InvalidStoreType(String),
    #[error("invalid status: {0} (expected Follow-Up|Converted|Decline)")]
    InvalidStatus(String),
    #[error("invalid product: {0} (expected Ring|Pendant|Bracelet|Chain)")]
    InvalidProduct(String),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("No data found for the selected customer: {name}")]
pub struct LookupFailure {
    pub name: String,
}

impl LookupFailure {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Please select Type of Lead.")]
    MissingLeadType,
    #[error("Please select at least one Type of Brand.")]
    MissingBrand,
    #[error("Please select Type of Store.")]
    MissingStoreType,
    #[error("Please select Status.")]
    MissingStatus,
    #[error("Please select Follow-Up Date.")]
    MissingFollowUpDate,
    #[error("Please select at least one Customer Dealing Product and Next Connect Date.")]
    IncompleteConversion,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Lookup(#[from] LookupFailure),
    #[error(transparent)]
    Validation(#[from] ValidationFailure),
}
