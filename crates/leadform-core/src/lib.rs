pub mod domain;
pub mod error;
pub mod form;
pub mod rules;
pub mod time;

pub use domain::*;
pub use error::{CoreError, FormError, LookupFailure, ValidationFailure};
pub use form::{ConditionalFields, EntryView, FormState, FormView};
pub use rules::*;
