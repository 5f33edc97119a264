pub mod compose;
pub mod validation;

pub use compose::compose;
pub use validation::validate;
