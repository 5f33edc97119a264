pub mod catalog;
pub mod column;
pub mod customer;
pub mod lead;
pub mod options;
pub mod record;

pub use catalog::Catalog;
pub use column::{canonical_columns, Column};
pub use customer::CustomerRecord;
pub use lead::{LeadDraft, LeadEntry, LeadStatus};
pub use options::{
    join_labels, parse_choice, Brand, LeadType, Product, StatusKind, StoreType, SENTINEL,
};
pub use record::OutputRecord;
