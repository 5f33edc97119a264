use crate::domain::options::{Brand, LeadType, Product, StatusKind, StoreType};
use chrono::NaiveDate;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadDraft {
    pub visit_date: Option<NaiveDate>,
    pub brands: BTreeSet<Brand>,
    pub lead_type: Option<LeadType>,
    pub store_type: Option<StoreType>,
    pub status: Option<StatusKind>,
    pub follow_up_date: Option<NaiveDate>,
    pub products: BTreeSet<Product>,
    pub next_connect_date: Option<NaiveDate>,
    pub description: String,
}

impl LeadDraft {
    pub fn toggle_brand(&mut self, brand: Brand) {
        if !self.brands.remove(&brand) {
            self.brands.insert(brand);
        }
    }

    pub fn toggle_product(&mut self, product: Product) {
        if !self.products.remove(&product) {
            self.products.insert(product);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadStatus {
    FollowUp {
        follow_up_date: NaiveDate,
    },
    Converted {
        products: BTreeSet<Product>,
        next_connect_date: NaiveDate,
    },
    Decline,
}

impl LeadStatus {
    pub fn kind(&self) -> StatusKind {
        match self {
            LeadStatus::FollowUp { .. } => StatusKind::FollowUp,
            LeadStatus::Converted { .. } => StatusKind::Converted,
            LeadStatus::Decline => StatusKind::Decline,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadEntry {
    pub visit_date: Option<NaiveDate>,
    pub brands: BTreeSet<Brand>,
    pub lead_type: LeadType,
    pub store_type: StoreType,
    pub status: LeadStatus,
    pub description: String,
}
