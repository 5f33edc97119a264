use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SENTINEL: &str = "-- Select --";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Brand {
    #[serde(rename = "British Jewel")]
    BritishJewel,
    #[serde(rename = "Bellex")]
    Bellex,
    #[serde(rename = "Lagacy Ice")]
    LagacyIce,
}

impl Brand {
    pub const ALL: [Brand; 3] = [Brand::BritishJewel, Brand::Bellex, Brand::LagacyIce];

    pub fn as_str(self) -> &'static str {
        match self {
            Brand::BritishJewel => "British Jewel",
            Brand::Bellex => "Bellex",
            Brand::LagacyIce => "Lagacy Ice",
        }
    }
}

impl FromStr for Brand {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "britishjewel" => Ok(Brand::BritishJewel),
            "bellex" => Ok(Brand::Bellex),
            "lagacyice" | "legacyice" => Ok(Brand::LagacyIce),
            _ => Err(CoreError::InvalidBrand(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadType {
    Hot,
    Warm,
    Cold,
}

impl LeadType {
    pub const ALL: [LeadType; 3] = [LeadType::Hot, LeadType::Warm, LeadType::Cold];

    pub fn as_str(self) -> &'static str {
        match self {
            LeadType::Hot => "Hot",
            LeadType::Warm => "Warm",
            LeadType::Cold => "Cold",
        }
    }
}

impl FromStr for LeadType {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "hot" => Ok(LeadType::Hot),
            "warm" => Ok(LeadType::Warm),
            "cold" => Ok(LeadType::Cold),
            _ => Err(CoreError::InvalidLeadType(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StoreType {
    #[serde(rename = "Super Market")]
    SuperMarket,
    #[serde(rename = "Hyper Market")]
    HyperMarket,
}

impl StoreType {
    pub const ALL: [StoreType; 2] = [StoreType::SuperMarket, StoreType::HyperMarket];

    pub fn as_str(self) -> &'static str {
        match self {
            StoreType::SuperMarket => "Super Market",
            StoreType::HyperMarket => "Hyper Market",
        }
    }
}

impl FromStr for StoreType {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "supermarket" | "super" => Ok(StoreType::SuperMarket),
            "hypermarket" | "hyper" => Ok(StoreType::HyperMarket),
            _ => Err(CoreError::InvalidStoreType(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    #[serde(rename = "Follow-Up")]
    FollowUp,
    Converted,
    Decline,
}

impl StatusKind {
    pub const ALL: [StatusKind; 3] = [
        StatusKind::FollowUp,
        StatusKind::Converted,
        StatusKind::Decline,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StatusKind::FollowUp => "Follow-Up",
            StatusKind::Converted => "Converted",
            StatusKind::Decline => "Decline",
        }
    }
}

impl FromStr for StatusKind {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "followup" => Ok(StatusKind::FollowUp),
            "converted" => Ok(StatusKind::Converted),
            "decline" | "declined" => Ok(StatusKind::Decline),
            _ => Err(CoreError::InvalidStatus(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Product {
    Ring,
    Pendant,
    Bracelet,
    Chain,
}

impl Product {
    pub const ALL: [Product; 4] = [
        Product::Ring,
        Product::Pendant,
        Product::Bracelet,
        Product::Chain,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Product::Ring => "Ring",
            Product::Pendant => "Pendant",
            Product::Bracelet => "Bracelet",
            Product::Chain => "Chain",
        }
    }
}

impl FromStr for Product {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize_label(raw).as_str() {
            "ring" => Ok(Product::Ring),
            "pendant" => Ok(Product::Pendant),
            "bracelet" => Ok(Product::Bracelet),
            "chain" => Ok(Product::Chain),
            _ => Err(CoreError::InvalidProduct(raw.to_string())),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Brand, LeadType, StoreType, StatusKind, Product);

pub fn parse_choice<T>(raw: &str) -> Result<Option<T>, CoreError>
where
    T: FromStr<Err = CoreError>,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == SENTINEL {
        return Ok(None);
    }
    trimmed.parse().map(Some)
}

pub fn join_labels<I>(labels: I) -> String
where
    I: IntoIterator<Item = &'static str>,
{
    labels.into_iter().collect::<Vec<_>>().join(", ")
}

fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_alphanumeric())
        .map(|ch| ch.to_ascii_lowercase())
        .collect()
}
