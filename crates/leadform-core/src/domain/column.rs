use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// Declaration order is the canonical ledger order; the derived `Ord` relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Column {
    #[serde(rename = "Customer/Company Name")]
    CustomerName,
    #[serde(rename = "Mobile Number")]
    MobileNumber,
    #[serde(rename = "Email Address")]
    EmailAddress,
    #[serde(rename = "Address")]
    Address,
    #[serde(rename = "City")]
    City,
    #[serde(rename = "State")]
    State,
    #[serde(rename = "Source")]
    Source,
    #[serde(rename = "Lead Date")]
    LeadDate,
    #[serde(rename = "Visit Date")]
    VisitDate,
    #[serde(rename = "Type of Lead")]
    LeadType,
    #[serde(rename = "Type of Brand")]
    BrandType,
    #[serde(rename = "Type of Store")]
    StoreType,
    #[serde(rename = "Status")]
    Status,
    #[serde(rename = "Follow-Up Date")]
    FollowUpDate,
    #[serde(rename = "Customer Dealing Product")]
    DealingProduct,
    #[serde(rename = "Next Connect Date")]
    NextConnectDate,
    #[serde(rename = "Description")]
    Description,
}

impl Column {
    pub const CANONICAL_ORDER: [Column; 17] = [
        Column::CustomerName,
        Column::MobileNumber,
        Column::EmailAddress,
        Column::Address,
        Column::City,
        Column::State,
        Column::Source,
        Column::LeadDate,
        Column::VisitDate,
        Column::LeadType,
        Column::BrandType,
        Column::StoreType,
        Column::Status,
        Column::FollowUpDate,
        Column::DealingProduct,
        Column::NextConnectDate,
        Column::Description,
    ];

    pub const CUSTOMER: [Column; 8] = [
        Column::CustomerName,
        Column::MobileNumber,
        Column::EmailAddress,
        Column::Address,
        Column::City,
        Column::State,
        Column::Source,
        Column::LeadDate,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::CustomerName => "Customer/Company Name",
            Column::MobileNumber => "Mobile Number",
            Column::EmailAddress => "Email Address",
            Column::Address => "Address",
            Column::City => "City",
            Column::State => "State",
            Column::Source => "Source",
            Column::LeadDate => "Lead Date",
            Column::VisitDate => "Visit Date",
            Column::LeadType => "Type of Lead",
            Column::BrandType => "Type of Brand",
            Column::StoreType => "Type of Store",
            Column::Status => "Status",
            Column::FollowUpDate => "Follow-Up Date",
            Column::DealingProduct => "Customer Dealing Product",
            Column::NextConnectDate => "Next Connect Date",
            Column::Description => "Description",
        }
    }

    pub fn from_header(raw: &str) -> Option<Column> {
        Column::CANONICAL_ORDER
            .into_iter()
            .find(|column| column.header() == raw)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

pub fn canonical_columns<I>(present: I) -> Vec<Column>
where
    I: IntoIterator<Item = Column>,
{
    present
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{canonical_columns, Column};

    #[test]
    fn canonical_order_matches_declaration_order() {
        let mut sorted = Column::CANONICAL_ORDER;
        sorted.sort();
        assert_eq!(sorted, Column::CANONICAL_ORDER);
    }

    #[test]
    fn from_header_is_exact() {
        assert_eq!(
            Column::from_header("Customer/Company Name"),
            Some(Column::CustomerName)
        );
        assert_eq!(Column::from_header("customer/company name"), None);
        assert_eq!(Column::from_header("Follow-Up Date "), None);
    }

    #[test]
    fn canonical_columns_sorts_and_dedupes() {
        let columns = canonical_columns([
            Column::Description,
            Column::CustomerName,
            Column::Status,
            Column::CustomerName,
        ]);
        assert_eq!(
            columns,
            vec![Column::CustomerName, Column::Status, Column::Description]
        );
    }
}
