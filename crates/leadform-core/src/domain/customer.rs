use crate::domain::column::Column;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(rename = "Customer/Company Name")]
    pub name: String,
    #[serde(rename = "Mobile Number")]
    pub mobile_number: String,
    #[serde(rename = "Email Address")]
    pub email_address: String,
    #[serde(rename = "Address")]
    pub address: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Source")]
    pub source: String,
    #[serde(rename = "Lead Date")]
    pub lead_date: String,
}

impl CustomerRecord {
    pub fn fields(&self) -> [(Column, &str); 8] {
        [
            (Column::CustomerName, self.name.as_str()),
            (Column::MobileNumber, self.mobile_number.as_str()),
            (Column::EmailAddress, self.email_address.as_str()),
            (Column::Address, self.address.as_str()),
            (Column::City, self.city.as_str()),
            (Column::State, self.state.as_str()),
            (Column::Source, self.source.as_str()),
            (Column::LeadDate, self.lead_date.as_str()),
        ]
    }
}
