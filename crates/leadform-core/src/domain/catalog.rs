use crate::domain::customer::CustomerRecord;
use crate::domain::options::SENTINEL;
use crate::error::LookupFailure;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<CustomerRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CustomerRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CustomerRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|record| record.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    pub fn choices(&self) -> Vec<&str> {
        let mut choices = vec![SENTINEL];
        choices.extend(self.names());
        choices
    }

    pub fn lookup(&self, name: &str) -> Result<&CustomerRecord, LookupFailure> {
        if name == SENTINEL {
            return Err(LookupFailure::new(name));
        }
        self.records
            .iter()
            .find(|record| record.name == name)
            .ok_or_else(|| LookupFailure::new(name))
    }

    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut out = Vec::new();
        for record in &self.records {
            let name = record.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                out.push(name);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::Catalog;
    use crate::domain::{CustomerRecord, SENTINEL};

    fn customer(name: &str, city: &str) -> CustomerRecord {
        CustomerRecord {
            name: name.to_string(),
            mobile_number: "9876543210".to_string(),
            email_address: format!("{}@example.com", name.to_ascii_lowercase()),
            address: "12 High Street".to_string(),
            city: city.to_string(),
            state: "Gujarat".to_string(),
            source: "Walk-in".to_string(),
            lead_date: "2024-04-01".to_string(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            customer("Acme", "Surat"),
            customer("Borealis", "Rajkot"),
            customer("Acme", "Vadodara"),
        ])
    }

    #[test]
    fn lookup_returns_matching_record_for_every_name() {
        let catalog = catalog();
        for name in catalog.names() {
            let record = catalog.lookup(name).expect("lookup");
            assert_eq!(record.name, name);
        }
    }

    #[test]
    fn lookup_prefers_first_row_for_duplicates() {
        let catalog = catalog();
        assert_eq!(catalog.lookup("Acme").unwrap().city, "Surat");
        assert_eq!(catalog.duplicates(), vec!["Acme"]);
    }

    #[test]
    fn lookup_rejects_unknown_and_sentinel() {
        let catalog = catalog();
        assert_eq!(catalog.lookup("Nobody").unwrap_err().name, "Nobody");
        assert!(catalog.lookup(SENTINEL).is_err());
        assert!(catalog.lookup("acme").is_err());
    }

    #[test]
    fn choices_start_with_sentinel_and_are_distinct() {
        let catalog = catalog();
        assert_eq!(catalog.choices(), vec![SENTINEL, "Acme", "Borealis"]);
    }
}
