use crate::domain::{join_labels, Column, CustomerRecord, LeadEntry, LeadStatus, OutputRecord};
use crate::time::format_ledger_date;

pub fn compose(customer: &CustomerRecord, entry: &LeadEntry) -> OutputRecord {
    let mut record: OutputRecord = customer
        .fields()
        .into_iter()
        .map(|(column, value)| (column, value.to_string()))
        .collect();

    record.insert(
        Column::VisitDate,
        entry.visit_date.map(format_ledger_date).unwrap_or_default(),
    );
    record.insert(Column::LeadType, entry.lead_type.as_str());
    record.insert(
        Column::BrandType,
        join_labels(entry.brands.iter().map(|brand| brand.as_str())),
    );
    record.insert(Column::StoreType, entry.store_type.as_str());
    record.insert(Column::Status, entry.status.kind().as_str());
    record.insert(Column::Description, entry.description.clone());

    match &entry.status {
        LeadStatus::FollowUp { follow_up_date } => {
            record.insert(Column::FollowUpDate, format_ledger_date(*follow_up_date));
        }
        LeadStatus::Converted {
            products,
            next_connect_date,
        } => {
            record.insert(
                Column::DealingProduct,
                join_labels(products.iter().map(|product| product.as_str())),
            );
            record.insert(Column::NextConnectDate, format_ledger_date(*next_connect_date));
        }
        LeadStatus::Decline => {}
    }

    record
}

#[cfg(test)]
mod tests {
    use super::compose;
    use crate::domain::{
        Brand, Column, CustomerRecord, LeadEntry, LeadStatus, LeadType, Product, StoreType,
    };
    use chrono::NaiveDate;
    use std::collections::BTreeSet;

    fn customer() -> CustomerRecord {
        CustomerRecord {
            name: "Acme Jewellers".to_string(),
            mobile_number: "9876543210".to_string(),
            email_address: "acme@example.com".to_string(),
            address: "12 High Street".to_string(),
            city: "Surat".to_string(),
            state: "Gujarat".to_string(),
            source: "Referral".to_string(),
            lead_date: "15-04-2024".to_string(),
        }
    }

    fn entry(status: LeadStatus) -> LeadEntry {
        LeadEntry {
            visit_date: NaiveDate::from_ymd_opt(2024, 4, 20),
            brands: BTreeSet::from([Brand::LagacyIce, Brand::BritishJewel]),
            lead_type: LeadType::Hot,
            store_type: StoreType::HyperMarket,
            status,
            description: "Asked for catalogue".to_string(),
        }
    }

    #[test]
    fn converted_record_carries_products_and_next_connect_date() {
        let record = compose(
            &customer(),
            &entry(LeadStatus::Converted {
                products: BTreeSet::from([Product::Ring]),
                next_connect_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            }),
        );
        assert_eq!(record.get(Column::DealingProduct), Some("Ring"));
        assert_eq!(record.get(Column::NextConnectDate), Some("01-05-2024"));
        assert!(!record.contains(Column::FollowUpDate));
        assert_eq!(record.get(Column::Status), Some("Converted"));
    }

    #[test]
    fn follow_up_record_omits_conversion_columns() {
        let record = compose(
            &customer(),
            &entry(LeadStatus::FollowUp {
                follow_up_date: NaiveDate::from_ymd_opt(2024, 6, 9).unwrap(),
            }),
        );
        assert_eq!(record.get(Column::FollowUpDate), Some("09-06-2024"));
        assert!(!record.contains(Column::DealingProduct));
        assert!(!record.contains(Column::NextConnectDate));
    }

    #[test]
    fn brands_join_in_checkbox_order_and_customer_fields_are_verbatim() {
        let record = compose(&customer(), &entry(LeadStatus::Decline));
        assert_eq!(
            record.get(Column::BrandType),
            Some("British Jewel, Lagacy Ice")
        );
        assert_eq!(record.get(Column::LeadDate), Some("15-04-2024"));
        assert_eq!(record.get(Column::VisitDate), Some("20-04-2024"));
        let columns: Vec<Column> = record.columns().collect();
        assert_eq!(
            columns,
            vec![
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
                Column::Description,
            ]
        );
    }

    #[test]
    fn unset_visit_date_becomes_empty_text() {
        let mut lead = entry(LeadStatus::Decline);
        lead.visit_date = None;
        let record = compose(&customer(), &lead);
        assert_eq!(record.get(Column::VisitDate), Some(""));
    }
}
