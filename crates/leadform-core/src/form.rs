use crate::domain::{Catalog, CustomerRecord, LeadDraft, OutputRecord, StatusKind, SENTINEL};
use crate::error::{FormError, LookupFailure};
use crate::rules::{compose, validate};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub selection: Option<String>,
    pub draft: LeadDraft,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormView<'a> {
    Unselected,
    Missing(LookupFailure),
    Entry(EntryView<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView<'a> {
    pub customer: &'a CustomerRecord,
    pub conditional: ConditionalFields,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConditionalFields {
    pub follow_up_date: bool,
    pub products: bool,
    pub next_connect_date: bool,
}

impl ConditionalFields {
    pub fn for_status(status: Option<StatusKind>) -> Self {
        match status {
            Some(StatusKind::FollowUp) => Self {
                follow_up_date: true,
                ..Self::default()
            },
            Some(StatusKind::Converted) => Self {
                products: true,
                next_connect_date: true,
                ..Self::default()
            },
            Some(StatusKind::Decline) | None => Self::default(),
        }
    }
}

impl FormState {
    pub fn new(visit_date: Option<NaiveDate>) -> Self {
        Self {
            selection: None,
            draft: LeadDraft {
                visit_date,
                ..LeadDraft::default()
            },
        }
    }

    pub fn select(&mut self, choice: &str) {
        self.selection = if choice == SENTINEL {
            None
        } else {
            Some(choice.to_string())
        };
    }

    pub fn render<'a>(&self, catalog: &'a Catalog) -> FormView<'a> {
        let Some(name) = self.selection.as_deref() else {
            return FormView::Unselected;
        };
        match catalog.lookup(name) {
            Ok(customer) => FormView::Entry(EntryView {
                customer,
                conditional: ConditionalFields::for_status(self.draft.status),
            }),
            Err(err) => FormView::Missing(err),
        }
    }

    pub fn submit(&self, catalog: &Catalog) -> Result<OutputRecord, FormError> {
        let name = self.selection.as_deref().unwrap_or(SENTINEL);
        let customer = catalog.lookup(name)?;
        let entry = validate(&self.draft)?;
        Ok(compose(customer, &entry))
    }

    pub fn reset_entry(&mut self, visit_date: Option<NaiveDate>) {
        self.draft = LeadDraft {
            visit_date,
            ..LeadDraft::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::{ConditionalFields, FormState, FormView};
    use crate::domain::{
        Brand, Catalog, Column, CustomerRecord, LeadType, Product, StatusKind, StoreType,
        SENTINEL,
    };
    use crate::error::{FormError, ValidationFailure};
    use chrono::NaiveDate;

    fn catalog() -> Catalog {
        Catalog::new(vec![CustomerRecord {
            name: "Acme".to_string(),
            mobile_number: "9876543210".to_string(),
            email_address: "acme@example.com".to_string(),
            address: "12 High Street".to_string(),
            city: "Surat".to_string(),
            state: "Gujarat".to_string(),
            source: "Walk-in".to_string(),
            lead_date: "01-04-2024".to_string(),
        }])
    }

    #[test]
    fn render_without_selection_shows_nothing() {
        let catalog = catalog();
        let mut state = FormState::default();
        assert_eq!(state.render(&catalog), FormView::Unselected);
        state.select("Acme");
        state.select(SENTINEL);
        assert_eq!(state.render(&catalog), FormView::Unselected);
    }

    #[test]
    fn render_missing_customer_suppresses_entry_form() {
        let catalog = catalog();
        let mut state = FormState::default();
        state.select("Ghost");
        match state.render(&catalog) {
            FormView::Missing(err) => assert_eq!(err.name, "Ghost"),
            other => panic!("unexpected view: {other:?}"),
        }
    }

    #[test]
    fn render_exposes_status_branch_fields() {
        let catalog = catalog();
        let mut state = FormState::default();
        state.select("Acme");
        state.draft.status = Some(StatusKind::Converted);
        match state.render(&catalog) {
            FormView::Entry(view) => {
                assert_eq!(view.customer.city, "Surat");
                assert!(view.conditional.products);
                assert!(view.conditional.next_connect_date);
                assert!(!view.conditional.follow_up_date);
            }
            other => panic!("unexpected view: {other:?}"),
        }
        assert_eq!(
            ConditionalFields::for_status(Some(StatusKind::Decline)),
            ConditionalFields::default()
        );
    }

    #[test]
    fn submit_without_selection_is_a_lookup_failure() {
        let state = FormState::default();
        assert!(matches!(
            state.submit(&catalog()),
            Err(FormError::Lookup(_))
        ));
    }

    #[test]
    fn submit_surfaces_first_validation_failure() {
        let mut state = FormState::default();
        state.select("Acme");
        state.draft.lead_type = Some(LeadType::Cold);
        assert_eq!(
            state.submit(&catalog()),
            Err(FormError::Validation(ValidationFailure::MissingBrand))
        );
    }

    #[test]
    fn submit_composes_record_and_reset_keeps_customer() {
        let catalog = catalog();
        let visit = NaiveDate::from_ymd_opt(2024, 4, 20);
        let mut state = FormState::new(visit);
        state.select("Acme");
        state.draft.lead_type = Some(LeadType::Hot);
        state.draft.toggle_brand(Brand::BritishJewel);
        state.draft.store_type = Some(StoreType::SuperMarket);
        state.draft.status = Some(StatusKind::Converted);
        state.draft.toggle_product(Product::Ring);
        state.draft.next_connect_date = NaiveDate::from_ymd_opt(2024, 5, 1);

        let record = state.submit(&catalog).expect("submit");
        assert_eq!(record.get(Column::CustomerName), Some("Acme"));
        assert_eq!(record.get(Column::VisitDate), Some("20-04-2024"));

        state.reset_entry(visit);
        assert_eq!(state.selection.as_deref(), Some("Acme"));
        assert!(state.draft.brands.is_empty());
        assert_eq!(state.draft.visit_date, visit);
    }
}
