use crate::domain::{LeadDraft, LeadEntry, LeadStatus, StatusKind};
use crate::error::ValidationFailure;

pub fn validate(draft: &LeadDraft) -> Result<LeadEntry, ValidationFailure> {
    let lead_type = draft.lead_type.ok_or(ValidationFailure::MissingLeadType)?;
    if draft.brands.is_empty() {
        return Err(ValidationFailure::MissingBrand);
    }
    let store_type = draft.store_type.ok_or(ValidationFailure::MissingStoreType)?;
    let status = match draft.status.ok_or(ValidationFailure::MissingStatus)? {
        StatusKind::FollowUp => LeadStatus::FollowUp {
            follow_up_date: draft
                .follow_up_date
                .ok_or(ValidationFailure::MissingFollowUpDate)?,
        },
        StatusKind::Converted => match draft.next_connect_date {
            Some(next_connect_date) if !draft.products.is_empty() => LeadStatus::Converted {
                products: draft.products.clone(),
                next_connect_date,
            },
            _ => return Err(ValidationFailure::IncompleteConversion),
        },
        StatusKind::Decline => LeadStatus::Decline,
    };

    Ok(LeadEntry {
        visit_date: draft.visit_date,
        brands: draft.brands.clone(),
        lead_type,
        store_type,
        status,
        description: draft.description.clone(),
    })
}
