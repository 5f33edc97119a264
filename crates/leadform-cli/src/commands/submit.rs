use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use clap::Args;
use leadform_core::time::parse_optional_date;
use leadform_core::{
    parse_choice, Brand, Column, FormState, OutputRecord, Product, StatusKind, SENTINEL,
};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{debug, warn};

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Customer/Company Name exactly as in the catalog
    pub customer: String,
    /// YYYY-MM-DD, DD-MM-YYYY or "today"; left empty when omitted
    #[arg(long)]
    pub visit_date: Option<String>,
    #[arg(long = "brand", value_name = "BRAND", value_delimiter = ',')]
    pub brands: Vec<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub lead_type: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub store_type: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub status: Option<String>,
    #[arg(long)]
    pub follow_up_date: Option<String>,
    #[arg(long = "product", value_name = "PRODUCT", value_delimiter = ',')]
    pub products: Vec<String>,
    #[arg(long)]
    pub next_connect_date: Option<String>,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Debug, Serialize)]
struct SubmitReport<'a> {
    ledger: String,
    rows: usize,
    record: &'a OutputRecord,
}

pub fn submit_lead(ctx: &Context<'_>, args: SubmitArgs) -> Result<()> {
    let form = build_form(args)?;
    let record = form.submit(ctx.store.catalog())?;

    let ledger = ctx.store.ledger();
    let sheet = ledger
        .append(record.clone())
        .with_context(|| format!("append to ledger {}", ledger.path().display()))?;
    debug!(
        customer = record.get(Column::CustomerName).unwrap_or_default(),
        rows = sheet.len(),
        "lead appended"
    );

    if ctx.json {
        return print_json(&SubmitReport {
            ledger: ledger.path().display().to_string(),
            rows: sheet.len(),
            record: &record,
        });
    }
    println!("Data saved successfully to {}", ledger.path().display());
    for (column, value) in record.iter() {
        println!("  {}: {}", column, value);
    }
    Ok(())
}

fn build_form(args: SubmitArgs) -> Result<FormState> {
    let mut form = FormState::default();
    form.select(&args.customer);

    let draft = &mut form.draft;
    draft.visit_date = parse_date_arg("--visit-date", args.visit_date.as_deref())?;
    for raw in args.brands.iter().filter(|raw| !raw.trim().is_empty()) {
        draft.brands.insert(raw.parse::<Brand>()?);
    }
    draft.lead_type = parse_choice(args.lead_type.as_deref().unwrap_or(SENTINEL))?;
    draft.store_type = parse_choice(args.store_type.as_deref().unwrap_or(SENTINEL))?;
    draft.status = parse_choice(args.status.as_deref().unwrap_or(SENTINEL))?;

    let follow_up_date = parse_date_arg("--follow-up-date", args.follow_up_date.as_deref())?;
    let next_connect_date =
        parse_date_arg("--next-connect-date", args.next_connect_date.as_deref())?;
    let mut products = BTreeSet::new();
    for raw in args.products.iter().filter(|raw| !raw.trim().is_empty()) {
        products.insert(raw.parse::<Product>()?);
    }

    // Fields of the inactive status branch are hidden in the form, so drop them.
    let conversion_given = next_connect_date.is_some() || !products.is_empty();
    match draft.status {
        Some(StatusKind::FollowUp) => {
            draft.follow_up_date = follow_up_date;
            if conversion_given {
                warn!("conversion fields ignored for Follow-Up status");
            }
        }
        Some(StatusKind::Converted) => {
            draft.products = products;
            draft.next_connect_date = next_connect_date;
            if follow_up_date.is_some() {
                warn!("follow-up date ignored for Converted status");
            }
        }
        Some(StatusKind::Decline) | None => {
            if follow_up_date.is_some() || conversion_given {
                warn!("status-specific fields ignored for the selected status");
            }
        }
    }

    draft.description = args.description;
    Ok(form)
}

fn parse_date_arg(flag: &str, raw: Option<&str>) -> Result<Option<NaiveDate>> {
    match raw {
        Some(value) => parse_optional_date(value).with_context(|| format!("parse {}", flag)),
        None => Ok(None),
    }
}
