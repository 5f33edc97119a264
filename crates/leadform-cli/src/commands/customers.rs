use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::Args;
use leadform_core::CustomerRecord;

const LEFT_COLUMN_WIDTH: usize = 44;

#[derive(Debug, Args)]
pub struct CustomersArgs {
    /// Only names containing this text (case-insensitive)
    #[arg(long)]
    pub filter: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub name: String,
}

pub fn list_customers(ctx: &Context<'_>, args: CustomersArgs) -> Result<()> {
    let needle = args
        .filter
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_lowercase);
    let names: Vec<&str> = ctx
        .store
        .catalog()
        .names()
        .into_iter()
        .filter(|name| match &needle {
            Some(needle) => name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .collect();

    if ctx.json {
        return print_json(&names);
    }
    for name in names {
        println!("{}", name);
    }
    Ok(())
}

pub fn show_customer(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    if args.name.trim().is_empty() {
        return Err(invalid_input("customer name cannot be empty"));
    }
    let record = ctx.store.catalog().lookup(&args.name)?;
    if ctx.json {
        return print_json(record);
    }
    for line in detail_lines(record) {
        println!("{}", line);
    }
    Ok(())
}

pub(crate) fn detail_lines(record: &CustomerRecord) -> Vec<String> {
    let fields = record.fields();
    let (left, right) = fields.split_at(4);
    left.iter()
        .zip(right)
        .map(|((left_column, left_value), (right_column, right_value))| {
            let left = format!("{}: {}", left_column, left_value);
            format!(
                "{:<width$}{}: {}",
                left,
                right_column,
                right_value,
                width = LEFT_COLUMN_WIDTH
            )
        })
        .collect()
}
