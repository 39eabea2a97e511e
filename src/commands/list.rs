//! mime list コマンド
//!
//! インストール済みのエンティティとリレーションを表示する。
//! 片方の問い合わせが失敗しても、もう片方は表示する。

use super::Context;
use crate::application::{list_categories, CategoryListing, LIST_CATEGORIES};
use crate::output::CommandSummary;
use crate::record::TypeRecord;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// JSON 出力用のカテゴリ 1 件分
#[derive(Debug, Serialize)]
struct CategoryOutput<'a> {
    category: &'a str,
    types: &'a [TypeRecord],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

pub fn run(args: Args, ctx: &Context) -> Result<(), String> {
    let listings = list_categories(ctx.registry.as_ref(), &LIST_CATEGORIES);

    if args.json {
        print_json(&listings)?;
    } else {
        print_tables(&listings);
    }

    let failed = listings.iter().filter(|l| l.result.is_err()).count();
    if failed > 0 {
        return Err(format!(
            "{} of {} MIME database queries failed",
            failed,
            listings.len()
        ));
    }
    Ok(())
}

fn print_json(listings: &[CategoryListing]) -> Result<(), String> {
    let output: Vec<CategoryOutput> = listings
        .iter()
        .map(|listing| match &listing.result {
            Ok(records) => CategoryOutput {
                category: listing.category,
                types: records,
                error: None,
            },
            Err(e) => CategoryOutput {
                category: listing.category,
                types: &[],
                error: Some(e.to_string()),
            },
        })
        .collect();

    serde_json::to_string_pretty(&output)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize MIME types: {}", e))
}

fn print_tables(listings: &[CategoryListing]) {
    let mut found = 0;
    let mut failed = 0;

    for listing in listings {
        match &listing.result {
            Ok(records) if records.is_empty() => {
                println!("No {} types installed", listing.category);
            }
            Ok(records) => {
                found += records.len();
                println!("{} ({}):", listing.category.bold(), records.len());
                println!("{}", build_table(records));
            }
            Err(e) => {
                failed += 1;
                eprintln!(
                    "{} Failed to list {} types: {}",
                    "✗".red(),
                    listing.category,
                    e
                );
            }
        }
    }

    println!("{}", CommandSummary::list(found, failed));
}

fn build_table(records: &[TypeRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Type", "Description", "Extensions", "Attributes"]);
    for record in records {
        table.add_row(table_row(record));
    }
    table
}

fn table_row(record: &TypeRecord) -> Vec<String> {
    let description = record
        .short_description
        .clone()
        .unwrap_or_else(|| "-".to_string());
    let extensions = match &record.extensions {
        Some(exts) if !exts.is_empty() => exts.join(", "),
        _ => "-".to_string(),
    };
    let attributes = match &record.attr_info {
        Some(attrs) if !attrs.is_empty() => attrs.len().to_string(),
        _ => "-".to_string(),
    };
    vec![
        record.mime_type.to_string(),
        description,
        extensions,
        attributes,
    ]
}

#[cfg(test)]
#[path = "list_test.rs"]
mod tests;
