use anyhow::Result;
use std::io::Read;
use std::path::PathBuf;

use crate::extraction::{extract_statement_data, StatementData};
use crate::formatting::{format_currency, format_percentage};
use crate::io;
use crate::io::output::OutputFormat;

pub fn handle_extract(path: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let text = match path {
        Some(path) => io::read_file(&path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let data = extract_statement_data(&text);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&data)?),
        OutputFormat::Terminal => print_report(&data),
    }

    Ok(())
}

fn print_report(data: &StatementData) {
    println!("Statement Extraction");
    println!("====================");
    println!("Total sales:       {}", optional_currency(data.total_sales));
    println!("Total fees:        {}", optional_currency(data.total_fees));
    println!(
        "Transactions:      {}",
        data.transaction_count
            .map(|c| c.to_string())
            .unwrap_or_else(|| "not found".to_string())
    );
    println!(
        "Effective rate:    {}",
        data.effective_rate
            .map(|r| format_percentage(Some(r), 2))
            .unwrap_or_else(|| "not found".to_string())
    );
}

fn optional_currency(value: Option<f64>) -> String {
    value
        .map(|v| format_currency(Some(v)))
        .unwrap_or_else(|| "not found".to_string())
}
