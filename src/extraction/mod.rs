//! Best-effort extraction of merchant figures from statement text.
//!
//! Processor statements are free text, so this is pattern scraping, not a
//! structured decoder: every field is optional and a miss is not an error.
//! First matching pattern per field wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::engine::calculate_effective_rate;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StatementData {
    pub total_sales: Option<f64>,
    pub total_fees: Option<f64>,
    pub transaction_count: Option<u64>,
    /// Derived when both sales and fees were found
    pub effective_rate: Option<f64>,
}

static SALES_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)total\s+(?:sales|volume|deposits)[\s:]*\$?([\d,]+\.?\d*)",
        r"(?i)gross\s+sales[\s:]*\$?([\d,]+\.?\d*)",
        r"(?i)card\s+sales[\s:]*\$?([\d,]+\.?\d*)",
    ])
});

static FEES_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)total\s+(?:fees|charges)[\s:]*\$?([\d,]+\.?\d*)",
        r"(?i)processing\s+fees[\s:]*\$?([\d,]+\.?\d*)",
        r"(?i)merchant\s+fees[\s:]*\$?([\d,]+\.?\d*)",
    ])
});

static COUNT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)total\s+transactions?[\s:]*(\d+)",
        r"(?i)number\s+of\s+transactions?[\s:]*(\d+)",
        r"(?i)transaction\s+count[\s:]*(\d+)",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("statement pattern must compile"))
        .collect()
}

/// Scrape sales, fees, and transaction count out of statement text and
/// derive the effective rate when both monetary figures were found.
pub fn extract_statement_data(text: &str) -> StatementData {
    if text.is_empty() {
        return StatementData::default();
    }

    let total_sales = first_amount(text, &SALES_PATTERNS);
    let total_fees = first_amount(text, &FEES_PATTERNS);
    let transaction_count = first_count(text, &COUNT_PATTERNS);

    let effective_rate = match (total_sales, total_fees) {
        (Some(sales), Some(fees)) if sales > 0.0 && fees > 0.0 => {
            Some(calculate_effective_rate(fees, sales))
        }
        _ => None,
    };

    StatementData {
        total_sales,
        total_fees,
        transaction_count,
        effective_rate,
    }
}

fn first_amount(text: &str, patterns: &[Regex]) -> Option<f64> {
    for regex in patterns {
        if let Some(captures) = regex.captures(text) {
            let raw = captures.get(1)?.as_str().replace(',', "");
            if let Ok(value) = raw.parse::<f64>() {
                if value.is_finite() {
                    return Some(value);
                }
            }
            // The first matching pattern decides the field, even if its
            // capture fails to parse
            return None;
        }
    }
    None
}

fn first_count(text: &str, patterns: &[Regex]) -> Option<u64> {
    for regex in patterns {
        if let Some(captures) = regex.captures(text) {
            return captures.get(1)?.as_str().parse::<u64>().ok();
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_figures_from_a_typical_statement() {
        let text = indoc! {"
            ACME PROCESSING - MONTHLY MERCHANT STATEMENT

            Total Sales: $50,000.00
            Total Transactions: 667
            Processing Fees: $1,500.00

            Thank you for your business.
        "};

        let data = extract_statement_data(text);
        assert_eq!(
            data,
            StatementData {
                total_sales: Some(50000.0),
                total_fees: Some(1500.0),
                transaction_count: Some(667),
                effective_rate: Some(3.0),
            }
        );
    }

    #[test]
    fn alternate_wording_is_recognized() {
        let text = "Gross Sales $12,345.67 ... Merchant Fees $432.10 ... Transaction Count: 89";
        let data = extract_statement_data(text);
        assert_eq!(data.total_sales, Some(12345.67));
        assert_eq!(data.total_fees, Some(432.1));
        assert_eq!(data.transaction_count, Some(89));
        assert_eq!(data.effective_rate, Some(3.5));
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert_eq!(extract_statement_data(""), StatementData::default());
    }

    #[test]
    fn unrelated_text_yields_nothing() {
        let data = extract_statement_data("Dear customer, please find attached.");
        assert_eq!(data, StatementData::default());
    }

    #[test]
    fn rate_is_not_derived_from_partial_data() {
        let data = extract_statement_data("Total Sales: $10,000");
        assert_eq!(data.total_sales, Some(10000.0));
        assert_eq!(data.total_fees, None);
        assert_eq!(data.effective_rate, None);
    }

    #[test]
    fn zero_fees_do_not_derive_a_rate() {
        let data = extract_statement_data("Total Sales: 1000 Total Fees: 0");
        assert_eq!(data.total_fees, Some(0.0));
        assert_eq!(data.effective_rate, None);
    }
}
