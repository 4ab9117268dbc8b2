// Export modules for library usage
pub mod benchmark;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod extraction;
pub mod formatting;
pub mod io;
pub mod lead;
pub mod session;

// Re-export commonly used types
pub use crate::benchmark::{
    classify, classify_with, BenchmarkCategory, BenchmarkThresholds, RatingDisplay,
};

pub use crate::core::{
    parse_amount, Benchmark, BusinessType, BusinessTypeEntry, CalculationInput, CalculationResult,
    Savings, BUSINESS_TYPES,
};

pub use crate::engine::{
    calculate_effective_rate, calculate_savings_proposal, run_calculations, run_calculations_with,
    SavingsProposal, DEFAULT_REDUCTION,
};

pub use crate::extraction::{extract_statement_data, StatementData};

pub use crate::formatting::{format_currency, format_percentage, ColorMode, FormattingConfig};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::lead::{
    HttpLeadStore, LeadContact, LeadRecord, LeadStore, SubmissionError,
};

pub use crate::session::{Session, Step};
