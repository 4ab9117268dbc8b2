use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report
    Terminal,
    /// Full result as JSON
    Json,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Terminal => Self::Terminal,
            OutputFormat::Json => Self::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ratecutter")]
#[command(about = "Merchant card-processing rate benchmark and savings calculator", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the effective rate, benchmark it, and propose savings
    Calculate {
        /// Monthly card sales volume in dollars (accepts $ and commas)
        #[arg(long)]
        volume: String,

        /// Total monthly processing fees in dollars
        #[arg(long)]
        fees: String,

        /// Business type (retail, restaurant, ecommerce, service,
        /// healthcare, professional, hospitality, other)
        #[arg(long = "business-type", default_value = "other")]
        business_type: String,

        /// Average ticket size in dollars (display only)
        #[arg(long = "avg-ticket")]
        avg_ticket: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Config file (defaults to ./ratecutter.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        plain: bool,
    },

    /// Run the calculation and submit a lead to the configured store
    Submit {
        /// Contact email (required)
        #[arg(long)]
        email: String,

        /// Contact name
        #[arg(long)]
        name: Option<String>,

        /// Contact phone number
        #[arg(long)]
        phone: Option<String>,

        /// Business name
        #[arg(long = "business-name")]
        business_name: Option<String>,

        /// Monthly card sales volume in dollars
        #[arg(long)]
        volume: String,

        /// Total monthly processing fees in dollars
        #[arg(long)]
        fees: String,

        /// Business type tag
        #[arg(long = "business-type", default_value = "other")]
        business_type: String,

        /// Average ticket size in dollars
        #[arg(long = "avg-ticket")]
        avg_ticket: Option<String>,

        /// Lead store endpoint URL (overrides config)
        #[arg(long = "store-url", env = "RATECUTTER_STORE_URL")]
        store_url: Option<String>,

        /// Config file (defaults to ./ratecutter.toml when present)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Scrape volume and fee figures from merchant statement text
    Extract {
        /// Statement text file (reads stdin when omitted)
        path: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Create a default ratecutter.toml configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
}
