use anyhow::Result;
use std::path::PathBuf;

use crate::config;
use crate::core::{parse_amount, BusinessType, CalculationInput};
use crate::engine::run_calculations_with;
use crate::formatting::FormattingConfig;
use crate::io::output::{create_writer, OutputFormat};

pub struct CalculateConfig {
    pub volume: String,
    pub fees: String,
    pub business_type: String,
    pub avg_ticket: Option<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
}

pub fn handle_calculate(cfg: CalculateConfig) -> Result<()> {
    let app_config = config::load_config(cfg.config.as_deref())?;

    let input = CalculationInput::new(
        BusinessType::parse(&cfg.business_type),
        parse_amount(&cfg.volume),
        parse_amount(&cfg.fees),
        cfg.avg_ticket.as_deref().map(parse_amount).unwrap_or(0.0),
    );

    let result = run_calculations_with(
        &app_config.benchmarks,
        app_config.proposal.reduction,
        input,
    );

    let formatting = if cfg.plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    };

    let mut writer = create_writer(cfg.format, cfg.output.as_deref(), formatting)?;
    writer.write_result(&result)?;

    Ok(())
}
