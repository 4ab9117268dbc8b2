use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::config;
use crate::core::{parse_amount, BusinessType, CalculationInput};
use crate::engine::run_calculations_with;
use crate::lead::{HttpLeadStore, LeadContact, LeadRecord, LeadStore};
use crate::session::Session;

pub struct SubmitConfig {
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub business_name: Option<String>,
    pub volume: String,
    pub fees: String,
    pub business_type: String,
    pub avg_ticket: Option<String>,
    pub store_url: Option<String>,
    pub config: Option<PathBuf>,
}

pub fn handle_submit(cfg: SubmitConfig) -> Result<()> {
    if cfg.email.trim().is_empty() {
        anyhow::bail!("email is required to submit a lead");
    }

    let app_config = config::load_config(cfg.config.as_deref())?;

    let input = CalculationInput::new(
        BusinessType::parse(&cfg.business_type),
        parse_amount(&cfg.volume),
        parse_amount(&cfg.fees),
        cfg.avg_ticket.as_deref().map(parse_amount).unwrap_or(0.0),
    );

    // Thread the input -> results -> capture flow; a capture snapshot only
    // exists once a calculation has been run
    let session = Session::new()
        .submit_input(run_calculations_with(
            &app_config.benchmarks,
            app_config.proposal.reduction,
            input,
        ))
        .begin_capture();
    let result = session
        .capture_snapshot()
        .context("no calculation available for capture")?;

    let contact = LeadContact {
        email: cfg.email.trim().to_string(),
        name: cfg.name,
        phone: cfg.phone,
        business_name: cfg.business_name,
    };
    let record = LeadRecord::from_calculation(contact, result);

    let url = cfg
        .store_url
        .or_else(|| app_config.lead_store.url.clone())
        .context(
            "no lead store configured; pass --store-url, set RATECUTTER_STORE_URL, \
             or add [lead_store] url to ratecutter.toml",
        )?;

    let mut store = HttpLeadStore::new(
        &url,
        Duration::from_secs(app_config.lead_store.timeout_secs),
    )?;
    if let Some(key) = &app_config.lead_store.api_key {
        store = store.with_api_key(key.as_str());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match runtime.block_on(store.insert(&record)) {
        Ok(()) => {
            println!(
                "Proposal saved. We'll email your personalized savings proposal to {}.",
                record.email
            );
            Ok(())
        }
        Err(e) => {
            // Uniform failure for the user; the cause goes to the log only
            log::warn!("lead store insert failed: {:#}", e.0);
            anyhow::bail!("Submission failed. Please try again.")
        }
    }
}
