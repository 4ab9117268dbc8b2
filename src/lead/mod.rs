//! Lead submission adapter.
//!
//! Takes a completed calculation plus contact details and forwards one
//! record to an external store. At most one attempt per user action; any
//! transport or store-side failure collapses into a single uniform error
//! and the caller decides whether to prompt for a resubmit.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::core::{BusinessType, CalculationResult};

/// User-entered contact fields. Email is the only required one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LeadContact {
    pub email: String,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub business_name: Option<String>,
}

impl LeadContact {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }
}

/// Wire record written to the lead store: contact fields plus a flat
/// snapshot of the calculation that prompted the capture.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LeadRecord {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    pub monthly_volume: f64,
    pub monthly_fees: f64,
    pub effective_rate: f64,
    pub proposed_rate: f64,
    pub monthly_savings: f64,
    pub annual_savings: f64,
    pub business_type: BusinessType,
}

impl LeadRecord {
    /// Snapshot a calculation into a lead record. The calculation is taken
    /// as-is; its correctness is not re-validated at submission time.
    pub fn from_calculation(contact: LeadContact, result: &CalculationResult) -> Self {
        Self {
            email: contact.email,
            name: contact.name,
            phone: contact.phone,
            business_name: contact.business_name,
            monthly_volume: result.input.monthly_volume,
            monthly_fees: result.input.monthly_fees,
            effective_rate: result.effective_rate,
            proposed_rate: result.proposed_rate,
            monthly_savings: result.savings.monthly,
            annual_savings: result.savings.annual,
            business_type: result.input.business_type,
        }
    }
}

/// The single failure kind the adapter reports. The underlying cause is
/// kept for the log, never for the user-facing message.
#[derive(Debug, Error)]
#[error("lead submission failed")]
pub struct SubmissionError(pub anyhow::Error);

/// An insert-capable lead store.
#[async_trait]
pub trait LeadStore {
    async fn insert(&self, lead: &LeadRecord) -> Result<(), SubmissionError>;
}

/// Store client that POSTs one JSON record to a configured endpoint.
pub struct HttpLeadStore {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl HttpLeadStore {
    pub fn new(url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
            api_key: None,
        })
    }

    /// Attach a bearer token sent with each insert.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    async fn post_once(&self, lead: &LeadRecord) -> anyhow::Result<()> {
        let mut request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .json(lead);

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "lead store returned status {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            );
        }

        log::debug!("lead for {} accepted by store", lead.email);

        Ok(())
    }
}

#[async_trait]
impl LeadStore for HttpLeadStore {
    // One attempt only. A failed submission is resubmitted by the user,
    // not retried here.
    async fn insert(&self, lead: &LeadRecord) -> Result<(), SubmissionError> {
        self.post_once(lead).await.map_err(SubmissionError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BusinessType, CalculationInput};
    use crate::engine::run_calculations;
    use pretty_assertions::assert_eq;

    fn sample_result() -> CalculationResult {
        run_calculations(CalculationInput::new(
            BusinessType::Retail,
            50000.0,
            1500.0,
            75.0,
        ))
    }

    #[test]
    fn record_snapshots_the_calculation() {
        let contact = LeadContact {
            email: "owner@example.com".to_string(),
            name: Some("Sam Doe".to_string()),
            phone: None,
            business_name: Some("Doe Goods".to_string()),
        };
        let record = LeadRecord::from_calculation(contact, &sample_result());

        assert_eq!(record.email, "owner@example.com");
        assert_eq!(record.monthly_volume, 50000.0);
        assert_eq!(record.monthly_fees, 1500.0);
        assert_eq!(record.effective_rate, 3.0);
        assert_eq!(record.proposed_rate, 2.5);
        assert_eq!(record.monthly_savings, 250.0);
        assert_eq!(record.annual_savings, 3000.0);
        assert_eq!(record.business_type, BusinessType::Retail);
    }

    #[test]
    fn record_serializes_with_the_store_field_names() {
        let record =
            LeadRecord::from_calculation(LeadContact::new("owner@example.com"), &sample_result());
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "annual_savings",
                "business_type",
                "effective_rate",
                "email",
                "monthly_fees",
                "monthly_savings",
                "monthly_volume",
                "proposed_rate",
            ]
        );
        assert_eq!(object["business_type"], "retail");
        assert_eq!(object["effective_rate"], 3.0);
    }

    #[test]
    fn optional_contact_fields_serialize_when_present() {
        let contact = LeadContact {
            email: "owner@example.com".to_string(),
            name: Some("Sam".to_string()),
            phone: Some("555-0100".to_string()),
            business_name: None,
        };
        let record = LeadRecord::from_calculation(contact, &sample_result());
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["name"], "Sam");
        assert_eq!(value["phone"], "555-0100");
        assert!(value.get("business_name").is_none());
    }

    #[test]
    fn submission_error_has_a_uniform_message() {
        let err = SubmissionError(anyhow::anyhow!("connection refused"));
        assert_eq!(err.to_string(), "lead submission failed");
    }
}
