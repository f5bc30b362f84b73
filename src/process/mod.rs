// src/process/mod.rs
pub mod utils;

use anyhow::Result;
use tracing::debug;

use crate::error::CleanError;
use crate::schema::{CampaignRecord, ClientRecord, EconomicsRecord, RawRecord};
use utils::{binary_flag, clean_education, clean_job, contact_date, is_yes, month_number, parse_day};

/// Client demographics, one row per input row, in input order.
pub fn normalize_clients(records: &[RawRecord]) -> Vec<ClientRecord> {
    let clients: Vec<ClientRecord> = records
        .iter()
        .map(|r| ClientRecord {
            client_id: r.client_id,
            age: r.age,
            job: r.job.as_deref().map(clean_job),
            marital: r.marital.clone(),
            education: r.education.as_deref().and_then(clean_education),
            credit_default: is_yes(r.credit_default.as_deref()),
            mortgage: is_yes(r.mortgage.as_deref()),
        })
        .collect();
    debug!(rows = clients.len(), "normalized clients");
    clients
}

/// Campaign facts. Fails on the first row whose month or day cannot be
/// turned into a calendar position.
pub fn normalize_campaigns(records: &[RawRecord]) -> Result<Vec<CampaignRecord>> {
    let campaigns = records
        .iter()
        .map(normalize_campaign)
        .collect::<Result<Vec<_>, CleanError>>()?;
    debug!(rows = campaigns.len(), "normalized campaigns");
    Ok(campaigns)
}

fn normalize_campaign(r: &RawRecord) -> Result<CampaignRecord, CleanError> {
    let month_raw = r.month.as_deref().unwrap_or_default();
    let month = month_number(month_raw).ok_or_else(|| CleanError::UnknownMonth {
        client_id: r.client_id,
        month: month_raw.to_string(),
    })?;

    let day_raw = r.day.as_deref().unwrap_or_default();
    let day = parse_day(day_raw).ok_or_else(|| CleanError::InvalidDay {
        client_id: r.client_id,
        day: day_raw.to_string(),
    })?;

    Ok(CampaignRecord {
        client_id: r.client_id,
        number_contacts: r.number_contacts,
        contact_duration: r.contact_duration,
        previous_campaign_contacts: r.previous_campaign_contacts,
        previous_outcome: binary_flag(r.previous_outcome.as_deref(), "success"),
        campaign_outcome: is_yes(r.campaign_outcome.as_deref()),
        last_contact_date: contact_date(month, day),
    })
}

/// Economic indicators, passed through untouched.
pub fn normalize_economics(records: &[RawRecord]) -> Vec<EconomicsRecord> {
    records
        .iter()
        .map(|r| EconomicsRecord {
            client_id: r.client_id,
            cons_price_idx: r.cons_price_idx,
            euribor_three_months: r.euribor_three_months,
        })
        .collect()
}
