// src/schema/types.rs

use serde::{Deserialize, Serialize};

/// One row of the concatenated input, as read from a CSV entry.
///
/// Only the columns the cleaner uses are named here; any other column in the
/// source files is ignored. Categorical fields are optional so that an empty
/// cell reaches the normalizers as a missing value rather than a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawRecord {
    pub client_id: i64,
    pub age: i64,
    pub job: Option<String>,
    pub marital: Option<String>,
    pub education: Option<String>,
    pub credit_default: Option<String>,
    pub mortgage: Option<String>,
    pub number_contacts: i64,
    pub contact_duration: i64,
    pub previous_campaign_contacts: i64,
    pub previous_outcome: Option<String>,
    pub campaign_outcome: Option<String>,
    /// Kept as text; coerced to an integer by the campaign normalizer.
    pub day: Option<String>,
    pub month: Option<String>,
    pub cons_price_idx: Option<f64>,
    pub euribor_three_months: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub client_id: i64,
    pub age: i64,
    pub job: Option<String>,
    pub marital: Option<String>,
    /// `None` where the source said "unknown".
    pub education: Option<String>,
    pub credit_default: u8,
    pub mortgage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignRecord {
    pub client_id: i64,
    pub number_contacts: i64,
    pub contact_duration: i64,
    pub previous_campaign_contacts: i64,
    pub previous_outcome: u8,
    pub campaign_outcome: u8,
    /// `2022-MM-DD`. The source carries no year.
    pub last_contact_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EconomicsRecord {
    pub client_id: i64,
    pub cons_price_idx: Option<f64>,
    pub euribor_three_months: Option<f64>,
}
