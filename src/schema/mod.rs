pub mod arrow;
pub mod types;

pub use arrow::Table;
pub use types::{CampaignRecord, ClientRecord, EconomicsRecord, RawRecord};
