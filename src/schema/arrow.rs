// src/schema/arrow.rs

use anyhow::{Context, Result};
use arrow::{
    array::{ArrayRef, Float64Array, Int64Array, StringArray, UInt8Array},
    datatypes::{DataType, Field, Schema as ArrowSchema},
    record_batch::RecordBatch,
};
use std::sync::Arc;

use super::types::{CampaignRecord, ClientRecord, EconomicsRecord};

/// A derived output table.
/// - Names the file it is written to.
/// - Defines the Arrow schema, in output column order.
/// - Converts a slice of rows into column arrays matching that schema.
pub trait Table: Sized {
    /// File name inside the output directory
    const FILE_NAME: &'static str;
    /// Arrow schema for this table
    fn schema() -> ArrowSchema;
    /// Column arrays for `rows`, one per schema field
    fn to_arrays(rows: &[Self]) -> Vec<ArrayRef>;

    /// Materialize `rows` as a single record batch.
    fn to_batch(rows: &[Self]) -> Result<RecordBatch> {
        RecordBatch::try_new(Arc::new(Self::schema()), Self::to_arrays(rows))
            .with_context(|| format!("building record batch for {}", Self::FILE_NAME))
    }

    /// Column names in output order.
    fn column_names() -> Vec<String> {
        Self::schema()
            .fields()
            .iter()
            .map(|f| f.name().to_string())
            .collect()
    }
}

fn int64<T>(rows: &[T], f: impl Fn(&T) -> i64) -> ArrayRef {
    Arc::new(Int64Array::from_iter_values(rows.iter().map(f)))
}

fn flag<T>(rows: &[T], f: impl Fn(&T) -> u8) -> ArrayRef {
    Arc::new(UInt8Array::from_iter_values(rows.iter().map(f)))
}

fn utf8<'a, T>(rows: &'a [T], f: impl Fn(&'a T) -> Option<&'a str>) -> ArrayRef {
    Arc::new(rows.iter().map(f).collect::<StringArray>())
}

fn float64<T>(rows: &[T], f: impl Fn(&T) -> Option<f64>) -> ArrayRef {
    Arc::new(rows.iter().map(f).collect::<Float64Array>())
}

impl Table for ClientRecord {
    const FILE_NAME: &'static str = "client.csv";

    fn schema() -> ArrowSchema {
        ArrowSchema::new(vec![
            Field::new("client_id", DataType::Int64, false),
            Field::new("age", DataType::Int64, false),
            Field::new("job", DataType::Utf8, true),
            Field::new("marital", DataType::Utf8, true),
            Field::new("education", DataType::Utf8, true),
            Field::new("credit_default", DataType::UInt8, false),
            Field::new("mortgage", DataType::UInt8, false),
        ])
    }

    fn to_arrays(rows: &[Self]) -> Vec<ArrayRef> {
        vec![
            int64(rows, |r| r.client_id),
            int64(rows, |r| r.age),
            utf8(rows, |r| r.job.as_deref()),
            utf8(rows, |r| r.marital.as_deref()),
            utf8(rows, |r| r.education.as_deref()),
            flag(rows, |r| r.credit_default),
            flag(rows, |r| r.mortgage),
        ]
    }
}

impl Table for CampaignRecord {
    const FILE_NAME: &'static str = "campaign.csv";

    fn schema() -> ArrowSchema {
        ArrowSchema::new(vec![
            Field::new("client_id", DataType::Int64, false),
            Field::new("number_contacts", DataType::Int64, false),
            Field::new("contact_duration", DataType::Int64, false),
            Field::new("previous_campaign_contacts", DataType::Int64, false),
            Field::new("previous_outcome", DataType::UInt8, false),
            Field::new("campaign_outcome", DataType::UInt8, false),
            Field::new("last_contact_date", DataType::Utf8, false),
        ])
    }

    fn to_arrays(rows: &[Self]) -> Vec<ArrayRef> {
        vec![
            int64(rows, |r| r.client_id),
            int64(rows, |r| r.number_contacts),
            int64(rows, |r| r.contact_duration),
            int64(rows, |r| r.previous_campaign_contacts),
            flag(rows, |r| r.previous_outcome),
            flag(rows, |r| r.campaign_outcome),
            utf8(rows, |r| Some(r.last_contact_date.as_str())),
        ]
    }
}

impl Table for EconomicsRecord {
    const FILE_NAME: &'static str = "economics.csv";

    fn schema() -> ArrowSchema {
        ArrowSchema::new(vec![
            Field::new("client_id", DataType::Int64, false),
            Field::new("cons_price_idx", DataType::Float64, true),
            Field::new("euribor_three_months", DataType::Float64, true),
        ])
    }

    fn to_arrays(rows: &[Self]) -> Vec<ArrayRef> {
        vec![
            int64(rows, |r| r.client_id),
            float64(rows, |r| r.cons_price_idx),
            float64(rows, |r| r.euribor_three_months),
        ]
    }
}
