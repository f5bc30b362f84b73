pub mod error;
pub mod load;
pub mod process;
pub mod schema;
pub mod write;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

pub use error::CleanError;
pub use schema::{CampaignRecord, ClientRecord, EconomicsRecord, RawRecord, Table};

pub const DEFAULT_INPUT_DIR: &str = "files/input/";
pub const DEFAULT_OUTPUT_DIR: &str = "files/output/";

/// Where the cleaner reads archives from and writes tables to.
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

#[derive(Debug)]
pub struct RunSummary {
    pub archives: usize,
    pub rows: usize,
    pub written: Vec<PathBuf>,
}

/// Load every archive under `input_dir`, derive the client, campaign and
/// economics tables, and write them to `output_dir`.
///
/// All three tables are built before anything touches the output directory,
/// so a bad row never leaves partial output behind.
pub fn run(config: &CleanerConfig) -> Result<RunSummary> {
    let loaded = load::load_input_dir(&config.input_dir)?;
    info!(
        archives = loaded.archives,
        rows = loaded.records.len(),
        "loaded record set"
    );

    let clients = process::normalize_clients(&loaded.records);
    let campaigns = process::normalize_campaigns(&loaded.records)?;
    let economics = process::normalize_economics(&loaded.records);

    let written = write::write_tables(&config.output_dir, &clients, &campaigns, &economics)?;

    Ok(RunSummary {
        archives: loaded.archives,
        rows: loaded.records.len(),
        written,
    })
}

/// Convenience wrapper over [`run`] with explicit directories.
pub fn clean_campaign_data(input_dir: &Path, output_dir: &Path) -> Result<RunSummary> {
    run(&CleanerConfig {
        input_dir: input_dir.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load::tests::{csv_rows, init_test_logging, write_zip, HEADER};
    use csv::ReaderBuilder;
    use serde::de::DeserializeOwned;
    use std::fs;
    use tempfile::TempDir;

    fn read_back<T: DeserializeOwned>(path: &Path) -> Result<(Vec<String>, Vec<T>)> {
        let mut rdr = ReaderBuilder::new().from_path(path)?;
        let headers = rdr.headers()?.iter().map(String::from).collect();
        let rows = rdr.deserialize().collect::<Result<Vec<T>, _>>()?;
        Ok((headers, rows))
    }

    fn config(dir: &TempDir) -> CleanerConfig {
        CleanerConfig {
            input_dir: dir.path().join("files/input"),
            output_dir: dir.path().join("files/output"),
        }
    }

    #[test]
    fn end_to_end_round_trip() -> Result<()> {
        init_test_logging();
        let dir = TempDir::new()?;
        let cfg = config(&dir);
        fs::create_dir_all(&cfg.input_dir)?;

        let mixed = format!(
            "{}\n\
             100,33,admin.,single,unknown,yes,no,dec,1,87,3,1,success,94.465,0.884,yes\n\
             101,58,self-employed,married,university.degree,unknown,yes,aug,28,502,2,0,failure,93.2,4.963,no\n",
            HEADER
        );
        write_zip(&cfg.input_dir.join("bank-1.zip"), &[("bank-1.csv", &csv_rows(&[1, 2]))])?;
        write_zip(&cfg.input_dir.join("bank-2.zip"), &[("bank-2.csv", &mixed)])?;

        let summary = run(&cfg)?;
        assert_eq!(summary.archives, 2);
        assert_eq!(summary.rows, 4);
        assert_eq!(summary.written.len(), 3);

        let (headers, clients) = read_back::<ClientRecord>(&cfg.output_dir.join("client.csv"))?;
        assert_eq!(headers, ClientRecord::column_names());
        let (headers, campaigns) =
            read_back::<CampaignRecord>(&cfg.output_dir.join("campaign.csv"))?;
        assert_eq!(headers, CampaignRecord::column_names());
        let (headers, economics) =
            read_back::<EconomicsRecord>(&cfg.output_dir.join("economics.csv"))?;
        assert_eq!(headers, EconomicsRecord::column_names());

        for table_ids in [
            clients.iter().map(|r| r.client_id).collect::<Vec<_>>(),
            campaigns.iter().map(|r| r.client_id).collect(),
            economics.iter().map(|r| r.client_id).collect(),
        ] {
            assert_eq!(table_ids, vec![1, 2, 100, 101]);
        }

        assert_eq!(clients[0].job.as_deref(), Some("blue_collar"));
        assert_eq!(clients[0].education.as_deref(), Some("basic_4y"));
        assert_eq!((clients[0].credit_default, clients[0].mortgage), (0, 1));
        assert_eq!(clients[2].job.as_deref(), Some("admin"));
        assert_eq!(clients[2].education, None);
        assert_eq!((clients[2].credit_default, clients[2].mortgage), (1, 0));
        assert_eq!(clients[3].job.as_deref(), Some("self_employed"));
        assert_eq!(clients[3].credit_default, 0);
        assert!(clients
            .iter()
            .all(|c| c.education.as_deref() != Some("unknown")));

        assert_eq!(campaigns[0].last_contact_date, "2022-05-07");
        assert_eq!(campaigns[2].last_contact_date, "2022-12-01");
        assert_eq!(campaigns[2].previous_outcome, 1);
        assert_eq!(campaigns[2].campaign_outcome, 1);
        assert_eq!(campaigns[3].last_contact_date, "2022-08-28");
        assert_eq!(campaigns[3].previous_outcome, 0);
        assert!(campaigns.iter().all(|c| c.last_contact_date.len() == 10));

        assert_eq!(economics[2].cons_price_idx, Some(94.465));
        assert_eq!(economics[3].euribor_three_months, Some(4.963));
        Ok(())
    }

    #[test]
    fn empty_input_writes_header_only_files() -> Result<()> {
        let dir = TempDir::new()?;
        let cfg = config(&dir);
        fs::create_dir_all(&cfg.input_dir)?;

        let summary = run(&cfg)?;
        assert_eq!(summary.rows, 0);
        for name in ["client.csv", "campaign.csv", "economics.csv"] {
            let text = fs::read_to_string(cfg.output_dir.join(name))?;
            assert_eq!(text.lines().count(), 1, "{name} should only have a header");
        }
        Ok(())
    }

    #[test]
    fn bad_month_writes_nothing() -> Result<()> {
        let dir = TempDir::new()?;
        let cfg = config(&dir);
        fs::create_dir_all(&cfg.input_dir)?;
        let content = format!(
            "{}\n5,41,admin.,single,unknown,no,no,xyz,7,1,1,0,success,93.9,4.8,yes\n",
            HEADER
        );
        write_zip(&cfg.input_dir.join("bad.zip"), &[("bad.csv", &content)])?;

        let err = clean_campaign_data(&cfg.input_dir, &cfg.output_dir).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CleanError>(),
            Some(CleanError::UnknownMonth { client_id: 5, .. })
        ));
        assert!(!cfg.output_dir.exists());
        Ok(())
    }
}
