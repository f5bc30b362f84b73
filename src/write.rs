use anyhow::{Context, Result};
use arrow::csv::WriterBuilder;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;

use crate::schema::{CampaignRecord, ClientRecord, EconomicsRecord, Table};

/// Create `out_dir` if needed and write the three tables into it.
/// Returns the written paths in client, campaign, economics order.
pub fn write_tables(
    out_dir: &Path,
    clients: &[ClientRecord],
    campaigns: &[CampaignRecord],
    economics: &[EconomicsRecord],
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {:?}", out_dir))?;

    Ok(vec![
        write_table(out_dir, clients)?,
        write_table(out_dir, campaigns)?,
        write_table(out_dir, economics)?,
    ])
}

/// Write `rows` as `<out_dir>/<T::FILE_NAME>`: header row, comma separated,
/// missing values as empty fields.
///
/// Rows go to a hidden temp file first, which is then renamed over any
/// existing file of the same name.
pub fn write_table<T: Table>(out_dir: &Path, rows: &[T]) -> Result<PathBuf> {
    let batch = T::to_batch(rows)?;
    let path = out_dir.join(T::FILE_NAME);
    let tmp_path = out_dir.join(format!(".{}.tmp", T::FILE_NAME));

    {
        let file = fs::File::create(&tmp_path)
            .with_context(|| format!("creating {:?}", tmp_path))?;
        let mut writer = WriterBuilder::new().with_header(true).build(file);
        writer
            .write(&batch)
            .with_context(|| format!("writing {}", T::FILE_NAME))?;
    }

    fs::rename(&tmp_path, &path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    info!(file = %path.display(), rows = rows.len(), "wrote table");
    Ok(path)
}
