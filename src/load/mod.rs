// src/load/mod.rs
use anyhow::{Context, Result};
use csv::ReaderBuilder;
use glob::{glob, Pattern};
use std::{
    fs::File,
    io::{Cursor, Read},
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};
use zip::ZipArchive;

use crate::schema::RawRecord;

pub const ARCHIVE_EXTENSION: &str = ".zip";
pub const ENTRY_EXTENSION: &str = ".csv";

/// The concatenated record set plus how many archives fed it.
#[derive(Debug, Default)]
pub struct Loaded {
    pub archives: usize,
    pub records: Vec<RawRecord>,
}

/// List the `*.zip` files directly inside `dir`, sorted by name.
/// A missing directory yields an empty list.
pub fn find_archives<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "input directory not found");
        return Ok(Vec::new());
    }

    let pattern = format!(
        "{}/*{}",
        Pattern::escape(&dir.to_string_lossy()),
        ARCHIVE_EXTENSION
    );
    let mut paths = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("bad glob pattern {}", pattern))? {
        let path = entry.with_context(|| format!("reading {}", dir.display()))?;
        if path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Load every archive in `dir` and concatenate their rows: archive order,
/// then entry order inside each archive, then row order inside each entry.
#[tracing::instrument(level = "info", skip(dir), fields(dir = %dir.as_ref().display()))]
pub fn load_input_dir<P: AsRef<Path>>(dir: P) -> Result<Loaded> {
    let archives = find_archives(&dir)?;
    if archives.is_empty() {
        info!("no archives found; tables will be empty");
    }

    let mut loaded = Loaded {
        archives: archives.len(),
        records: Vec::new(),
    };
    for path in &archives {
        let mut records = load_zip(path)?;
        loaded.records.append(&mut records);
    }
    Ok(loaded)
}

/// Open `zip_path`, buffer every `.csv` entry in archive order, then parse
/// each buffer into raw records. The archive handle is released before
/// parsing starts.
#[tracing::instrument(level = "info", skip(zip_path), fields(path = %zip_path.as_ref().display()))]
pub fn load_zip<P: AsRef<Path>>(zip_path: P) -> Result<Vec<RawRecord>> {
    let zip_path = zip_path.as_ref();
    let file = File::open(zip_path)
        .with_context(|| format!("Failed to open ZIP file: {:?}", zip_path))?;
    let mut archive = ZipArchive::new(file)
        .with_context(|| format!("Failed to read ZIP archive: {:?}", zip_path))?;

    let mut buffers: Vec<(String, Vec<u8>)> = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to access ZIP entry #{} in {:?}", i, zip_path))?;
        let name = entry.name().to_string();

        if entry.is_file() && name.to_lowercase().ends_with(ENTRY_EXTENSION) {
            let mut buf = Vec::with_capacity(entry.size() as usize);
            entry
                .read_to_end(&mut buf)
                .with_context(|| format!("Failed to read {} into memory", name))?;
            buffers.push((name, buf));
        } else {
            debug!(entry = %name, "skipping non-csv entry");
        }
    }
    drop(archive);

    let mut records = Vec::new();
    for (name, data) in buffers {
        let before = records.len();
        parse_entry(&name, data, &mut records)?;
        debug!(entry = %name, rows = records.len() - before, "parsed entry");
    }
    info!(rows = records.len(), "loaded archive");
    Ok(records)
}

/// Parse one CSV entry (header row first) and append its rows to `out`.
fn parse_entry(name: &str, data: Vec<u8>, out: &mut Vec<RawRecord>) -> Result<()> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(Cursor::new(data));

    for (idx, result) in rdr.deserialize::<RawRecord>().enumerate() {
        let record = result.with_context(|| format!("CSV parse error in {} at record {}", name, idx))?;
        out.push(record);
    }
    Ok(())
}
