// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{LedgerExport, SheetTable};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Export the whole ledger as one pretty-printed JSON document.
pub(crate) fn export_json(doc: &LedgerExport<'_>, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// `/dir/report.csv` + `weekly_totals` → `/dir/report_weekly_totals.csv`
pub(crate) fn table_path(base: &Path, slug: &str) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "carpool".to_string());
    base.with_file_name(format!("{stem}_{slug}.csv"))
}

/// Export CSV: one file per table, header included.
pub(crate) fn export_csv(
    tables: &[SheetTable],
    base: &Path,
    force: bool,
) -> AppResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(tables.len());

    for table in tables {
        let path = table_path(base, table.slug);
        ensure_writable(&path, force)?;
        info(format!("Exporting to CSV: {}", path.display()));

        let mut wtr = csv::Writer::from_path(&path)?;
        wtr.write_record(&table.headers)?;
        for row in &table.rows {
            wtr.write_record(row.iter().map(|c| c.as_plain()))?;
        }
        wtr.flush()?;

        notify_export_success("CSV", &path);
        written.push(path);
    }

    Ok(written)
}
