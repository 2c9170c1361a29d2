// src/export/logic.rs

use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{LedgerExport, build_tables};
use crate::export::xlsx::export_xlsx;
use crate::store::SessionStore;
use crate::ui::messages::warning;
use crate::utils::range::resolve_range;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export rides and their settlement.
    ///
    /// - `file`: absolute path of the output (the CSV base name for `csv`)
    /// - `range`: `None`, `"all"` or a period expression, see
    ///   [`resolve_range`](crate::utils::range::resolve_range)
    pub fn export(
        store: &SessionStore,
        cfg: &Config,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let bounds = resolve_range(range)?;
        let sessions = store.sessions_in(bounds);

        if sessions.is_empty() {
            warning("No ride sessions found for selected range.");
            return Ok(());
        }

        let report = Core::build_settlement(store, cfg, bounds);
        log::info!(
            "exporting {} sessions as {} to {}",
            sessions.len(),
            format.as_str(),
            path.display()
        );

        match format {
            ExportFormat::Xlsx => {
                ensure_writable(path, force)?;
                let tables = build_tables(store, &sessions, &report);
                export_xlsx(&tables, path, &cfg.currency)?;
            }
            ExportFormat::Csv => {
                let tables = build_tables(store, &sessions, &report);
                export_csv(&tables, path, force)?;
            }
            ExportFormat::Json => {
                ensure_writable(path, force)?;
                let doc = LedgerExport::new(cfg.session_cost, &store.members, &sessions, &report);
                export_json(&doc, path)?;
            }
        }

        Ok(())
    }
}
