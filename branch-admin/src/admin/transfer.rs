//! Import / export / reset
//!
//! Export: the whole document as pretty JSON, same shape as the slot.
//! Import: all-or-nothing replacement after parsing and confirmation.

use shared::{AppError, AppResult, ErrorCode, StoreDocument};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use super::BranchAdmin;
use crate::confirm::{ActionOutcome, CONFIRM_IMPORT, CONFIRM_RESET};

pub const EXPORT_CONTENT_TYPE: &str = "application/json";

/// Downloadable export
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Parse an import payload; duplicate slugs or item ids are rejected
fn parse_import(bytes: &[u8]) -> AppResult<StoreDocument> {
    let mut doc = StoreDocument::from_json(bytes).map_err(|e| {
        AppError::new(ErrorCode::ImportInvalid).with_detail("reason", e.to_string())
    })?;

    let mut slugs = HashSet::new();
    let mut ids = HashSet::new();
    for branch in &doc.branches {
        if !slugs.insert(branch.slug.as_str()) {
            return Err(AppError::parse(format!("Duplicate slug '{}'", branch.slug))
                .with_detail("slug", branch.slug.clone()));
        }
        let item_ids = branch.menu.iter().map(|m| m.id.as_str());
        let image_ids = branch.gallery.iter().map(|g| g.id.as_str());
        for id in item_ids.chain(image_ids) {
            if !ids.insert(id) {
                return Err(AppError::parse(format!("Duplicate id '{id}'")).with_detail("id", id));
            }
        }
    }

    doc.intern_images();
    Ok(doc)
}

impl BranchAdmin {
    /// Serialize the whole store; no mutation
    pub fn export_store(&self) -> AppResult<ExportArtifact> {
        let bytes = self
            .doc
            .to_json_pretty()
            .map_err(|e| AppError::with_message(ErrorCode::ExportFailed, e.to_string()))?;
        Ok(ExportArtifact {
            file_name: self.config.export_file_name.clone(),
            content_type: EXPORT_CONTENT_TYPE,
            bytes,
        })
    }

    /// Write the export artifact into `dir`, returning its path
    pub async fn export_to_dir(&self, dir: impl AsRef<Path>) -> AppResult<PathBuf> {
        let artifact = self.export_store()?;
        let path = dir.as_ref().join(&artifact.file_name);
        tokio::fs::write(&path, &artifact.bytes)
            .await
            .map_err(|e| AppError::with_message(ErrorCode::ExportFailed, e.to_string()))?;
        tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "Store exported");
        Ok(path)
    }

    /// Replace the whole store with `bytes`.
    ///
    /// An unparseable payload is an error and changes nothing. A valid one is
    /// applied only after confirmation; the selection moves to the first
    /// imported branch (or none).
    pub fn import_store(&mut self, bytes: &[u8]) -> AppResult<ActionOutcome> {
        self.session.require_open()?;
        let doc = match parse_import(bytes) {
            Ok(doc) => doc,
            Err(e) => {
                tracing::warn!(error = %e, details = ?e.details, "Import rejected");
                return Err(e);
            }
        };
        if !self.ask(CONFIRM_IMPORT) {
            return Ok(ActionOutcome::Declined);
        }

        self.commit(doc)?;
        self.active = self.doc.first_slug();

        tracing::info!(branches = self.doc.branches.len(), "Store imported");
        self.notices.info("Imported JSON (local)");
        Ok(ActionOutcome::Applied)
    }

    /// Read `path` and import it
    pub async fn import_file(&mut self, path: impl AsRef<Path>) -> AppResult<ActionOutcome> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            AppError::with_message(ErrorCode::ImportInvalid, format!("Failed to read import file: {e}"))
                .with_detail("path", path.display().to_string())
        })?;
        self.import_store(&bytes)
    }

    /// Replace the store with fresh demo data
    pub fn reset_to_demo(&mut self) -> AppResult<ActionOutcome> {
        self.session.require_open()?;
        if !self.ask(CONFIRM_RESET) {
            return Ok(ActionOutcome::Declined);
        }

        self.commit(StoreDocument::demo())?;
        self.active = self.doc.first_slug();

        tracing::info!("Store reset to demo data");
        self.notices.info("Reset to demo data");
        Ok(ActionOutcome::Applied)
    }
}
