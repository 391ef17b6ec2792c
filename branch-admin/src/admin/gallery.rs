//! Gallery CRUD
//!
//! Uploads are processed one file at a time. A file that is too large or
//! cannot be read is skipped with a notice; the rest of the batch carries on
//! and everything that was read is persisted in one save at the end.

use shared::models::{GalleryImage, ImageData};
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};
use std::path::{Path, PathBuf};

use super::BranchAdmin;
use crate::confirm::{ActionOutcome, CONFIRM_DELETE_PHOTO};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};

/// Where an upload's bytes come from
#[derive(Debug, Clone)]
pub enum UploadSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// One file picked for upload
#[derive(Debug, Clone)]
pub struct UploadFile {
    /// Original file name, kept on the gallery entry
    pub name: String,
    pub source: UploadSource,
}

impl UploadFile {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            name,
            source: UploadSource::Path(path),
        }
    }

    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            source: UploadSource::Bytes(bytes.into()),
        }
    }

    async fn size(&self) -> std::io::Result<u64> {
        match &self.source {
            UploadSource::Path(path) => Ok(tokio::fs::metadata(path).await?.len()),
            UploadSource::Bytes(bytes) => Ok(bytes.len() as u64),
        }
    }

    async fn read(self) -> std::io::Result<Vec<u8>> {
        match self.source {
            UploadSource::Path(path) => tokio::fs::read(path).await,
            UploadSource::Bytes(bytes) => Ok(bytes),
        }
    }
}

/// A file left out of an upload batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSkip {
    pub name: String,
    /// `UploadTooLarge`, `UploadReadFailed` or `ValidationFailed`
    pub code: ErrorCode,
    pub reason: String,
}

/// Per-file outcome of [`BranchAdmin::add_gallery_images`]
#[derive(Debug, Clone, Default)]
pub struct UploadReport {
    /// Ids of the new gallery entries, in upload order
    pub added: Vec<String>,
    pub skipped: Vec<UploadSkip>,
}

fn guess_mime(name: &str) -> String {
    mime_guess::from_path(Path::new(name))
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

impl BranchAdmin {
    /// Upload files into the active branch's gallery.
    ///
    /// Files over `max_upload_bytes` are skipped before being read. Identical
    /// content already in the store is shared rather than stored twice.
    pub async fn add_gallery_images(&mut self, files: Vec<UploadFile>) -> AppResult<UploadReport> {
        self.session.require_open()?;
        let slug = self.require_active()?;
        let max = self.config.max_upload_bytes;

        let mut report = UploadReport::default();
        let mut staged: Vec<GalleryImage> = Vec::new();

        for file in files {
            let name = file.name.clone();
            if let Err(e) = validate_required_text(&name, "file name", MAX_NAME_LEN) {
                self.skip(&mut report, name, ErrorCode::ValidationFailed, e.message);
                continue;
            }

            let size = match file.size().await {
                Ok(size) => size,
                Err(e) => {
                    self.skip(&mut report, name, ErrorCode::UploadReadFailed, e.to_string());
                    continue;
                }
            };
            if size > max {
                let reason = format!("{size} bytes exceeds the {max} byte limit");
                self.skip(&mut report, name, ErrorCode::UploadTooLarge, reason);
                continue;
            }

            let bytes = match file.read().await {
                Ok(bytes) => bytes,
                Err(e) => {
                    self.skip(&mut report, name, ErrorCode::UploadReadFailed, e.to_string());
                    continue;
                }
            };
            // the file may have grown since its size was checked
            let read_len = bytes.len() as u64;
            if read_len > max {
                let reason = format!("{read_len} bytes exceeds the {max} byte limit");
                self.skip(&mut report, name, ErrorCode::UploadTooLarge, reason);
                continue;
            }

            let mut data = ImageData::from_bytes(guess_mime(&name), bytes);
            let existing = self
                .find_blob(data.digest())
                .or_else(|| staged.iter().map(|g| &g.data).find(|d| d.digest() == data.digest()));
            if let Some(existing) = existing {
                tracing::debug!(name = %name, digest = %data.digest(), "Reusing stored image blob");
                data = existing.with_mime(data.mime());
            }

            let id = loop {
                let id = self.doc.fresh_id();
                if !staged.iter().any(|g| g.id == id) {
                    break id;
                }
            };
            report.added.push(id.clone());
            staged.push(GalleryImage {
                id,
                name,
                data,
                uploaded_at: now_millis(),
            });
        }

        if staged.is_empty() {
            return Ok(report);
        }

        let mut next = self.doc.clone();
        next.branch_mut(&slug)
            .ok_or_else(AppError::no_active_branch)?
            .gallery
            .extend(staged);
        self.commit(next)?;

        tracing::info!(
            slug = %slug,
            added = report.added.len(),
            skipped = report.skipped.len(),
            "Gallery upload processed"
        );
        self.notices.info("Photos uploaded (local)");
        Ok(report)
    }

    pub fn delete_gallery_image(&mut self, id: &str) -> AppResult<ActionOutcome> {
        self.session.require_open()?;
        let slug = self.require_active()?;
        let exists = self
            .active_branch()
            .is_some_and(|b| b.gallery.iter().any(|g| g.id == id));
        if !exists {
            return Err(AppError::new(ErrorCode::GalleryImageNotFound).with_detail("id", id));
        }
        if !self.ask(CONFIRM_DELETE_PHOTO) {
            return Ok(ActionOutcome::Declined);
        }

        let mut next = self.doc.clone();
        next.branch_mut(&slug)
            .ok_or_else(AppError::no_active_branch)?
            .gallery
            .retain(|g| g.id != id);
        self.commit(next)?;

        tracing::info!(slug = %slug, id = %id, "Photo removed");
        self.notices.info("Photo removed (local)");
        Ok(ActionOutcome::Applied)
    }

    /// Any stored payload with this content digest
    fn find_blob(&self, digest: &str) -> Option<&ImageData> {
        self.doc
            .branches
            .iter()
            .flat_map(|b| b.gallery.iter())
            .map(|g| &g.data)
            .find(|d| d.digest() == digest)
    }

    fn skip(&mut self, report: &mut UploadReport, name: String, code: ErrorCode, reason: String) {
        tracing::warn!(name = %name, code = %code, reason = %reason, "Upload skipped");
        let notice = match code {
            ErrorCode::UploadTooLarge => format!(
                "Skipping large file {name} (>{}MB)",
                self.config.max_upload_bytes / 1_000_000
            ),
            _ => format!("Skipping {name}: {reason}"),
        };
        self.notices.warn(notice);
        report.skipped.push(UploadSkip { name, code, reason });
    }
}
