//! Branch Directory Store
//!
//! [`BranchAdmin`] owns the in-memory document, the active selection, the
//! session gate and the persistence gate. Every mutation follows the same
//! shape:
//!
//! 1. check session / selection / input
//! 2. build the next document from a clone of the current one
//! 3. persist the next document
//! 4. swap it in
//!
//! so a failed validation or a failed save leaves the store untouched.

mod branches;
mod gallery;
mod menu;
mod transfer;
mod views;

pub use gallery::{UploadFile, UploadReport, UploadSkip, UploadSource};
pub use transfer::ExportArtifact;
pub use views::{BranchListRow, GalleryThumb, MenuRow};

use shared::models::Branch;
use shared::{AppError, AppResult, StoreDocument};
use std::sync::Arc;

use crate::confirm::{ActionOutcome, CONFIRM_LOGOUT, Confirm};
use crate::core::Config;
use crate::notice::{Notice, Notices};
use crate::persistence::{LoadSource, PersistenceGate};
use crate::session::{AdminSession, SessionState};
use crate::storage::{RedbSlots, SlotStorage};

pub struct BranchAdmin {
    config: Config,
    gate: PersistenceGate,
    doc: StoreDocument,
    /// Slug of the selected branch
    active: Option<String>,
    confirm: Arc<dyn Confirm>,
    session: AdminSession,
    notices: Notices,
    load_source: LoadSource,
}

impl std::fmt::Debug for BranchAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BranchAdmin")
            .field("branches", &self.doc.branches.len())
            .field("active", &self.active)
            .field("session", &self.session.state())
            .finish()
    }
}

impl BranchAdmin {
    /// Load the store from `slots` and select the first branch
    pub fn open(
        config: Config,
        slots: Arc<dyn SlotStorage>,
        confirm: Arc<dyn Confirm>,
    ) -> AppResult<Self> {
        let gate = PersistenceGate::new(slots, config.store_key.clone());
        let (doc, load_source) = gate.load()?;
        let active = doc.first_slug();
        let session = AdminSession::new(config.admin_password.clone());
        let mut notices = Notices::default();
        if let Some(err) = load_source.error() {
            notices.warn(err.message);
        }
        Ok(Self {
            config,
            gate,
            doc,
            active,
            confirm,
            session,
            notices,
            load_source,
        })
    }

    /// Open with a redb slot database under `config.work_dir`
    pub fn open_on_disk(config: Config, confirm: Arc<dyn Confirm>) -> AppResult<Self> {
        std::fs::create_dir_all(&config.work_dir).map_err(|e| {
            AppError::storage(format!(
                "Failed to create work dir {}: {e}",
                config.work_dir.display()
            ))
        })?;
        let slots = RedbSlots::open(config.database_path())?;
        Self::open(config, Arc::new(slots), confirm)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> &StoreDocument {
        &self.doc
    }

    pub fn branches(&self) -> &[Branch] {
        &self.doc.branches
    }

    pub fn branch(&self, slug: &str) -> Option<&Branch> {
        self.doc.branch(slug)
    }

    pub fn active_slug(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn active_branch(&self) -> Option<&Branch> {
        self.active.as_deref().and_then(|slug| self.doc.branch(slug))
    }

    /// How the document was obtained at start-up
    pub fn load_source(&self) -> LoadSource {
        self.load_source
    }

    // ========== Session ==========

    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    pub fn sign_in(&mut self, password: &str) -> AppResult<()> {
        self.session.sign_in(password)?;
        self.notices.info("Signed in (demo)");
        Ok(())
    }

    pub fn enter_demo_mode(&mut self) {
        self.session.enter_demo();
        self.notices.info("Demo mode enabled (no server auth)");
    }

    pub fn sign_out(&mut self) -> ActionOutcome {
        if !self.ask(CONFIRM_LOGOUT) {
            return ActionOutcome::Declined;
        }
        self.session.sign_out();
        self.notices.info("Logged out (demo)");
        ActionOutcome::Applied
    }

    // ========== Notices ==========

    /// Take every pending notice, oldest first
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.notices.drain()
    }

    // ========== Persistence ==========

    /// Re-persist the current document as is
    pub fn save(&mut self) -> AppResult<()> {
        self.session.require_open()?;
        self.gate.save(&self.doc)?;
        self.notices.info("Saved to local storage");
        Ok(())
    }

    /// Persist `next`, then make it current
    fn commit(&mut self, next: StoreDocument) -> AppResult<()> {
        self.gate.save(&next)?;
        self.doc = next;
        Ok(())
    }

    fn require_active(&self) -> AppResult<String> {
        match &self.active {
            Some(slug) if self.doc.contains_slug(slug) => Ok(slug.clone()),
            _ => Err(AppError::no_active_branch()),
        }
    }

    fn ask(&self, question: &str) -> bool {
        self.confirm.confirm(question)
    }
}
