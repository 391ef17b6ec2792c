//! Branch CRUD

use shared::models::{Branch, BranchDetails};
use shared::{AppError, AppResult, ErrorCode};

use super::BranchAdmin;
use crate::confirm::{ActionOutcome, CONFIRM_DELETE_BRANCH};
use crate::utils::validation::validate_branch_details;

/// Slug probed first by [`BranchAdmin::add_branch`]
pub const NEW_BRANCH_SLUG: &str = "new-branch";

impl BranchAdmin {
    /// Make `slug` the active branch
    pub fn select_branch(&mut self, slug: &str) -> AppResult<&Branch> {
        if !self.doc.contains_slug(slug) {
            return Err(AppError::new(ErrorCode::BranchNotFound).with_detail("slug", slug));
        }
        self.active = Some(slug.to_string());
        self.active_branch()
            .ok_or_else(|| AppError::internal("selected branch vanished"))
    }

    /// Insert an empty branch under the first free `new-branch[-N]` slug and
    /// select it. Returns the new slug.
    pub fn add_branch(&mut self) -> AppResult<String> {
        self.session.require_open()?;

        let slug = next_free_slug(&self.doc.branches, NEW_BRANCH_SLUG);
        let mut next = self.doc.clone();
        next.branches.push(Branch::new_empty(slug.clone()));
        self.commit(next)?;
        self.active = Some(slug.clone());

        tracing::info!(slug = %slug, "Branch created");
        self.notices.info("New branch created (local)");
        Ok(slug)
    }

    /// Overwrite every editable field of the active branch.
    ///
    /// The slug must match `[a-z0-9-]+` and must not belong to another
    /// branch; keeping the current slug is allowed.
    pub fn update_branch(&mut self, details: BranchDetails) -> AppResult<()> {
        self.session.require_open()?;
        let current = self.require_active()?;

        let details = details.trimmed();
        validate_branch_details(&details)?;
        if details.slug != current && self.doc.contains_slug(&details.slug) {
            return Err(AppError::new(ErrorCode::SlugTaken).with_detail("slug", details.slug));
        }

        let new_slug = details.slug.clone();
        let mut next = self.doc.clone();
        next.branch_mut(&current)
            .ok_or_else(AppError::no_active_branch)?
            .apply_details(details);
        self.commit(next)?;
        self.active = Some(new_slug.clone());

        if new_slug != current {
            tracing::info!(from = %current, to = %new_slug, "Branch renamed");
        }
        tracing::info!(slug = %new_slug, "Branch details updated");
        self.notices.info("Branch details updated (local)");
        Ok(())
    }

    /// Delete the active branch with its menu and gallery, then select the
    /// first remaining branch (or nothing).
    pub fn delete_branch(&mut self) -> AppResult<ActionOutcome> {
        self.session.require_open()?;
        let slug = self.require_active()?;
        if !self.ask(CONFIRM_DELETE_BRANCH) {
            return Ok(ActionOutcome::Declined);
        }

        let mut next = self.doc.clone();
        next.branches.retain(|b| b.slug != slug);
        self.commit(next)?;
        self.active = self.doc.first_slug();

        tracing::info!(slug = %slug, remaining = self.doc.branches.len(), "Branch deleted");
        self.notices.info("Branch deleted (local)");
        Ok(ActionOutcome::Applied)
    }

    /// Branches whose "name slug" contains `query`, case-insensitively, in
    /// document order
    pub fn filter_branches(&self, query: &str) -> Vec<&Branch> {
        filter_branches(&self.doc.branches, query)
    }
}

/// `base`, then `base-1`, `base-2`, ... until unused
pub fn next_free_slug(branches: &[Branch], base: &str) -> String {
    let taken = |slug: &str| branches.iter().any(|b| b.slug == slug);
    if !taken(base) {
        return base.to_string();
    }
    (1..)
        .map(|idx| format!("{base}-{idx}"))
        .find(|slug| !taken(slug))
        .unwrap_or_else(|| base.to_string())
}

pub fn filter_branches<'a>(branches: &'a [Branch], query: &str) -> Vec<&'a Branch> {
    let query = query.to_lowercase();
    branches
        .iter()
        .filter(|b| format!("{} {}", b.name, b.slug).to_lowercase().contains(&query))
        .collect()
}
