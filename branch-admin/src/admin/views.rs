//! Read-only projections for the admin screens

use serde::Serialize;
use shared::models::{BranchDetails, format_price};

use super::BranchAdmin;
use super::branches::filter_branches;

/// Row of the branch list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchListRow {
    pub slug: String,
    pub name: String,
    /// `<slug> · <phone>`
    pub meta: String,
    /// Currently selected
    pub active: bool,
}

/// Row of the active branch's menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuRow {
    pub id: String,
    pub name: String,
    /// `<category> · <desc>`
    pub meta: String,
    pub price_label: String,
}

/// Gallery thumbnail, `src` is a data URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryThumb {
    pub id: String,
    pub name: String,
    pub src: String,
}

impl BranchAdmin {
    /// Branch list narrowed by `filter` (empty shows everything)
    pub fn branch_list(&self, filter: &str) -> Vec<BranchListRow> {
        let active = self.active.as_deref();
        filter_branches(&self.doc.branches, filter)
            .into_iter()
            .map(|b| BranchListRow {
                slug: b.slug.clone(),
                name: b.name.clone(),
                meta: format!("{} · {}", b.slug, b.phone),
                active: active == Some(b.slug.as_str()),
            })
            .collect()
    }

    pub fn panel_title(&self) -> String {
        match self.active_branch() {
            Some(b) => format!("Managing: {} ({})", b.name, b.slug),
            None if self.doc.branches.is_empty() => "Add a branch to get started".to_string(),
            None => "Select a branch".to_string(),
        }
    }

    /// Prefilled details form for the selected branch
    pub fn details_form(&self) -> Option<BranchDetails> {
        self.active_branch().map(BranchDetails::from)
    }

    pub fn menu_rows(&self) -> Vec<MenuRow> {
        let Some(branch) = self.active_branch() else {
            return Vec::new();
        };
        branch
            .menu
            .iter()
            .map(|m| MenuRow {
                id: m.id.clone(),
                name: m.name.clone(),
                meta: format!("{} · {}", m.category, m.desc),
                price_label: format!("₹{}", format_price(m.price)),
            })
            .collect()
    }

    pub fn gallery_thumbs(&self) -> Vec<GalleryThumb> {
        let Some(branch) = self.active_branch() else {
            return Vec::new();
        };
        branch
            .gallery
            .iter()
            .map(|g| GalleryThumb {
                id: g.id.clone(),
                name: g.name.clone(),
                src: g.data.to_data_url(),
            })
            .collect()
    }
}
