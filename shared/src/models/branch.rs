//! Branch Model

use serde::{Deserialize, Serialize};

use super::serde_helpers::null_as_default;
use super::{GalleryImage, MenuItem};

/// Name given to freshly added branches
pub const NEW_BRANCH_NAME: &str = "New Branch";

/// One restaurant location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    /// Stable identifier, unique across the document
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Free text or map link
    #[serde(default, deserialize_with = "null_as_default")]
    pub map: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hours: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub about: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub menu: Vec<MenuItem>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery: Vec<GalleryImage>,
}

impl Branch {
    /// Branch with empty contact fields, menu and gallery
    pub fn new_empty(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: NEW_BRANCH_NAME.to_string(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            map: String::new(),
            hours: String::new(),
            about: String::new(),
            menu: Vec::new(),
            gallery: Vec::new(),
        }
    }

    /// Overwrite every editable field (menu and gallery are untouched)
    pub fn apply_details(&mut self, details: BranchDetails) {
        self.slug = details.slug;
        self.name = details.name;
        self.address = details.address;
        self.phone = details.phone;
        self.email = details.email;
        self.map = details.map;
        self.hours = details.hours;
        self.about = details.about;
    }
}

/// Editable branch fields (the details form)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchDetails {
    pub name: String,
    pub slug: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub map: String,
    pub hours: String,
    pub about: String,
}

impl BranchDetails {
    /// Copy with surrounding whitespace removed from every field
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            slug: self.slug.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            map: self.map.trim().to_string(),
            hours: self.hours.trim().to_string(),
            about: self.about.trim().to_string(),
        }
    }
}

impl From<&Branch> for BranchDetails {
    fn from(branch: &Branch) -> Self {
        Self {
            name: branch.name.clone(),
            slug: branch.slug.clone(),
            address: branch.address.clone(),
            phone: branch.phone.clone(),
            email: branch.email.clone(),
            map: branch.map.clone(),
            hours: branch.hours.clone(),
            about: branch.about.clone(),
        }
    }
}
