//! Store document: the root persisted blob

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

use super::{Branch, MenuItem};
use crate::util::gen_id;

/// All branches, persisted and exported as one JSON document
///
/// ```json
/// { "branches": [ { "slug": "...", "menu": [...], "gallery": [...] } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    pub branches: Vec<Branch>,
}

impl StoreDocument {
    /// Demo data: one branch with two menu items
    pub fn demo() -> Self {
        Self {
            branches: vec![Branch {
                slug: "Narapally".to_string(),
                name: "Narapally".to_string(),
                address: "Narapally".to_string(),
                phone: "+919876543210".to_string(),
                email: "narapally@bagarabuvva.com".to_string(),
                map: String::new(),
                hours: "Mon-Sun:11:00-23:00".to_string(),
                about: "Narapally branch. Manager: Sukumar.".to_string(),
                menu: vec![
                    MenuItem {
                        id: gen_id(),
                        category: "starters".to_string(),
                        name: "Guntur Chili Chicken".to_string(),
                        price: 165.0,
                        desc: "Spicy, tangy.".to_string(),
                    },
                    MenuItem {
                        id: gen_id(),
                        category: "mains".to_string(),
                        name: "Bagara Kodi (Full)".to_string(),
                        price: 520.0,
                        desc: "House special.".to_string(),
                    },
                ],
                gallery: Vec::new(),
            }],
        }
    }

    pub fn branch(&self, slug: &str) -> Option<&Branch> {
        self.branches.iter().find(|b| b.slug == slug)
    }

    pub fn branch_mut(&mut self, slug: &str) -> Option<&mut Branch> {
        self.branches.iter_mut().find(|b| b.slug == slug)
    }

    pub fn contains_slug(&self, slug: &str) -> bool {
        self.branches.iter().any(|b| b.slug == slug)
    }

    pub fn first_slug(&self) -> Option<String> {
        self.branches.first().map(|b| b.slug.clone())
    }

    /// Whether a menu item or gallery image anywhere uses `id`
    pub fn contains_id(&self, id: &str) -> bool {
        self.branches.iter().any(|b| {
            b.menu.iter().any(|m| m.id == id) || b.gallery.iter().any(|g| g.id == id)
        })
    }

    /// Generate an id token unused anywhere in the document
    pub fn fresh_id(&self) -> String {
        loop {
            let id = gen_id();
            if !self.contains_id(&id) {
                return id;
            }
        }
    }

    /// Make identical gallery payloads share one allocation.
    ///
    /// Returns how many images were re-pointed at an existing blob.
    pub fn intern_images(&mut self) -> usize {
        let mut blobs: HashMap<String, Arc<[u8]>> = HashMap::new();
        let mut shared = 0;
        for image in self.branches.iter_mut().flat_map(|b| b.gallery.iter_mut()) {
            match blobs.get(image.data.digest()) {
                Some(existing) => {
                    image.data.replace_bytes(Arc::clone(existing));
                    shared += 1;
                }
                None => {
                    blobs.insert(
                        image.data.digest().to_string(),
                        Arc::clone(image.data.shared_bytes()),
                    );
                }
            }
        }
        shared
    }

    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
    }

    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GalleryImage, ImageData};

    fn image(id: &str, bytes: &[u8]) -> GalleryImage {
        GalleryImage {
            id: id.to_string(),
            name: format!("{id}.png"),
            data: ImageData::from_bytes("image/png", bytes.to_vec()),
            uploaded_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn test_demo_seed() {
        let doc = StoreDocument::demo();
        assert_eq!(doc.branches.len(), 1);
        let branch = doc.branch("Narapally").expect("seed branch");
        assert_eq!(branch.menu.len(), 2);
        assert_ne!(branch.menu[0].id, branch.menu[1].id);
        assert!(branch.gallery.is_empty());
    }

    #[test]
    fn test_wire_shape() {
        let mut doc = StoreDocument::demo();
        doc.branches[0].gallery.push(image("id_img0001", b"abc"));
        let value: serde_json::Value = serde_json::from_slice(&doc.to_json().unwrap()).unwrap();

        let branch = &value["branches"][0];
        assert_eq!(branch["slug"], "Narapally");
        assert_eq!(branch["menu"][0]["category"], "starters");
        assert_eq!(branch["menu"][1]["price"], 520.0);
        assert_eq!(branch["gallery"][0]["dataUrl"], "data:image/png;base64,YWJj");
        assert_eq!(branch["gallery"][0]["uploadedAt"], 1_700_000_000_000i64);
    }

    #[test]
    fn test_parse_browser_document() {
        let raw = br#"{"branches":[{"slug":"uppal","name":"Uppal","address":"","phone":"","email":"","map":"","hours":"","about":"",
            "menu":[{"id":"id_k2j4h1a","category":"mains","name":"Biryani","price":250,"desc":""}],
            "gallery":[{"id":"id_p0o9i8u","name":"hall.jpg","dataUrl":"data:image/jpeg;base64,/9j/","uploadedAt":1712345678901}]}]}"#;
        let doc = StoreDocument::from_json(raw).unwrap();
        let branch = doc.branch("uppal").unwrap();
        assert_eq!(branch.menu[0].price, 250.0);
        assert_eq!(branch.gallery[0].data.mime(), "image/jpeg");
        assert_eq!(branch.gallery[0].data.bytes(), &[0xff, 0xd8, 0xff]);
    }

    #[test]
    fn test_missing_branches_is_an_error() {
        assert!(StoreDocument::from_json(b"{}").is_err());
        assert!(StoreDocument::from_json(b"not json").is_err());
    }

    #[test]
    fn test_fresh_id_is_unused() {
        let doc = StoreDocument::demo();
        let id = doc.fresh_id();
        assert!(!doc.contains_id(&id));
        assert!(doc.contains_id(&doc.branches[0].menu[0].id));
    }

    #[test]
    fn test_intern_images() {
        let mut doc = StoreDocument::demo();
        doc.branches[0].gallery.push(image("id_a", b"same"));
        doc.branches[0].gallery.push(image("id_b", b"same"));
        doc.branches[0].gallery.push(image("id_c", b"other"));

        assert_eq!(doc.intern_images(), 1);
        let gallery = &doc.branches[0].gallery;
        assert!(gallery[0].data.shares_blob_with(&gallery[1].data));
        assert!(!gallery[0].data.shares_blob_with(&gallery[2].data));
    }
}
