//! Menu item CRUD (always on the active branch)

use shared::models::{Branch, MenuItem, MenuItemInput};
use shared::{AppError, AppResult, ErrorCode, StoreDocument};

use super::BranchAdmin;
use crate::confirm::{ActionOutcome, CONFIRM_DELETE_MENU_ITEM};
use crate::utils::validation::validate_menu_input;

fn item_not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::MenuItemNotFound).with_detail("id", id)
}

fn active_mut<'a>(doc: &'a mut StoreDocument, slug: &str) -> AppResult<&'a mut Branch> {
    doc.branch_mut(slug).ok_or_else(AppError::no_active_branch)
}

impl BranchAdmin {
    /// Append a menu item with a fresh id.
    ///
    /// The name is required; the price is coerced (non-numeric -> 0).
    pub fn add_menu_item(&mut self, input: MenuItemInput) -> AppResult<MenuItem> {
        self.session.require_open()?;
        let slug = self.require_active()?;
        validate_menu_input(&input)?;

        let item = MenuItem {
            id: self.doc.fresh_id(),
            category: input.category.clone(),
            name: input.name.trim().to_string(),
            price: input.price_value(),
            desc: input.desc.trim().to_string(),
        };

        let mut next = self.doc.clone();
        active_mut(&mut next, &slug)?.menu.push(item.clone());
        self.commit(next)?;

        tracing::info!(slug = %slug, id = %item.id, name = %item.name, "Menu item added");
        self.notices.info("Menu item added (local)");
        Ok(item)
    }

    /// Edit a menu item in place; the id is preserved
    pub fn update_menu_item(&mut self, id: &str, input: MenuItemInput) -> AppResult<MenuItem> {
        self.session.require_open()?;
        let slug = self.require_active()?;
        validate_menu_input(&input)?;

        let mut next = self.doc.clone();
        let item = active_mut(&mut next, &slug)?
            .menu
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| item_not_found(id))?;
        item.category = input.category.clone();
        item.name = input.name.trim().to_string();
        item.price = input.price_value();
        item.desc = input.desc.trim().to_string();
        let updated = item.clone();
        self.commit(next)?;

        tracing::info!(slug = %slug, id = %id, "Menu item updated");
        self.notices.info("Menu item updated (local)");
        Ok(updated)
    }

    /// Stage a menu item for re-entry: its fields are returned and the item
    /// itself is removed (and the removal persisted) right away.
    ///
    /// The item only comes back if the caller passes the staged values to
    /// [`add_menu_item`](Self::add_menu_item), under a new id.
    /// [`update_menu_item`](Self::update_menu_item) edits without that risk.
    pub fn begin_edit_menu_item(&mut self, id: &str) -> AppResult<MenuItemInput> {
        self.session.require_open()?;
        let slug = self.require_active()?;

        let mut next = self.doc.clone();
        let menu = &mut active_mut(&mut next, &slug)?.menu;
        let pos = menu
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| item_not_found(id))?;
        let staged = MenuItemInput::from(&menu.remove(pos));
        self.commit(next)?;

        tracing::info!(slug = %slug, id = %id, "Menu item staged for edit");
        Ok(staged)
    }

    pub fn delete_menu_item(&mut self, id: &str) -> AppResult<ActionOutcome> {
        self.session.require_open()?;
        let slug = self.require_active()?;
        let exists = self
            .active_branch()
            .is_some_and(|b| b.menu.iter().any(|m| m.id == id));
        if !exists {
            return Err(item_not_found(id));
        }
        if !self.ask(CONFIRM_DELETE_MENU_ITEM) {
            return Ok(ActionOutcome::Declined);
        }

        let mut next = self.doc.clone();
        active_mut(&mut next, &slug)?.menu.retain(|m| m.id != id);
        self.commit(next)?;

        tracing::info!(slug = %slug, id = %id, "Menu item deleted");
        self.notices.info("Menu item deleted (local)");
        Ok(ActionOutcome::Applied)
    }
}
