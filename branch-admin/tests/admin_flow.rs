//! Branch and menu flows over in-memory slots

mod common;

use branch_admin::{
    ActionOutcome, AutoConfirm, BranchAdmin, ErrorCode, LoadSource, MemorySlots, NoticeLevel,
    SessionState, SlotStorage,
};
use common::{PASSWORD, open_no, open_yes, test_config};
use shared::StoreDocument;
use shared::models::{BranchDetails, MenuItemInput};
use std::sync::Arc;

#[test]
fn test_fresh_store_is_seeded_and_persisted() {
    let (admin, slots) = open_yes();
    assert_eq!(admin.load_source(), LoadSource::SeededEmpty);
    assert_eq!(admin.active_slug(), Some("Narapally"));
    assert_eq!(admin.branches().len(), 1);
    assert_eq!(admin.active_branch().unwrap().menu.len(), 2);

    let raw = slots.read("bb_admin_data").unwrap().expect("seed persisted");
    let persisted = StoreDocument::from_json(&raw).unwrap();
    assert_eq!(&persisted, admin.document());
}

#[test]
fn test_corrupt_slot_is_reseeded() {
    let slots: Arc<dyn SlotStorage> = Arc::new(MemorySlots::with_slot("bb_admin_data", "{not json"));
    let mut admin =
        BranchAdmin::open(test_config("./unused"), slots, Arc::new(AutoConfirm(true))).unwrap();
    assert_eq!(admin.load_source(), LoadSource::SeededCorrupt);
    assert_eq!(admin.active_slug(), Some("Narapally"));

    let notices = admin.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].level, NoticeLevel::Warn);
    assert_eq!(notices[0].message, "Stored data is corrupted");
}

#[test]
fn test_browser_written_prices_survive_open() {
    let raw = r#"{"branches":[{"slug":"uppal","name":"Uppal",
        "menu":[{"id":"id_b","category":"drinks","name":"Lassi","price":null,"desc":""}]}]}"#;
    let slots: Arc<dyn SlotStorage> = Arc::new(MemorySlots::with_slot("bb_admin_data", raw));
    let mut admin =
        BranchAdmin::open(test_config("./unused"), slots, Arc::new(AutoConfirm(true))).unwrap();

    assert_eq!(admin.load_source(), LoadSource::Persisted);
    assert_eq!(admin.active_slug(), Some("uppal"));
    assert_eq!(admin.menu_rows()[0].price_label, "₹0");
    assert!(admin.drain_notices().is_empty());
}

#[test]
fn test_zero_branches_is_reseeded() {
    let slots: Arc<dyn SlotStorage> =
        Arc::new(MemorySlots::with_slot("bb_admin_data", r#"{"branches":[]}"#));
    let admin = BranchAdmin::open(test_config("./unused"), slots, Arc::new(AutoConfirm(true))).unwrap();
    assert_eq!(admin.load_source(), LoadSource::SeededNoBranches);
    assert_eq!(admin.branches().len(), 1);
}

#[test]
fn test_add_menu_item_to_seed_branch() {
    let (mut admin, _slots) = open_yes();
    let item = admin
        .add_menu_item(MenuItemInput::new("mains", "Paneer Tikka", "180", ""))
        .unwrap();

    let menu = &admin.active_branch().unwrap().menu;
    assert_eq!(menu.len(), 3);
    assert_eq!(item.price, 180.0);
    assert!(!item.id.is_empty());
    assert_eq!(menu.iter().filter(|m| m.id == item.id).count(), 1);
}

#[test]
fn test_menu_item_without_name_is_rejected() {
    let (mut admin, _slots) = open_yes();
    let before = admin.document().clone();

    let err = admin
        .add_menu_item(MenuItemInput::new("mains", "   ", "99", "x"))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemNameRequired);
    assert_eq!(admin.document(), &before);
}

#[test]
fn test_non_numeric_price_becomes_zero() {
    let (mut admin, _slots) = open_yes();
    let item = admin
        .add_menu_item(MenuItemInput::new("drinks", "Lassi", "abc", ""))
        .unwrap();
    assert_eq!(item.price, 0.0);
}

#[test]
fn test_invalid_slug_leaves_store_unchanged() {
    let (mut admin, slots) = open_yes();
    let before = admin.document().clone();
    let raw_before = slots.read("bb_admin_data").unwrap();

    let mut details = admin.details_form().unwrap();
    details.slug = "Narapally!".to_string();
    let err = admin.update_branch(details).unwrap_err();

    assert_eq!(err.code, ErrorCode::InvalidSlug);
    assert_eq!(admin.document(), &before);
    assert_eq!(admin.active_slug(), Some("Narapally"));
    assert_eq!(slots.read("bb_admin_data").unwrap(), raw_before);
}

#[test]
fn test_update_branch_renames_slug_and_keeps_selection() {
    let (mut admin, _slots) = open_yes();
    let details = BranchDetails {
        name: "  Narapally Main ".to_string(),
        slug: "narapally".to_string(),
        ..admin.details_form().unwrap()
    };
    admin.update_branch(details).unwrap();

    assert_eq!(admin.active_slug(), Some("narapally"));
    let branch = admin.active_branch().unwrap();
    assert_eq!(branch.name, "Narapally Main");
    assert_eq!(branch.menu.len(), 2);
    assert!(admin.branch("Narapally").is_none());
}

#[test]
fn test_update_branch_rejects_slug_of_another_branch() {
    let (mut admin, _slots) = open_yes();
    admin.add_branch().unwrap();
    admin.select_branch("Narapally").unwrap();

    let details = BranchDetails {
        slug: "new-branch".to_string(),
        ..admin.details_form().unwrap()
    };
    let err = admin.update_branch(details).unwrap_err();
    assert_eq!(err.code, ErrorCode::SlugTaken);
    assert_eq!(admin.branches().len(), 2);
    assert_eq!(admin.active_slug(), Some("Narapally"));
}

#[test]
fn test_add_branch_probes_free_slugs() {
    let (mut admin, _slots) = open_yes();
    assert_eq!(admin.add_branch().unwrap(), "new-branch");
    assert_eq!(admin.add_branch().unwrap(), "new-branch-1");
    assert_eq!(admin.add_branch().unwrap(), "new-branch-2");

    assert_eq!(admin.active_slug(), Some("new-branch-2"));
    let branch = admin.active_branch().unwrap();
    assert_eq!(branch.name, "New Branch");
    assert!(branch.menu.is_empty() && branch.gallery.is_empty());
}

#[test]
fn test_delete_branch_cascades_and_reselects() {
    let (mut admin, _slots) = open_yes();
    admin.add_branch().unwrap();
    admin.select_branch("Narapally").unwrap();

    assert_eq!(admin.delete_branch().unwrap(), ActionOutcome::Applied);
    assert_eq!(admin.branches().len(), 1);
    assert_eq!(admin.active_slug(), Some("new-branch"));

    assert_eq!(admin.delete_branch().unwrap(), ActionOutcome::Applied);
    assert!(admin.branches().is_empty());
    assert_eq!(admin.active_slug(), None);
    assert_eq!(admin.panel_title(), "Add a branch to get started");

    let err = admin.add_menu_item(MenuItemInput::cleared()).unwrap_err();
    assert_eq!(err.code, ErrorCode::NoActiveBranch);
}

#[test]
fn test_declined_confirmations_change_nothing() {
    let (mut admin, slots) = open_no();
    let before = admin.document().clone();
    let raw_before = slots.read("bb_admin_data").unwrap();
    let item_id = admin.active_branch().unwrap().menu[0].id.clone();

    assert_eq!(admin.delete_branch().unwrap(), ActionOutcome::Declined);
    assert_eq!(admin.delete_menu_item(&item_id).unwrap(), ActionOutcome::Declined);
    assert_eq!(admin.reset_to_demo().unwrap(), ActionOutcome::Declined);
    assert_eq!(admin.sign_out(), ActionOutcome::Declined);

    assert_eq!(admin.document(), &before);
    assert_eq!(slots.read("bb_admin_data").unwrap(), raw_before);
    assert_eq!(admin.session_state(), SessionState::SignedIn);
    assert!(admin.drain_notices().is_empty());
}

#[test]
fn test_update_menu_item_in_place() {
    let (mut admin, _slots) = open_yes();
    let id = admin.active_branch().unwrap().menu[0].id.clone();

    let updated = admin
        .update_menu_item(&id, MenuItemInput::new("starters", "Chili Chicken", "170", "Hot."))
        .unwrap();
    assert_eq!(updated.id, id);

    let menu = &admin.active_branch().unwrap().menu;
    assert_eq!(menu.len(), 2);
    assert_eq!(menu[0].name, "Chili Chicken");
    assert_eq!(menu[0].price, 170.0);
}

#[test]
fn test_begin_edit_removes_item_until_re_added() {
    let (mut admin, slots) = open_yes();
    let id = admin.active_branch().unwrap().menu[0].id.clone();

    let staged = admin.begin_edit_menu_item(&id).unwrap();
    assert_eq!(staged.name, "Guntur Chili Chicken");
    assert_eq!(staged.price, "165");
    assert_eq!(admin.active_branch().unwrap().menu.len(), 1);

    // removal is already persisted
    let raw = slots.read("bb_admin_data").unwrap().unwrap();
    let persisted = StoreDocument::from_json(&raw).unwrap();
    assert_eq!(persisted.branches[0].menu.len(), 1);

    let readded = admin.add_menu_item(staged).unwrap();
    assert_ne!(readded.id, id);
    assert_eq!(admin.active_branch().unwrap().menu.len(), 2);
}

#[test]
fn test_unknown_menu_item() {
    let (mut admin, _slots) = open_yes();
    let err = admin.delete_menu_item("id_missing").unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemNotFound);
    let err = admin.begin_edit_menu_item("id_missing").unwrap_err();
    assert_eq!(err.code, ErrorCode::MenuItemNotFound);
}

#[test]
fn test_storage_failure_leaves_store_unchanged() {
    let (mut admin, slots) = open_yes();
    let before = admin.document().clone();
    slots.set_read_only(true);

    let err = admin
        .add_menu_item(MenuItemInput::new("mains", "Paneer Tikka", "180", ""))
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(admin.document(), &before);

    let err = admin.add_branch().unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(admin.active_slug(), Some("Narapally"));
}

#[test]
fn test_session_gates_mutations() {
    let (mut admin, _slots) = open_yes();
    assert_eq!(admin.sign_out(), ActionOutcome::Applied);
    assert_eq!(admin.session_state(), SessionState::SignedOut);

    let err = admin.add_branch().unwrap_err();
    assert_eq!(err.code, ErrorCode::NotAuthenticated);
    // reads stay available
    assert_eq!(admin.branch_list("").len(), 1);

    let err = admin.sign_in("wrong").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidCredentials);

    admin.enter_demo_mode();
    assert_eq!(admin.session_state(), SessionState::Demo);
    assert!(admin.add_branch().is_ok());

    admin.sign_in(PASSWORD).unwrap();
    assert_eq!(admin.session_state(), SessionState::SignedIn);
}

#[test]
fn test_select_unknown_branch() {
    let (mut admin, _slots) = open_yes();
    let err = admin.select_branch("nowhere").unwrap_err();
    assert_eq!(err.code, ErrorCode::BranchNotFound);
    assert_eq!(admin.active_slug(), Some("Narapally"));
}

#[test]
fn test_views() {
    let (mut admin, _slots) = open_yes();
    assert_eq!(admin.panel_title(), "Managing: Narapally (Narapally)");

    let rows = admin.menu_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].meta, "starters · Spicy, tangy.");
    assert_eq!(rows[0].price_label, "₹165");

    admin.add_branch().unwrap();
    let list = admin.branch_list("");
    assert_eq!(list.len(), 2);
    assert!(!list[0].active && list[1].active);
    assert_eq!(list[0].meta, "Narapally · +919876543210");

    let filtered = admin.branch_list("NARA");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].slug, "Narapally");

    assert!(admin.menu_rows().is_empty());
    assert!(admin.gallery_thumbs().is_empty());
}

#[test]
fn test_notices_are_drained_in_order() {
    let (mut admin, _slots) = open_yes();
    admin.add_branch().unwrap();
    admin.save().unwrap();

    let notices = admin.drain_notices();
    let messages: Vec<_> = notices.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(messages, vec!["New branch created (local)", "Saved to local storage"]);
    assert!(notices.iter().all(|n| n.level == NoticeLevel::Info));
    assert!(admin.drain_notices().is_empty());
}
