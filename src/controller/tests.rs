//! Tests for the table controller.

use super::*;
use crate::paginator::PageSource;
use crate::record::{Field, Record, Role};

fn users(ids: impl IntoIterator<Item = i64>) -> Vec<Record> {
    ids.into_iter()
        .map(|id| {
            let role = if id % 5 == 0 { Role::Admin } else { Role::Member };
            Record::new(id, format!("User {id}"), format!("user{id}@example.com"), role)
        })
        .collect()
}

fn loaded(ids: impl IntoIterator<Item = i64>) -> Controller {
    let mut table = Controller::new();
    table.load(users(ids));
    table
}

fn page_ids(table: &Controller) -> Vec<i64> {
    table.page_rows().iter().map(|row| row.record.id).collect()
}

#[test]
fn test_load_starts_on_first_page_with_clear_flags() {
    let table = loaded(1..=23);

    assert!(table.is_loaded());
    assert!(table.error().is_none());
    assert_eq!(table.len(), 23);
    assert_eq!(table.window().current_page, 1);
    assert_eq!(table.window().pages, vec![1, 2, 3]);
    assert_eq!(page_ids(&table), (1..=10).collect::<Vec<_>>());
    assert!(table
        .records()
        .iter()
        .all(|r| table.flags(r.id) == UiFlags::default()));
}

#[test]
fn test_page_change_to_second_page() {
    let mut table = loaded(1..=23);

    assert!(table.page_change(PageSource::Page(2)));
    assert_eq!(table.window().items, (10..=19).collect::<Vec<_>>());
    assert_eq!(page_ids(&table), (11..=20).collect::<Vec<_>>());
}

#[test]
fn test_page_change_sources() {
    let mut table = loaded(1..=45);

    table.page_change(PageSource::End);
    assert_eq!(table.window().current_page, 5);
    assert_eq!(page_ids(&table), (41..=45).collect::<Vec<_>>());

    table.page_change(PageSource::Prev);
    assert_eq!(table.window().current_page, 4);

    table.page_change(PageSource::Start);
    assert_eq!(table.window().current_page, 1);

    // Prev on the first page stays put.
    assert!(!table.page_change(PageSource::Prev));
    assert_eq!(table.window().current_page, 1);
}

#[test]
fn test_page_change_clears_selection() {
    let mut table = loaded(1..=23);
    table.toggle_select(3);
    table.select_all(true);
    assert!(table.all_selected());

    table.page_change(PageSource::Next);
    assert!(!table.all_selected());
    assert!(table.selected_ids().is_empty());
}

#[test]
fn test_search_filters_case_insensitively() {
    let mut table = loaded(1..=23);

    table.search("USER1");
    let ids: Vec<i64> = table.filtered_records().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19]);

    table.search("admin");
    let ids: Vec<i64> = table.filtered_records().map(|r| r.id).collect();
    assert_eq!(ids, vec![5, 10, 15, 20]);

    table.search("nobody");
    assert!(table.is_empty());
    assert!(table.window().is_empty());
    assert!(table.page_rows().is_empty());
}

#[test]
fn test_search_round_trip_restores_full_list() {
    let mut table = loaded(1..=23);
    table.search("");
    table.search("user 2");
    assert_eq!(table.len(), 5);

    table.search("");
    let filtered: Vec<&Record> = table.filtered_records().collect();
    let all: Vec<&Record> = table.records().iter().collect();
    assert_eq!(filtered, all);
}

#[test]
fn test_search_resets_page_and_selection() {
    let mut table = loaded(1..=23);
    table.page_change(PageSource::End);
    table.toggle_select(21);

    table.search("user");
    assert_eq!(table.window().current_page, 1);
    assert!(!table.is_selected(21));
}

#[test]
fn test_search_resizes_page_window() {
    let mut table = loaded(1..=45);
    assert_eq!(table.window().total_pages, 5);

    table.search("user 1");
    // 1, 10..=19
    assert_eq!(table.len(), 11);
    assert_eq!(table.window().total_pages, 2);
    assert_eq!(page_ids(&table), vec![1, 10, 11, 12, 13, 14, 15, 16, 17, 18]);
}

#[test]
fn test_edit_save_applies_non_empty_fields() {
    let mut table = loaded(1..=3);

    table.toggle_edit(2);
    assert!(table.is_editing(2));
    table.update_field(2, Field::Name, "Grace Hopper");
    table.update_field(2, Field::Email, "");
    table.update_field(2, Field::Role, "admin");
    table.save(2);

    let record = table.record(2).unwrap();
    assert_eq!(record.name, "Grace Hopper");
    assert_eq!(record.email, "user2@example.com");
    assert_eq!(record.role, Role::Admin);
    assert!(!table.is_editing(2));
    assert!(table.pending(2).is_none());
}

#[test]
fn test_save_keeps_role_when_staged_role_is_unknown() {
    let mut table = loaded(1..=3);
    table.toggle_edit(1);
    table.update_field(1, Field::Role, "owner");
    table.save(1);
    assert_eq!(table.record(1).unwrap().role, Role::Member);
}

#[test]
fn test_save_then_edit_cancel_leaves_saved_values() {
    let mut table = loaded(1..=3);
    table.toggle_edit(1);
    table.update_field(1, Field::Name, "Ada");
    table.save(1);
    let saved = table.record(1).unwrap().clone();

    table.toggle_edit(1);
    table.update_field(1, Field::Name, "Someone else");
    table.cancel(1);

    assert_eq!(table.record(1).unwrap(), &saved);
    assert!(!table.is_editing(1));
}

#[test]
fn test_update_requires_edit_mode() {
    let mut table = loaded(1..=3);
    table.update_field(1, Field::Name, "Ignored");
    assert!(table.pending(1).is_none());

    table.save(1);
    assert_eq!(table.record(1).unwrap().name, "User 1");
}

#[test]
fn test_edit_buffers_are_per_record() {
    let mut table = loaded(1..=3);
    table.toggle_edit(1);
    table.toggle_edit(2);
    table.update_field(1, Field::Name, "First");
    table.update_field(2, Field::Name, "Second");

    table.cancel(1);
    assert_eq!(
        table.pending(2).and_then(|p| p.get(Field::Name)),
        Some("Second")
    );

    table.save(2);
    assert_eq!(table.record(1).unwrap().name, "User 1");
    assert_eq!(table.record(2).unwrap().name, "Second");
}

#[test]
fn test_reentering_edit_keeps_staged_values() {
    let mut table = loaded(1..=3);
    table.toggle_edit(3);
    table.update_field(3, Field::Email, "new@example.com");
    table.toggle_edit(3);
    assert_eq!(
        table.pending(3).and_then(|p| p.get(Field::Email)),
        Some("new@example.com")
    );
}

#[test]
fn test_page_rows_show_staged_values() {
    let mut table = loaded(1..=3);
    table.toggle_edit(1);
    table.update_field(1, Field::Name, "Typing…");

    let rows = table.page_rows();
    assert_eq!(rows[0].display_value(Field::Name), "Typing…");
    assert_eq!(rows[0].display_value(Field::Role), "Member");
    assert_eq!(rows[1].display_value(Field::Name), "User 2");
}

#[test]
fn test_unknown_ids_are_ignored() {
    let mut table = loaded(1..=3);
    let before = table.records().to_vec();

    table.toggle_edit(99);
    table.update_field(99, Field::Name, "x");
    table.save(99);
    table.cancel(99);
    table.delete(99);
    table.toggle_select(99);

    assert_eq!(table.records(), before.as_slice());
    assert!(table.selected_ids().is_empty());
    assert!(table.pending(99).is_none());
}

#[test]
fn test_toggle_select_clears_select_all() {
    let mut table = loaded(1..=5);
    table.select_all(true);
    assert!(table.all_selected());

    table.toggle_select(2);
    assert!(!table.all_selected());
    assert!(!table.is_selected(2));
    assert_eq!(table.selected_ids(), vec![1, 3, 4, 5]);
}

#[test]
fn test_select_all_round_trip() {
    let mut table = loaded(1..=23);
    table.page_change(PageSource::Page(2));

    table.select_all(true);
    assert_eq!(table.selected_ids(), (11..=20).collect::<Vec<_>>());

    table.select_all(false);
    assert!(table.selected_ids().is_empty());
    assert!(!table.all_selected());
}

#[test]
fn test_select_all_is_positional_under_a_filter() {
    let mut table = loaded(1..=23);
    table.search("admin");

    table.select_all(true);
    assert_eq!(table.selected_ids(), vec![5, 10, 15, 20]);
}

#[test]
fn test_select_all_id_range_mode() {
    let mut table = Controller::new().with_selection_mode(SelectionMode::IdRange);
    table.load(users(1..=23));
    table.page_change(PageSource::Page(2));

    // Dense 1-based ids: the id range lines up with the visible rows.
    table.select_all(true);
    assert_eq!(table.selected_ids(), (11..=20).collect::<Vec<_>>());
    table.select_all(false);
    assert!(table.selected_ids().is_empty());

    // Sparse ids: the id range no longer describes the page.
    let mut sparse = Controller::new().with_selection_mode(SelectionMode::IdRange);
    sparse.load(users([3, 8, 40, 41]));
    sparse.select_all(true);
    // Page 1 covers indices 0..=3, so only ids in 1..=4 qualify.
    assert_eq!(sparse.selected_ids(), vec![3]);
}

#[test]
fn test_delete_keeps_page_when_possible() {
    let mut table = loaded(1..=23);
    table.page_change(PageSource::Page(2));

    table.delete(11);
    assert_eq!(table.len(), 22);
    assert_eq!(table.window().current_page, 2);
    assert_eq!(page_ids(&table), (12..=21).collect::<Vec<_>>());
}

#[test]
fn test_delete_last_row_of_last_page_moves_back() {
    let mut table = loaded(1..=21);
    table.page_change(PageSource::End);
    assert_eq!(page_ids(&table), vec![21]);

    table.delete(21);
    assert_eq!(table.window().total_pages, 2);
    assert_eq!(table.window().current_page, 2);
    assert_eq!(page_ids(&table), (11..=20).collect::<Vec<_>>());
}

#[test]
fn test_delete_respects_filter() {
    let mut table = loaded(1..=23);
    table.search("admin");
    table.delete(10);
    let ids: Vec<i64> = table.filtered_records().map(|r| r.id).collect();
    assert_eq!(ids, vec![5, 15, 20]);
    assert_eq!(table.records().len(), 22);
}

#[test]
fn test_delete_selected() {
    let mut table = loaded(1..=12);
    table.toggle_select(2);
    table.toggle_select(4);
    table.toggle_edit(4);

    table.delete_selected();
    assert_eq!(table.records().len(), 10);
    assert!(table.record(2).is_none());
    assert!(table.record(4).is_none());
    assert!(table.pending(4).is_none());
    assert!(table.selected_ids().is_empty());
    assert_eq!(table.window().total_pages, 1);
}

#[test]
fn test_delete_selected_without_selection_is_a_no_op() {
    let mut table = loaded(1..=12);
    let before = table.records().to_vec();

    table.delete_selected();
    table.delete_selected();
    assert_eq!(table.records(), before.as_slice());
}

#[test]
fn test_delete_selected_whole_last_page() {
    let mut table = loaded(1..=23);
    table.page_change(PageSource::End);
    table.select_all(true);

    table.delete_selected();
    assert_eq!(table.len(), 20);
    assert_eq!(table.window().current_page, 2);
    assert!(!table.all_selected());
}

#[test]
fn test_load_failure_leaves_empty_list() {
    let mut table = loaded(1..=5);
    let err = serde_json::from_str::<Vec<Record>>("not json").unwrap_err();

    table.load_failed(err.into());
    assert!(table.is_empty());
    assert!(table.records().is_empty());
    assert!(table.window().is_empty());
    assert!(table.error().is_some_and(|e| e.is_parse()));

    table.load(users(1..=2));
    assert!(table.error().is_none());
    assert_eq!(table.len(), 2);
}

#[test]
fn test_reload_keeps_search_term() {
    let mut table = loaded(1..=23);
    table.search("admin");
    table.load(users(1..=30));
    assert_eq!(table.search_term(), "admin");
    assert_eq!(table.len(), 6);
}

#[test]
fn test_custom_page_size() {
    let mut table = Controller::new().with_items_per_page(4).with_pages_per_view(3);
    table.load(users(1..=30));
    assert_eq!(table.window().total_pages, 8);
    assert_eq!(table.window().pages, vec![1, 2, 3]);

    table.page_change(PageSource::Page(5));
    assert_eq!(table.window().pages, vec![4, 5, 6]);
    assert_eq!(page_ids(&table), vec![17, 18, 19, 20]);
}
