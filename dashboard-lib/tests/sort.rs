use dashboard_lib::column::ColumnSpec;
use dashboard_lib::model::Row;
use dashboard_lib::sort::{SortDirection, SortIndicator, SortState, sort_rows};

fn names(rows: &[Row]) -> Vec<String> {
    rows.iter().map(|r| r.value("name").render_text()).collect()
}

#[test]
fn test_click_cycle() {
    let mut sort = SortState::new();
    assert!(!sort.is_active());

    sort.click("name", true);
    assert_eq!(sort, SortState::by("name", SortDirection::Ascending));

    sort.click("name", true);
    assert_eq!(sort, SortState::by("name", SortDirection::Descending));

    sort.click("email", true);
    assert_eq!(sort, SortState::by("email", SortDirection::Ascending));
}

#[test]
fn test_active_key_never_returns_to_neutral() {
    let mut sort = SortState::new();
    for _ in 0..5 {
        sort.click("name", true);
        assert_eq!(sort.key(), Some("name"));
    }
}

#[test]
fn test_unsortable_click_is_ignored() {
    let mut sort = SortState::by("name", SortDirection::Descending);
    assert!(!sort.click("email", false));
    assert_eq!(sort, SortState::by("name", SortDirection::Descending));
}

#[test]
fn test_click_column_respects_sortable_flag() {
    let mut sort = SortState::new();
    assert!(!sort.click_column(&ColumnSpec::new("Email", "email")));
    assert!(sort.click_column(&ColumnSpec::new("Name", "name").sortable()));
    assert_eq!(sort.key(), Some("name"));
}

#[test]
fn test_clear_returns_to_neutral() {
    let mut sort = SortState::by("name", SortDirection::Descending);
    sort.clear();
    assert_eq!(sort, SortState::new());
}

#[test]
fn test_indicator_for() {
    let sort = SortState::by("name", SortDirection::Descending);
    assert_eq!(sort.indicator_for("name"), SortIndicator::Descending);
    assert_eq!(sort.indicator_for("email"), SortIndicator::Neutral);
    assert_eq!(SortState::new().indicator_for("name"), SortIndicator::Neutral);
}

#[test]
fn test_sort_rows_ascending_and_descending() {
    let mut rows = vec![
        Row::new().set("name", "charlie"),
        Row::new().set("name", "Alice"),
        Row::new().set("name", "bob"),
    ];

    sort_rows(&mut rows, &SortState::by("name", SortDirection::Ascending));
    assert_eq!(names(&rows), vec!["Alice", "bob", "charlie"]);

    sort_rows(&mut rows, &SortState::by("name", SortDirection::Descending));
    assert_eq!(names(&rows), vec!["charlie", "bob", "Alice"]);
}

#[test]
fn test_sort_rows_numeric_and_missing() {
    let mut rows = vec![
        Row::new().set("name", "a").set("amount", 30),
        Row::new().set("name", "b").set("amount", 4.5),
        Row::new().set("name", "c"),
        Row::new().set("name", "d").set("amount", 100),
    ];

    sort_rows(&mut rows, &SortState::by("amount", SortDirection::Ascending));
    assert_eq!(names(&rows), vec!["c", "b", "a", "d"]);
}

#[test]
fn test_sort_rows_is_stable() {
    let mut rows = vec![
        Row::new().set("name", "first").set("status", "win"),
        Row::new().set("name", "second").set("status", "lose"),
        Row::new().set("name", "third").set("status", "win"),
    ];

    sort_rows(&mut rows, &SortState::by("status", SortDirection::Ascending));
    assert_eq!(names(&rows), vec!["second", "first", "third"]);
}

#[test]
fn test_neutral_sort_keeps_order() {
    let mut rows = vec![Row::new().set("name", "z"), Row::new().set("name", "a")];
    sort_rows(&mut rows, &SortState::new());
    assert_eq!(names(&rows), vec!["z", "a"]);
}
