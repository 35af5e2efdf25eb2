use dashboard_lib::DashboardError;
use dashboard_lib::filter::MatchMode;
use dashboard_lib::listing::Listing;
use dashboard_lib::model::Row;
use dashboard_lib::sort::{SortDirection, SortState};

fn users(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            Row::new()
                .set("id", i as i64)
                .set("name", format!("user{:02}", i))
                .set("status", if i % 2 == 0 { "Active" } else { "Expired" })
        })
        .collect()
}

fn ids(rows: &[Row]) -> Vec<i64> {
    rows.iter().filter_map(|r| r.id().as_i64()).collect()
}

fn listing(n: usize, page_size: usize) -> Listing {
    Listing::new(users(n), ["name", "status"], page_size).unwrap()
}

#[test]
fn test_zero_page_size_rejected() {
    assert!(matches!(
        Listing::new(users(3), ["name"], 0),
        Err(DashboardError::InvalidPageSize)
    ));
}

#[test]
fn test_page_rows_slice_visible_rows() {
    let mut listing = listing(25, 10);
    assert_eq!(listing.pagination().total_pages(), 3);
    assert_eq!(ids(listing.page_rows()), (0..10).collect::<Vec<_>>());

    listing.next();
    assert_eq!(ids(listing.page_rows()), (10..20).collect::<Vec<_>>());

    listing.go_to(3);
    assert_eq!(ids(listing.page_rows()), (20..25).collect::<Vec<_>>());

    listing.prev();
    assert_eq!(listing.pagination().current_page(), 2);
}

#[test]
fn test_query_resets_to_first_page() {
    let mut listing = listing(25, 5);
    listing.go_to(4);

    listing.set_query("expired");
    assert_eq!(listing.pagination().current_page(), 1);
    assert_eq!(listing.pagination().total_items(), 12);
    assert_eq!(listing.rows().len(), 25);
}

#[test]
fn test_exact_filter_resets_to_first_page() {
    let mut listing = listing(25, 5);
    listing.go_to(2);

    listing.set_exact_filter("status", "active");
    assert_eq!(listing.pagination().current_page(), 1);
    assert_eq!(listing.visible_rows().len(), 13);

    listing.clear_filters();
    assert_eq!(listing.visible_rows().len(), 25);
    assert_eq!(listing.pagination().current_page(), 1);
}

#[test]
fn test_match_mode_change_refilters() {
    let mut listing = listing(12, 5);
    listing.set_query("usr11");
    assert!(listing.visible_rows().is_empty());

    listing.set_match_mode(MatchMode::Fuzzy);
    assert_eq!(ids(listing.visible_rows()), vec![11]);
}

#[test]
fn test_page_size_change_resets_to_first_page() {
    let mut listing = listing(40, 5);
    listing.go_to(6);
    listing.set_page_size(20).unwrap();
    assert_eq!(listing.pagination().current_page(), 1);
    assert_eq!(listing.pagination().total_pages(), 2);
    assert!(listing.set_page_size(0).is_err());
}

#[test]
fn test_toggle_sort_keeps_page() {
    let mut listing = listing(25, 10);
    listing.go_to(2);

    assert!(listing.toggle_sort("name", true));
    assert_eq!(listing.pagination().current_page(), 2);
    assert!(listing.toggle_sort("name", true));
    assert_eq!(
        *listing.sort(),
        SortState::by("name", SortDirection::Descending)
    );
    assert_eq!(ids(listing.page_rows()), (5..15).rev().collect::<Vec<_>>());
}

#[test]
fn test_sort_ties_do_not_depend_on_sort_history() {
    let rows = vec![
        Row::new().set("id", 1).set("name", "x").set("score", 2),
        Row::new().set("id", 2).set("name", "x").set("score", 1),
    ];
    let mut listing = Listing::new(rows, ["name"], 10).unwrap();

    listing.toggle_sort("score", true);
    assert_eq!(ids(listing.visible_rows()), vec![2, 1]);

    // Equal names keep their original order, not the previous sort's.
    listing.toggle_sort("name", true);
    assert_eq!(ids(listing.visible_rows()), vec![1, 2]);

    listing.set_query("");
    assert_eq!(ids(listing.visible_rows()), vec![1, 2]);
}

#[test]
fn test_unsortable_toggle_is_ignored() {
    let mut listing = listing(3, 10);
    assert!(!listing.toggle_sort("status", false));
    assert!(!listing.sort().is_active());
}

#[test]
fn test_sort_survives_refilter() {
    let mut listing = listing(10, 10);
    listing.set_sort(SortState::by("name", SortDirection::Descending));
    listing.set_exact_filter("status", "Active");
    assert_eq!(ids(listing.visible_rows()), vec![8, 6, 4, 2, 0]);
}

#[test]
fn test_set_rows_clamps_page() {
    let mut listing = listing(50, 10);
    listing.go_to(5);

    listing.set_rows(users(12));
    assert_eq!(listing.pagination().current_page(), 2);
    assert_eq!(ids(listing.page_rows()), vec![10, 11]);
}

#[test]
fn test_remove_by_id() {
    let mut listing = listing(11, 10);
    listing.go_to(2);

    assert_eq!(listing.remove_by_id("10"), 1);
    assert_eq!(listing.pagination().current_page(), 1);
    assert_eq!(listing.pagination().total_items(), 10);
    assert_eq!(listing.remove_by_id("99"), 0);
}
