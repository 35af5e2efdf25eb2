use dashboard_lib::column::{Alignment, ColumnSpec};
use dashboard_lib::display::{DisplayValue, Tone};
use dashboard_lib::model::Row;
use dashboard_lib::pager::{DynamicPagination, PagerConfig};
use dashboard_lib::pagination::PaginationState;
use dashboard_lib::render::TextRenderer;
use dashboard_lib::render::text::{display_width, fit, truncate_to_width};
use dashboard_lib::sort::{SortDirection, SortState};
use dashboard_lib::table::DataTable;

fn sample() -> Vec<Row> {
    vec![
        Row::new().set("id", 1).set("name", "Ada").set("amount", 12),
        Row::new().set("id", 2).set("name", "Grace").set("amount", 7),
    ]
}

#[test]
fn test_truncate_to_width() {
    assert_eq!(truncate_to_width("hello", 10), "hello");
    assert_eq!(truncate_to_width("hello world", 6), "hello…");
    assert_eq!(truncate_to_width("hello", 0), "");
}

#[test]
fn test_truncate_wide_chars() {
    assert_eq!(display_width("日本語"), 6);
    let cut = truncate_to_width("日本語", 4);
    assert_eq!(cut, "日…");
    assert!(display_width(&cut) <= 4);
}

#[test]
fn test_fit_alignment() {
    assert_eq!(fit("ab", 5, Alignment::Left), "ab   ");
    assert_eq!(fit("ab", 5, Alignment::Right), "   ab");
    assert_eq!(fit("ab", 5, Alignment::Center), " ab  ");
    assert_eq!(fit("abcdef", 4, Alignment::Left), "abc…");
}

#[test]
fn test_table_grid() {
    let table = DataTable::new(vec![
        ColumnSpec::new("Name", "name"),
        ColumnSpec::new("Amount", "amount").align(Alignment::Right),
    ]);
    let out = TextRenderer::new(80).render_table(&table.render(&sample()));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines[0], "Name  │ Amount");
    assert_eq!(lines[1], "──────┼───────");
    assert_eq!(lines[2], "Ada   │     12");
    assert_eq!(lines[3], "Grace │      7");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_sort_indicators_in_header() {
    let table = DataTable::new(vec![
        ColumnSpec::new("Name", "name").sortable(),
        ColumnSpec::new("Amount", "amount").sortable(),
    ])
    .sort_state(SortState::by("amount", SortDirection::Descending));
    let out = TextRenderer::new(80).render_table(&table.render(&sample()));
    let header = out.lines().next().unwrap();

    assert!(header.contains("Name ↕"));
    assert!(header.contains("Amount ▼"));
}

#[test]
fn test_placeholder_row() {
    let table = DataTable::new(vec![
        ColumnSpec::new("Name", "name"),
        ColumnSpec::new("Email", "email"),
    ]);
    let out = TextRenderer::new(80).render_table(&table.render(&[]));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2].trim(), "No data found.");
}

#[test]
fn test_synthesized_actions() {
    let table = DataTable::new(vec![ColumnSpec::new("Name", "name")])
        .on_view(|_| {})
        .on_delete(|_| {});
    let out = TextRenderer::new(80).render_table(&table.render(&sample()));
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].ends_with("Action"));
    assert!(lines[2].ends_with("View details  ✕"));
}

#[test]
fn test_internal_controls_line() {
    let table = DataTable::new(vec![ColumnSpec::new("Name", "name")])
        .current_page(1)
        .items_per_page(1)
        .on_page_change(|_| {});
    let out = TextRenderer::new(80).render_table(&table.render(&sample()));

    assert!(out.contains("Page 1 of 2"));
    assert!(out.contains("Next ›"));
    assert!(!out.contains("‹ Previous"));
}

#[test]
fn test_columns_shrink_to_width() {
    let rows = vec![Row::new().set("a", "x".repeat(30)).set("b", "y".repeat(30))];
    let table = DataTable::new(vec![ColumnSpec::new("A", "a"), ColumnSpec::new("B", "b")]);
    let out = TextRenderer::new(40).render_table(&table.render(&rows));

    for line in out.lines() {
        assert!(display_width(line) <= 40, "line too wide: {:?}", line);
    }
    assert!(out.contains('…'));
}

#[test]
fn test_percent_width() {
    let table = DataTable::new(vec![
        ColumnSpec::new("Name", "name").width("50%"),
        ColumnSpec::new("Amount", "amount"),
    ]);
    let out = TextRenderer::new(40).render_table(&table.render(&sample()));
    let header = out.lines().next().unwrap();
    assert!(header.starts_with(&format!("{:<20} │", "Name")));
}

#[test]
fn test_oversized_width_hints_are_capped() {
    let table = DataTable::new(vec![
        ColumnSpec::new("Name", "name").width("1e12%"),
        ColumnSpec::new("Amount", "amount").width("4294967295px"),
    ]);
    let out = TextRenderer::new(80).render_table(&table.render(&sample()));

    for line in out.lines() {
        assert!(display_width(line) <= 80, "line too wide: {:?}", line);
    }
    assert!(out.contains("Ada"));
}

#[test]
fn test_pager_line() {
    let pager = DynamicPagination::new(|_| {})
        .on_items_per_page_change(|_| {})
        .with_config(PagerConfig::new().with_show_page_size(true));
    let state = PaginationState::at_page(10, 100, 5).unwrap();
    let line = TextRenderer::new(120).render_pager(&pager.view(&state).unwrap());

    assert!(line.starts_with("‹ 4 [5] 6 … 10 ›"));
    assert!(line.contains("Showing 41 to 50 of 100 entries"));
    assert!(line.contains("per page: 10 (5/10/15/20/25/30/50)"));
}

#[test]
fn test_render_joins_table_and_pager() {
    let table = DataTable::new(vec![ColumnSpec::new("Name", "name")]);
    let pager = DynamicPagination::new(|_| {});
    let state = PaginationState::new(10, 2).unwrap();
    let out = TextRenderer::new(80).render(&table.render(&sample()), pager.view(&state).as_ref());

    assert_eq!(out.lines().last(), Some("  [1]"));
}

#[test]
fn test_colored_output_uses_ansi() {
    let table = DataTable::new(vec![ColumnSpec::new("Status", "status").formatter(|value, _row| {
        DisplayValue::badge(value.render_text(), Tone::Positive)
    })]);
    let rows = vec![Row::new().set("status", "Active")];

    let plain = TextRenderer::new(80).render_table(&table.render(&rows));
    assert!(!plain.contains('\u{1b}'));
    assert!(plain.contains("[Active]"));

    let colored = TextRenderer::new(80)
        .colored(true)
        .render_table(&table.render(&rows));
    assert!(colored.contains('\u{1b}'));
}
