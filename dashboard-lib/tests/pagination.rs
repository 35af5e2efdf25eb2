use dashboard_lib::DashboardError;
use dashboard_lib::pagination::{PageAction, PageItem, PaginationState};

#[test]
fn test_total_pages_is_ceiling() {
    for (total, size, pages) in [
        (0, 10, 0),
        (1, 10, 1),
        (10, 10, 1),
        (11, 10, 2),
        (23, 10, 3),
        (50, 5, 10),
    ] {
        let state = PaginationState::new(size, total).unwrap();
        assert_eq!(state.total_pages(), pages, "total={} size={}", total, size);
    }
}

#[test]
fn test_next_and_prev_flags_follow_position() {
    let mut state = PaginationState::new(10, 23).unwrap();
    assert!(state.has_next_page());
    assert!(!state.has_prev_page());

    state.jump_to(2);
    assert!(state.has_next_page());
    assert!(state.has_prev_page());

    state.jump_to(3);
    assert!(!state.has_next_page());
    assert!(state.has_prev_page());
}

#[test]
fn test_no_pages_when_empty() {
    let state = PaginationState::new(10, 0).unwrap();
    assert_eq!(state.current_page(), 1);
    assert!(!state.has_next_page());
    assert!(!state.has_prev_page());
}

#[test]
fn test_zero_page_size_rejected() {
    assert!(matches!(
        PaginationState::new(0, 5),
        Err(DashboardError::InvalidPageSize)
    ));

    let mut state = PaginationState::new(10, 5).unwrap();
    assert!(state.set_page_size(0).is_err());
    assert_eq!(state.items_per_page(), 10);
    assert!(!state.apply(PageAction::SetPageSize(0)));
}

#[test]
fn test_page_size_change_resets_to_first_page() {
    let mut state = PaginationState::new(5, 100).unwrap();
    state.jump_to(7);
    assert_eq!(state.current_page(), 7);

    state.set_page_size(25).unwrap();
    assert_eq!(state.current_page(), 1);
    assert_eq!(state.items_per_page(), 25);
    assert_eq!(state.total_pages(), 4);
}

#[test]
fn test_page_size_change_to_same_size_still_resets() {
    let mut state = PaginationState::new(10, 100).unwrap();
    state.jump_to(4);
    assert!(state.apply(PageAction::SetPageSize(10)));
    assert_eq!(state.current_page(), 1);
}

#[test]
fn test_showing_range_on_last_page() {
    let state = PaginationState::at_page(10, 23, 3).unwrap();
    let range = state.showing_range();
    assert_eq!(range.start, 21);
    assert_eq!(range.end, 23);
    assert_eq!(range.to_string(), "Showing 21 to 23 of 23 entries");
}

#[test]
fn test_showing_range_empty() {
    let state = PaginationState::new(10, 0).unwrap();
    assert_eq!(state.showing_range().to_string(), "Showing 0 to 0 of 0 entries");
}

#[test]
fn test_next_on_last_page_is_ignored() {
    let mut state = PaginationState::at_page(10, 23, 3).unwrap();
    assert!(!state.next_page());
    assert_eq!(state.current_page(), 3);
}

#[test]
fn test_prev_on_first_page_is_ignored() {
    let mut state = PaginationState::new(10, 23).unwrap();
    assert!(!state.prev_page());
    assert_eq!(state.current_page(), 1);
}

#[test]
fn test_jump_outside_range_is_ignored() {
    let mut state = PaginationState::new(10, 23).unwrap();
    assert!(!state.jump_to(0));
    assert!(!state.jump_to(4));
    assert_eq!(state.current_page(), 1);
    assert!(state.jump_to(3));
    assert_eq!(state.current_page(), 3);
}

#[test]
fn test_shrinking_total_clamps_page() {
    let mut state = PaginationState::at_page(10, 100, 9).unwrap();
    state.set_total(35);
    assert_eq!(state.current_page(), 4);

    state.set_total(0);
    assert_eq!(state.current_page(), 1);
}

#[test]
fn test_growing_total_keeps_page() {
    let mut state = PaginationState::at_page(10, 30, 2).unwrap();
    state.set_total(300);
    assert_eq!(state.current_page(), 2);
}

#[test]
fn test_at_page_clamps() {
    assert_eq!(PaginationState::at_page(10, 25, 99).unwrap().current_page(), 3);
    assert_eq!(PaginationState::at_page(10, 25, 0).unwrap().current_page(), 1);
}

#[test]
fn test_slice_bounds() {
    let state = PaginationState::at_page(10, 25, 2).unwrap();
    assert_eq!(state.slice_bounds(), 10..20);

    let last = PaginationState::at_page(10, 25, 3).unwrap();
    assert_eq!(last.slice_bounds(), 20..25);
}

#[test]
fn test_page_slice_tolerates_short_input() {
    let state = PaginationState::at_page(10, 25, 3).unwrap();
    let items: Vec<u32> = (0..12).collect();
    assert!(state.page_slice(&items).is_empty());
}

#[test]
fn test_page_window_near_start() {
    let state = PaginationState::new(10, 100).unwrap();
    assert_eq!(
        state.page_window(3),
        vec![
            PageItem::Page(1),
            PageItem::Page(2),
            PageItem::Page(3),
            PageItem::Ellipsis,
            PageItem::Page(10),
        ]
    );
}

#[test]
fn test_page_window_centers_on_current() {
    let state = PaginationState::at_page(10, 100, 5).unwrap();
    assert_eq!(
        state.page_window(3),
        vec![
            PageItem::Page(4),
            PageItem::Page(5),
            PageItem::Page(6),
            PageItem::Ellipsis,
            PageItem::Page(10),
        ]
    );
}

#[test]
fn test_page_window_at_end() {
    let state = PaginationState::at_page(10, 100, 10).unwrap();
    assert_eq!(
        state.page_window(3),
        vec![PageItem::Page(8), PageItem::Page(9), PageItem::Page(10)]
    );
}

#[test]
fn test_page_window_no_ellipsis_when_adjacent() {
    let state = PaginationState::at_page(10, 50, 3).unwrap();
    assert_eq!(
        state.page_window(3),
        vec![
            PageItem::Page(2),
            PageItem::Page(3),
            PageItem::Page(4),
            PageItem::Page(5),
        ]
    );
}

#[test]
fn test_page_window_fewer_pages_than_window() {
    let state = PaginationState::new(10, 15).unwrap();
    assert_eq!(state.page_window(3), vec![PageItem::Page(1), PageItem::Page(2)]);
    assert!(PaginationState::new(10, 0).unwrap().page_window(3).is_empty());
}

#[test]
fn test_pagination_laws_hold_across_grid() {
    for total in 0..=40_usize {
        for size in 1..=12_usize {
            let pages = total.div_ceil(size);
            for page in 1..=pages.max(1) {
                let state = PaginationState::at_page(size, total, page).unwrap();
                let ctx = format!("total={} size={} page={}", total, size, page);

                assert_eq!(state.current_page(), page, "{}", ctx);
                assert_eq!(state.total_pages(), pages, "{}", ctx);
                assert_eq!(state.has_next_page(), page < pages, "{}", ctx);
                assert_eq!(state.has_prev_page(), page > 1, "{}", ctx);

                let range = state.showing_range();
                let bounds = state.slice_bounds();
                if total == 0 {
                    assert_eq!((range.start, range.end, range.total), (0, 0, 0), "{}", ctx);
                    assert!(bounds.is_empty(), "{}", ctx);
                } else {
                    assert_eq!(range.start, (page - 1) * size + 1, "{}", ctx);
                    assert_eq!(range.end, (page * size).min(total), "{}", ctx);
                    assert_eq!(range.end - range.start + 1, bounds.len(), "{}", ctx);
                    assert_eq!(bounds.start + 1, range.start, "{}", ctx);
                }
            }
        }
    }
}
