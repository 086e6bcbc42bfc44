use std::time::Duration;

use super::*;

fn photos(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| format!("data:image/jpeg;base64,{i}")).collect()
}

// =============================================================
// Capping and appending
// =============================================================

#[test]
fn append_keeps_min_of_total_and_cap() {
    for (m, n) in [(0, 0), (0, 5), (10, 5), (28, 2), (28, 5), (30, 1), (0, 45)] {
        let existing = photos(0..m);
        let incoming = photos(m..m + n);
        let next = append_photos(&existing, incoming);
        assert_eq!(next.len(), (m + n).min(PHOTO_CAP), "m={m} n={n}");
    }
}

#[test]
fn append_keeps_most_recent_last() {
    let next = append_photos(&photos(0..29), photos(29..33));
    assert_eq!(next.first(), Some(&photos(3..4)[0]));
    assert_eq!(next.last(), Some(&photos(32..33)[0]));
}

#[test]
fn checked_photos_trims_and_validates() {
    assert_eq!(checked_photos(photos(0..40)).map(|p| p.len()), Some(PHOTO_CAP));
    assert_eq!(checked_photos(vec!["https://example.com/a.png".to_owned()]), None);
    assert_eq!(checked_photos(Vec::new()), Some(Vec::new()));
}

// =============================================================
// Paging
// =============================================================

#[test]
fn page_count_rounds_up() {
    assert_eq!(page_count(0), 0);
    assert_eq!(page_count(4), 1);
    assert_eq!(page_count(5), 2);
}

#[test]
fn page_slices_in_order() {
    let list = photos(0..6);
    assert_eq!(page(&list, 0), &list[0..4]);
    assert_eq!(page(&list, 1), &list[4..6]);
    assert!(page(&list, 2).is_empty());
}

#[test]
fn wrap_helpers_cycle() {
    assert_eq!(wrap_next(2, 3), 0);
    assert_eq!(wrap_prev(0, 3), 2);
    assert_eq!(wrap_next(0, 0), 0);
    assert_eq!(wrap_prev(0, 0), 0);
}

#[test]
fn clamp_page_after_shrink() {
    assert_eq!(clamp_page(3, 5), 1);
    assert_eq!(clamp_page(0, 0), 0);
    assert_eq!(clamp_page(1, 8), 1);
}

// =============================================================
// AlbumView navigation
// =============================================================

#[test]
fn arrows_move_pages_without_lightbox() {
    let view = AlbumView::default();
    assert_eq!(view.forward(9).page, 1);
    assert_eq!(view.back(9).page, 2);
    assert_eq!(view.forward(0).page, 0);
}

#[test]
fn arrows_move_photos_with_lightbox() {
    let view = AlbumView::default().open(0);
    assert_eq!(view.back(5).lightbox, Some(4));
    assert_eq!(view.forward(5).lightbox, Some(1));
    assert_eq!(view.forward(5).page, 0);
    assert_eq!(view.close().lightbox, None);
}

#[test]
fn clamp_drops_stale_lightbox() {
    let view = AlbumView { page: 3, lightbox: Some(10) };
    assert_eq!(view.clamp(6), AlbumView { page: 1, lightbox: None });
}

// =============================================================
// Idle autoplay
// =============================================================

#[test]
fn autoplay_waits_for_idle() {
    let view = AlbumView::default();
    assert_eq!(view.autoplay(9, Duration::from_millis(2999)), view);
    assert_eq!(view.autoplay(9, AUTOPLAY_IDLE).page, 1);
}

#[test]
fn autoplay_wraps_to_first_page() {
    let view = AlbumView { page: 2, lightbox: None };
    assert_eq!(view.autoplay(9, Duration::from_secs(10)).page, 0);
}

#[test]
fn autoplay_holds_with_one_page_or_open_lightbox() {
    let idle = Duration::from_secs(10);
    assert_eq!(AlbumView::default().autoplay(4, idle).page, 0);
    assert_eq!(AlbumView::default().autoplay(0, idle).page, 0);

    let open = AlbumView::default().open(1);
    assert_eq!(open.autoplay(9, idle), open);
}
