use super::*;

fn tracker(explicit: &[Option<&str>]) -> RevealTracker {
    RevealTracker::new(explicit.iter().copied(), 70)
}

// =============================================================
// parse_leading_int
// =============================================================

#[test]
fn parses_plain_integers() {
    assert_eq!(parse_leading_int("120"), Some(120));
    assert_eq!(parse_leading_int("0"), Some(0));
}

#[test]
fn stops_at_first_non_digit() {
    assert_eq!(parse_leading_int("120ms"), Some(120));
    assert_eq!(parse_leading_int("12.9"), Some(12));
}

#[test]
fn accepts_sign_and_leading_whitespace() {
    assert_eq!(parse_leading_int("  45"), Some(45));
    assert_eq!(parse_leading_int("-30"), Some(-30));
    assert_eq!(parse_leading_int("+30"), Some(30));
}

#[test]
fn rejects_values_without_leading_digits() {
    assert_eq!(parse_leading_int("ms"), None);
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int("x12"), None);
}

#[test]
fn saturates_huge_values() {
    assert_eq!(parse_leading_int("99999999999999999999999"), Some(i64::MAX));
}

// =============================================================
// reveal_delay
// =============================================================

#[test]
fn delay_staggers_by_index() {
    assert_eq!(reveal_delay(None, 0, 70), 0);
    assert_eq!(reveal_delay(None, 1, 70), 70);
    assert_eq!(reveal_delay(None, 5, 70), 350);
}

#[test]
fn explicit_delay_overrides_index() {
    assert_eq!(reveal_delay(Some("200"), 5, 70), 200);
    assert_eq!(reveal_delay(Some("0"), 5, 70), 0);
}

#[test]
fn empty_explicit_delay_falls_back_to_index() {
    assert_eq!(reveal_delay(Some(""), 3, 70), 210);
}

#[test]
fn malformed_explicit_delay_is_zero() {
    assert_eq!(reveal_delay(Some("soon"), 3, 70), 0);
}

#[test]
fn negative_explicit_delay_is_zero() {
    assert_eq!(reveal_delay(Some("-150"), 3, 70), 0);
}

// =============================================================
// RevealTracker
// =============================================================

#[test]
fn tracker_captures_every_element() {
    let t = tracker(&[None, None, Some("500")]);
    assert_eq!(t.len(), 3);
    assert!(!t.is_empty());
    assert_eq!(t.pending(), 3);
}

#[test]
fn empty_tracker() {
    let mut t = tracker(&[]);
    assert!(t.is_empty());
    assert_eq!(t.on_intersect(0), None);
}

#[test]
fn first_intersection_yields_delay() {
    let mut t = tracker(&[None, None, None]);
    assert_eq!(t.on_intersect(2), Some(140));
    assert!(t.is_revealed(2));
}

#[test]
fn element_reveals_at_most_once() {
    let mut t = tracker(&[None, None]);
    assert_eq!(t.on_intersect(1), Some(70));
    assert_eq!(t.on_intersect(1), None);
    assert_eq!(t.on_intersect(1), None);
    assert!(t.is_revealed(1));
}

#[test]
fn revealed_never_reverts() {
    let mut t = tracker(&[None, None, None]);
    assert_eq!(t.on_intersect(0), Some(0));
    assert_eq!(t.on_intersect(2), Some(140));
    assert_eq!(t.on_intersect(0), None);
    assert!(t.is_revealed(0));
    assert!(t.is_revealed(2));
    assert!(!t.is_revealed(1));
    assert_eq!(t.pending(), 1);
}

#[test]
fn delay_is_index_based_regardless_of_batch_order() {
    let mut t = tracker(&[None, None, None, None]);
    // The observer reports a batch out of document order.
    assert_eq!(t.on_intersect(3), Some(210));
    assert_eq!(t.on_intersect(1), Some(70));
    assert_eq!(t.on_intersect(0), Some(0));
}

#[test]
fn explicit_delay_is_captured_per_element() {
    let mut t = tracker(&[None, Some("500"), None]);
    assert_eq!(t.on_intersect(1), Some(500));
    assert_eq!(t.on_intersect(2), Some(140));
}

#[test]
fn unknown_index_is_ignored() {
    let mut t = tracker(&[None]);
    assert_eq!(t.on_intersect(7), None);
    assert!(!t.is_revealed(7));
    assert_eq!(t.pending(), 1);
}

#[test]
fn tracker_accepts_owned_attribute_values() {
    let attrs = vec![Some("90".to_owned()), None];
    let mut t = RevealTracker::new(attrs, 70);
    assert_eq!(t.on_intersect(0), Some(90));
    assert_eq!(t.on_intersect(1), Some(70));
}
