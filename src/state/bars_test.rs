#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// parse_width / width_css
// =============================================================

#[test]
fn parse_width_reads_numbers() {
    assert_eq!(parse_width(Some("70")), 70.0);
    assert_eq!(parse_width(Some(" 42.5 ")), 42.5);
}

#[test]
fn parse_width_tolerates_percent_suffix() {
    assert_eq!(parse_width(Some("95%")), 95.0);
}

#[test]
fn parse_width_missing_or_malformed_is_zero() {
    assert_eq!(parse_width(None), 0.0);
    assert_eq!(parse_width(Some("")), 0.0);
    assert_eq!(parse_width(Some("wide")), 0.0);
    assert_eq!(parse_width(Some("NaN")), 0.0);
    assert_eq!(parse_width(Some("inf")), 0.0);
}

#[test]
fn parse_width_clamps_to_percent_range() {
    assert_eq!(parse_width(Some("140")), 100.0);
    assert_eq!(parse_width(Some("-5")), 0.0);
    assert_eq!(width_css(parse_width(Some("-0"))), "0%");
}

#[test]
fn width_css_formats_without_trailing_zeroes() {
    assert_eq!(width_css(95.0), "95%");
    assert_eq!(width_css(0.0), "0%");
    assert_eq!(width_css(42.5), "42.5%");
}

// =============================================================
// BarGroup
// =============================================================

#[test]
fn new_group_is_pending() {
    assert!(!BarGroup::new(180).is_triggered());
}

#[test]
fn three_bars_stagger_by_180ms() {
    let mut group = BarGroup::new(180);
    let steps = group.trigger(&[Some("40"), Some("70"), Some("95")]).unwrap_or_default();
    assert_eq!(
        steps,
        vec![
            BarStep { index: 0, delay_ms: 0, width: "40%".to_owned() },
            BarStep { index: 1, delay_ms: 180, width: "70%".to_owned() },
            BarStep { index: 2, delay_ms: 360, width: "95%".to_owned() },
        ]
    );
}

#[test]
fn group_fires_once() {
    let mut group = BarGroup::new(180);
    assert!(group.trigger(&[Some("40")]).is_some());
    assert!(group.is_triggered());
    assert_eq!(group.trigger(&[Some("40")]), None);
    assert_eq!(group.trigger(&[Some("100"), Some("100")]), None);
}

#[test]
fn bar_without_target_grows_to_zero() {
    let mut group = BarGroup::new(180);
    let steps = group.trigger(&[None, Some("60")]).unwrap_or_default();
    assert_eq!(steps[0].width, "0%");
    assert_eq!(steps[1].width, "60%");
}

#[test]
fn empty_section_still_fires_once() {
    let mut group = BarGroup::new(180);
    let no_bars: [Option<&str>; 0] = [];
    assert_eq!(group.trigger(&no_bars), Some(Vec::new()));
    assert_eq!(group.trigger(&no_bars), None);
}

#[test]
fn owned_attribute_values_work() {
    let mut group = BarGroup::new(100);
    let targets = vec![Some("10".to_owned()), Some("20".to_owned())];
    let steps = group.trigger(&targets).unwrap_or_default();
    assert_eq!(steps[1].delay_ms, 100);
    assert_eq!(steps[1].width, "20%");
}
