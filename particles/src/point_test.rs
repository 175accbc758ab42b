#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn distance_to_self_is_zero() {
    let p = Point::new(12.5, -3.0);
    assert_eq!(p.distance(p), 0.0);
}

#[test]
fn distance_is_euclidean() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(3.0, 4.0);
    assert_eq!(a.distance(b), 5.0);
}

#[test]
fn distance_is_symmetric() {
    let a = Point::new(-7.0, 2.0);
    let b = Point::new(5.0, 11.0);
    assert_eq!(a.distance(b), b.distance(a));
}
