use approx::assert_relative_eq;
use echoloc::math::{Point3, Vector3};
use echoloc::Transform;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn identity_leaves_points_alone() {
    let p = Point3::new(3.0, -7.0, 11.0);
    assert_eq!(Transform::identity().apply(p), p);
}

#[test]
fn translation_moves_point() {
    let t = Transform::translation(Vector3::new(1.0, -2.0, 3.0));
    let p = t.apply(Point3::new(10.0, 10.0, 10.0));
    assert_relative_eq!(p.x, 11.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 8.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 13.0, epsilon = 1e-12);
}

#[test]
fn rotation_x_carries_z_toward_y() {
    let p = Transform::rotation_x(FRAC_PI_2).apply(Point3::new(0.0, 0.0, 1.0));
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
}

#[test]
fn rotation_y_carries_x_toward_z() {
    let p = Transform::rotation_y(FRAC_PI_2).apply(Point3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 1.0, epsilon = 1e-12);
}

#[test]
fn rotation_z_carries_y_toward_x() {
    let p = Transform::rotation_z(FRAC_PI_2).apply(Point3::new(0.0, 1.0, 0.0));
    assert_relative_eq!(p.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
}

#[test]
fn full_turn_is_identity() {
    let p = Point3::new(2.0, 3.0, 5.0);
    let q = Transform::rotation_z(2.0 * PI).apply(p);
    assert_relative_eq!(q.x, p.x, epsilon = 1e-12);
    assert_relative_eq!(q.y, p.y, epsilon = 1e-12);
    assert_relative_eq!(q.z, p.z, epsilon = 1e-12);
}

#[test]
fn compose_applies_right_operand_first() {
    let translate = Transform::translation(Vector3::new(1.0, 0.0, 0.0));
    let rotate = Transform::rotation_z(FRAC_PI_2);
    let origin = Point3::new(0.0, 0.0, 0.0);

    // Translate, then rotate: (1, 0, 0) swings to (0, -1, 0).
    let p = rotate.compose(&translate).apply(origin);
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, -1.0, epsilon = 1e-12);

    // Rotate, then translate: the origin just translates.
    let q = translate.compose(&rotate).apply(origin);
    assert_relative_eq!(q.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(q.y, 0.0, epsilon = 1e-12);
}

#[test]
fn opposite_rotations_cancel() {
    let p = Point3::new(4.0, -1.0, 2.5);
    let round_trip = Transform::rotation_x(-0.7)
        .compose(&Transform::rotation_x(0.7))
        .apply(p);
    assert_relative_eq!(round_trip.x, p.x, epsilon = 1e-12);
    assert_relative_eq!(round_trip.y, p.y, epsilon = 1e-12);
    assert_relative_eq!(round_trip.z, p.z, epsilon = 1e-12);
}

#[test]
fn row_major_layout_puts_translation_in_fourth_column() {
    let flat = Transform::translation(Vector3::new(1.0, 2.0, 3.0)).to_row_major();
    assert_eq!(flat[3], 1.0);
    assert_eq!(flat[7], 2.0);
    assert_eq!(flat[11], 3.0);
    assert_eq!(flat[15], 1.0);
}

#[test]
fn row_major_round_trip() {
    let original = Transform::rotation_y(0.4)
        .compose(&Transform::translation(Vector3::new(-2.0, 8.0, 0.5)));
    let rebuilt = Transform::from_row_major(original.to_row_major());
    assert_eq!(rebuilt, original);
}
