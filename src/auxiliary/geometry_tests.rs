use approx;
use nalgebra::{Point3, UnitQuaternion, Vector3};

use crate::auxiliary::geometry;

#[test]
fn test_geometry_proper_rotation_matrix() {
    let mat = geometry::proper_rotation_matrix(std::f64::consts::FRAC_PI_2, &Vector3::z(), 2);
    let p = mat * Vector3::new(1.0, 2.0, 3.0);
    approx::assert_relative_eq!(p, Vector3::new(-1.0, -2.0, 3.0), epsilon = 1e-12);
}

#[test]
fn test_geometry_torsion() {
    let p1 = Point3::new(1.0, 0.0, 0.0);
    let p2 = Point3::origin();
    let p3 = Point3::new(0.0, 0.0, 1.0);
    let p4 = Point3::new(0.0, 1.0, 1.0);
    approx::assert_relative_eq!(geometry::torsion(&p1, &p2, &p3, &p4), 90.0, epsilon = 1e-10);
    let p4m = Point3::new(0.0, -1.0, 1.0);
    approx::assert_relative_eq!(
        geometry::torsion(&p1, &p2, &p3, &p4m),
        -90.0,
        epsilon = 1e-10
    );
    assert!(geometry::torsion(&p1, &p2, &Point3::new(2.0, 0.0, 0.0), &p4).is_nan());
}

#[test]
fn test_geometry_quaternion_frame() {
    let c = Point3::new(1.0, 1.0, 1.0);
    let q = geometry::quaternion_frame(
        &c,
        &Point3::new(2.0, 1.0, 1.0),
        &Point3::new(1.0, 2.0, 1.0),
    )
    .unwrap();
    approx::assert_relative_eq!(geometry::quaternion_theta(&q), 0.0, epsilon = 1e-10);

    let q90 = geometry::quaternion_frame(
        &c,
        &Point3::new(1.0, 2.0, 1.0),
        &Point3::new(0.0, 1.0, 1.0),
    )
    .unwrap();
    approx::assert_relative_eq!(geometry::quaternion_theta(&q90), 90.0, epsilon = 1e-10);
    approx::assert_relative_eq!(
        geometry::quaternion_normal(&q90),
        Vector3::z(),
        epsilon = 1e-10
    );

    assert!(geometry::quaternion_frame(
        &c,
        &Point3::new(2.0, 1.0, 1.0),
        &Point3::new(3.0, 1.0, 1.0)
    )
    .is_none());
}

#[test]
fn test_geometry_helical_axis_pure_rotation() {
    let dq = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2);
    let helix = geometry::helical_axis(
        &Point3::new(1.0, 0.0, 0.0),
        &Point3::new(0.0, 1.0, 0.0),
        &dq,
    );
    approx::assert_relative_eq!(helix.point, Point3::origin(), epsilon = 1e-10);
    approx::assert_relative_eq!(helix.axis, Vector3::z(), epsilon = 1e-10);
    approx::assert_relative_eq!(helix.angle, 90.0, epsilon = 1e-8);
    approx::assert_relative_eq!(helix.pitch, 0.0);
}

#[test]
fn test_geometry_helical_axis_screw() {
    let dq = UnitQuaternion::from_axis_angle(&Vector3::z_axis(), std::f64::consts::FRAC_PI_2);
    let helix = geometry::helical_axis(
        &Point3::new(1.0, 0.0, 0.0),
        &Point3::new(0.0, 1.0, 1.0),
        &dq,
    );
    approx::assert_relative_eq!(helix.point, Point3::origin(), epsilon = 1e-10);
    approx::assert_relative_eq!(helix.axis, Vector3::z(), epsilon = 1e-10);
    approx::assert_relative_eq!(helix.angle, 90.0, epsilon = 1e-8);
    approx::assert_relative_eq!(helix.pitch, 4.0, epsilon = 1e-8);
}
