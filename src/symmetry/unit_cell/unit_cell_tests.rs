use approx::assert_relative_eq;
use nalgebra::{Matrix3, Point3, Vector3};
use proptest::prelude::*;

use crate::symmetry::symmetry_error::SymmetryError;
use crate::symmetry::unit_cell::{
    ijk_to_point, CellParameters, DisplacementParameters, UnitCell,
};

fn cubic(a: f64) -> UnitCell {
    UnitCell::from_lengths_angles([a, a, a, 90.0, 90.0, 90.0]).unwrap()
}

#[test]
fn test_unit_cell_cubic_geometry() {
    let uc = cubic(10.0);
    assert_eq!(uc.dimension(), 3);
    assert_relative_eq!(uc.volume(), 1000.0, epsilon = 1e-9);
    for r in uc.reciprocal_lengths() {
        assert_relative_eq!(r, 0.1, epsilon = 1e-12);
    }
    let cart = uc.to_cartesian(&Point3::new(0.5, 0.25, 1.0), false);
    assert_relative_eq!(cart, Point3::new(5.0, 2.5, 10.0), epsilon = 1e-9);
    let frac = uc.to_fractional(&cart, false);
    assert_relative_eq!(frac, Point3::new(0.5, 0.25, 1.0), epsilon = 1e-12);
}

#[test]
fn test_unit_cell_hexagonal_geometry() {
    let uc = UnitCell::from_lengths_angles([3.0, 3.0, 5.0, 90.0, 90.0, 120.0]).unwrap();
    let b = uc.to_cartesian(&Point3::new(0.0, 1.0, 0.0), false);
    assert_relative_eq!(b, Point3::new(-1.5, 3.0 * 3f64.sqrt() / 2.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(
        uc.volume(),
        3.0 * 3.0 * 5.0 * 3f64.sqrt() / 2.0,
        epsilon = 1e-9
    );
    let [_, vb, _, vc] = uc.unit_cell_vectors();
    assert_relative_eq!(vb, b.coords, epsilon = 1e-12);
    assert_relative_eq!(vc, Vector3::new(0.0, 0.0, 5.0), epsilon = 1e-9);
}

#[test]
fn test_unit_cell_from_vectors() {
    let uc = UnitCell::from_vectors([
        Vector3::new(4.0, 0.0, 0.0),
        Vector3::new(0.0, 5.0, 0.0),
        Vector3::new(0.0, 0.0, 6.0),
    ])
    .unwrap();
    let [a, b, c, alpha, beta, gamma] = uc.lengths_angles();
    assert_relative_eq!(a, 4.0);
    assert_relative_eq!(b, 5.0);
    assert_relative_eq!(c, 6.0);
    assert_relative_eq!(alpha, 90.0, epsilon = 1e-9);
    assert_relative_eq!(beta, 90.0, epsilon = 1e-9);
    assert_relative_eq!(gamma, 90.0, epsilon = 1e-9);
    assert_relative_eq!(
        uc.to_fractional(&Point3::new(2.0, 2.5, 3.0), false),
        Point3::new(0.5, 0.5, 0.5),
        epsilon = 1e-12
    );
}

#[test]
fn test_unit_cell_polymer_and_slab() {
    let polymer = UnitCell::from_vectors([
        Vector3::new(3.0, 0.0, 0.0),
        Vector3::zeros(),
        Vector3::zeros(),
    ])
    .unwrap();
    assert!(polymer.is_polymer());

    let slab = UnitCell::from_lengths_angles([3.0, 4.0, 0.0, 90.0, 90.0, 90.0]).unwrap();
    assert!(slab.is_slab());
    // Only the periodic directions are wrapped.
    let wrapped = slab.to_unit_cell(&Point3::new(4.5, -1.0, 7.0), None);
    assert_relative_eq!(wrapped, Point3::new(1.5, 3.0, 7.0), epsilon = 1e-9);
}

#[test]
fn test_unit_cell_invalid_parameters() {
    assert!(CellParameters::builder().build().is_err());
    assert!(CellParameters::builder()
        .lengths_angles([0.0, 1.0, 1.0, 90.0, 90.0, 90.0])
        .build()
        .is_err());
    assert!(UnitCell::from_vectors([
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(2.0, 0.0, 0.0),
        Vector3::new(0.0, 0.0, 1.0),
    ])
    .is_err());
}

#[test]
fn test_unit_cell_degenerate_angles() {
    for lengths_angles in [
        [1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        [1.0, 1.0, 1.0, 120.0, 120.0, 120.0],
        [5.0, 5.0, 5.0, 90.0, 90.0, 180.0],
    ] {
        assert!(matches!(
            UnitCell::from_lengths_angles(lengths_angles),
            Err(SymmetryError::GeometricDegeneracy(_))
        ));
    }

    let uc = UnitCell::from_lengths_angles([1.0, 1.0, 1.0, 119.0, 119.0, 119.0]).unwrap();
    let pt = Point3::new(1.0, 2.0, 3.0);
    let frac = uc.to_fractional(&pt, false);
    assert!(frac.iter().all(|x| x.is_finite()));
    assert_relative_eq!(uc.to_cartesian(&frac, false), pt, epsilon = 1e-8);
}

#[test]
fn test_unit_cell_supercell() {
    let params = CellParameters::builder()
        .lengths_angles([10.0, 10.0, 10.0, 90.0, 90.0, 90.0])
        .supercell([2, 1, 1])
        .build()
        .unwrap();
    let uc = UnitCell::new(&params).unwrap();
    assert_relative_eq!(uc.lengths_angles()[0], 20.0);
    assert_relative_eq!(
        uc.to_cartesian(&Point3::new(1.0, 1.0, 1.0), false),
        Point3::new(20.0, 10.0, 10.0),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        uc.to_supercell(&Point3::new(1.0, 0.5, 0.5)),
        Point3::new(0.5, 0.5, 0.5)
    );
}

#[test]
fn test_unit_cell_to_unit_cell() {
    let uc = cubic(10.0);
    let wrapped = uc.to_unit_cell(&Point3::new(12.0, -1.0, 5.0), None);
    assert_relative_eq!(wrapped, Point3::new(2.0, 9.0, 5.0), epsilon = 1e-9);

    // Values a hair below a cell boundary snap to zero.
    let snapped = uc.to_unit_cell(&Point3::new(9.99999, 0.0, 0.0), None);
    assert_relative_eq!(snapped, Point3::origin(), epsilon = 1e-12);

    let shifted = uc.to_unit_cell(&Point3::new(12.0, 0.0, 0.0), Some(&Vector3::new(1.0, 0.0, 0.0)));
    assert_relative_eq!(shifted, Point3::new(12.0, 0.0, 0.0), epsilon = 1e-9);
}

#[test]
fn test_unit_cell_offsets() {
    let mut uc = cubic(10.0);
    uc.set_offset(&Point3::new(1.0, 0.0, 0.5));
    assert_relative_eq!(
        uc.to_cartesian(&Point3::origin(), false),
        Point3::new(10.0, 0.0, 5.0),
        epsilon = 1e-9
    );
    assert_relative_eq!(
        uc.to_fractional(&Point3::new(10.0, 0.0, 5.0), false),
        Point3::origin(),
        epsilon = 1e-12
    );
    // The absolute transforms ignore the offset.
    assert_relative_eq!(
        uc.to_cartesian(&Point3::origin(), true),
        Point3::origin(),
        epsilon = 1e-12
    );
    assert_relative_eq!(*uc.cartesian_offset(), Vector3::new(10.0, 0.0, 5.0), epsilon = 1e-9);

    uc.set_offset_ijk(565);
    assert_relative_eq!(*uc.fractional_offset(), Vector3::new(0.0, 1.0, 0.0));

    uc.set_cartesian_offset(&Vector3::new(5.0, 0.0, 0.0));
    assert_relative_eq!(*uc.fractional_offset(), Vector3::new(0.5, 0.0, 0.0), epsilon = 1e-12);
    assert_relative_eq!(
        uc.to_fractional(&Point3::new(5.0, 0.0, 0.0), false),
        Point3::origin(),
        epsilon = 1e-12
    );

    uc.set_offset(&Point3::new(444.0, 666.0, 1.0));
    assert_eq!(uc.unit_cell_multiplier(), Some(&Point3::new(444.0, 666.0, 1.0)));
    assert_relative_eq!(*uc.fractional_offset(), Vector3::new(0.5, 0.0, 0.0), epsilon = 1e-12);
}

#[test]
fn test_unit_cell_ijk_to_point() {
    assert_eq!(ijk_to_point(555, 0), Point3::origin());
    assert_eq!(ijk_to_point(456, 0), Point3::new(-1.0, 0.0, 1.0));
    assert_eq!(ijk_to_point(555, 1), Point3::new(1.0, 1.0, 1.0));
}

#[test]
fn test_unit_cell_orientation() {
    let mut uc = cubic(10.0);
    let rot = Matrix3::new(0.0, -1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0);
    uc.set_orientation(&rot).unwrap();
    assert_relative_eq!(
        uc.to_cartesian(&Point3::new(1.0, 0.0, 0.0), false),
        Point3::new(0.0, 10.0, 0.0),
        epsilon = 1e-9
    );
    assert_relative_eq!(uc.vertices()[4], Point3::new(0.0, 10.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(
        uc.to_fractional(&Point3::new(0.0, 10.0, 0.0), true),
        Point3::new(1.0, 0.0, 0.0),
        epsilon = 1e-9
    );
}

#[test]
fn test_unit_cell_canonical_copy() {
    let uc = cubic(10.0);
    let pts = uc.canonical_copy(1.0);
    assert_relative_eq!(pts[0], Point3::origin());
    assert_relative_eq!(pts[1], Point3::new(10.0, 0.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(pts[2], Point3::new(10.0, 0.0, 10.0), epsilon = 1e-9);
    assert_relative_eq!(pts[3], Point3::new(0.0, 0.0, 10.0), epsilon = 1e-9);
    assert_relative_eq!(pts[4], Point3::new(0.0, 10.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(pts[6], Point3::new(10.0, 10.0, 10.0), epsilon = 1e-9);

    let scaled = uc.canonical_copy(2.0);
    assert_relative_eq!(scaled[0], Point3::new(-5.0, -5.0, -5.0), epsilon = 1e-9);
    assert_relative_eq!(scaled[6], Point3::new(15.0, 15.0, 15.0), epsilon = 1e-9);
}

#[test]
fn test_unit_cell_check_distance() {
    let uc = cubic(10.0);
    let f1 = Point3::new(0.05, 0.0, 0.0);
    let f2 = Point3::new(0.95, 0.0, 0.0);
    assert_eq!(
        uc.check_distance(&f1, &f2, 1.0, 0.01, [1, 1, 1]),
        Some(Vector3::new(-1, 0, 0))
    );
    assert_eq!(uc.check_distance(&f1, &f2, 0.5, 0.01, [1, 1, 1]), None);
    assert_eq!(
        uc.check_distance(&f1, &f2, 2.0, 0.0, [1, 1, 1]),
        Some(Vector3::new(-1, 0, 0))
    );
}

#[test]
fn test_unit_cell_ellipsoids() {
    let uc = cubic(10.0);

    let iso = uc.ellipsoid(&DisplacementParameters::Isotropic(0.04)).unwrap();
    assert!(iso.is_isotropic());
    assert_relative_eq!(iso.lengths[0], 0.2, epsilon = 1e-12);

    let cartesian = uc
        .ellipsoid(&DisplacementParameters::Anisotropic {
            parameters: [0.01, 0.04, 0.09, 0.0, 0.0, 0.0],
            ortep_type: 12,
        })
        .unwrap();
    let mut lengths = cartesian.lengths.to_vec();
    lengths.sort_by(|a, b| a.total_cmp(b));
    assert_relative_eq!(lengths[0], 0.1, epsilon = 1e-9);
    assert_relative_eq!(lengths[1], 0.2, epsilon = 1e-9);
    assert_relative_eq!(lengths[2], 0.3, epsilon = 1e-9);
    for axis in cartesian.axes {
        assert_relative_eq!(axis.norm(), 1.0, epsilon = 1e-12);
    }

    // Type 8 carries U in the reciprocal basis; for a cubic cell it matches the Cartesian U.
    let fractional = uc
        .ellipsoid(&DisplacementParameters::Anisotropic {
            parameters: [0.01, 0.01, 0.01, 0.0, 0.0, 0.0],
            ortep_type: 8,
        })
        .unwrap();
    for length in fractional.lengths {
        assert_relative_eq!(length, 0.1, epsilon = 1e-9);
    }
    assert_relative_eq!(fractional.equivalent_isotropic, 0.01, epsilon = 1e-9);

    assert!(uc
        .ellipsoid(&DisplacementParameters::Anisotropic {
            parameters: [0.01; 6],
            ortep_type: 6,
        })
        .is_err());
}

#[test]
fn test_unit_cell_dump_info() {
    let uc = cubic(2.5);
    assert_eq!(
        uc.dump_info(false),
        "a=2.5, b=2.5, c=2.5, alpha=90, beta=90, gamma=90"
    );
    assert!(uc.dump_info(true).contains("fractional to cartesian"));
}

proptest! {
    #[test]
    fn test_unit_cell_fractional_cartesian_round_trip(
        a in 2.0f64..20.0,
        b in 2.0f64..20.0,
        c in 2.0f64..20.0,
        alpha in 60.0f64..120.0,
        beta in 60.0f64..120.0,
        gamma in 60.0f64..120.0,
        offset in prop::array::uniform3(-2.0f64..2.0),
        p in prop::array::uniform3(-50.0f64..50.0),
    ) {
        let uc = UnitCell::from_lengths_angles([a, b, c, alpha, beta, gamma]);
        prop_assume!(uc.is_ok());
        let mut uc = uc.unwrap();
        prop_assume!(uc.volume().is_finite() && uc.volume() > 1.0);
        let pt = Point3::from(p);
        let back = uc.to_cartesian(&uc.to_fractional(&pt, false), false);
        prop_assert!((back - pt).norm() < 1e-8);

        uc.set_offset(&Point3::from(offset));
        let back = uc.to_cartesian(&uc.to_fractional(&pt, false), false);
        prop_assert!((back - pt).norm() < 1e-8);
        let back_absolute = uc.to_cartesian(&uc.to_fractional(&pt, true), true);
        prop_assert!((back_absolute - pt).norm() < 1e-8);
    }
}
