use approx::assert_relative_eq;
use nalgebra::{Matrix4, Point3, Vector3};

use crate::auxiliary::molecule::Molecule;
use crate::symmetry::point_group::PointGroupDetector;
use crate::symmetry::symmetry_error::SymmetryError;
use crate::symmetry::symmetry_facade::SymmetryFacade;
use crate::symmetry::unit_cell::CellParameters;

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

fn cubic_cell(a: f64) -> CellParameters {
    CellParameters::builder()
        .lengths_angles([a, a, a, 90.0, 90.0, 90.0])
        .build()
        .unwrap()
}

#[test]
fn test_symmetry_facade_empty() {
    let facade = SymmetryFacade::new();
    assert!(!facade.has_space_group());
    assert!(!facade.has_unit_cell());
    assert_eq!(facade.space_group_name(), "");
    assert_eq!(facade.space_group_operation_count(), 0);
    assert!(facade.point_group_name().is_none());
    assert!(facade.space_group_xyz(0, true).is_none());
    assert!(facade.to_cartesian(&Point3::origin(), true).is_none());
}

#[test]
fn test_symmetry_facade_space_group() {
    let mut facade = SymmetryFacade::new();
    let sg = facade.set_space_group("P21/c", None).unwrap();
    assert_eq!(sg.operation_count(), 4);
    assert_eq!(facade.space_group_name(), "-P 2ybc [P 1 21/c 1] #14");
    assert_eq!(facade.space_group_xyz(1, true), Some("-x,y+1/2,-z+1/2"));

    facade.set_final_operations(None);
    let image = facade
        .new_space_group_point(1, &Point3::new(0.1, 0.2, 0.3), [0, 0, 0])
        .unwrap();
    assert_relative_eq!(image, Point3::new(-0.1, 0.7, 0.2), epsilon = 1e-12);

    let info = facade.space_group_info().unwrap();
    assert_eq!(info.operation_count, 4);
    assert_eq!(info.intl_table_number, "14:b1");
}

#[test]
fn test_symmetry_facade_space_group_miss() {
    let mut facade = SymmetryFacade::new();
    facade.set_space_group("P 1", None).unwrap();
    let err = facade.set_space_group("nonsense", None).unwrap_err();
    assert!(matches!(err, SymmetryError::LookupMiss(_)));
    assert!(!facade.has_space_group());
}

#[test]
fn test_symmetry_facade_incremental_operations() {
    let mut facade = SymmetryFacade::new();
    facade.start_space_group(true);
    assert_eq!(facade.space_group_operation_count(), 1);
    facade.add_space_group_operation("-x,-y,-z", 1).unwrap();
    assert_eq!(facade.space_group_operation_count(), 2);
    facade
        .add_space_group_operation_matrix(&Matrix4::new(
            -1.0, 0.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, 0.5, //
            0.0, 0.0, -1.0, 0.5, //
            0.0, 0.0, 0.0, 1.0,
        ))
        .unwrap();
    assert_eq!(facade.space_group_operation_count(), 3);
    assert_eq!(facade.space_group_xyz(2, true), Some("-x,y+1/2,-z+1/2"));

    // Operations can be added without an explicit start.
    let mut facade = SymmetryFacade::new();
    facade.add_space_group_operation("x,y,z", 0).unwrap();
    assert!(facade.has_space_group());
    assert!(facade.space_group().unwrap().do_normalise());
}

#[test]
fn test_symmetry_facade_unit_cell() {
    let mut facade = SymmetryFacade::new();
    facade.set_unit_cell(&cubic_cell(10.0)).unwrap();
    assert!(facade.is_periodic());
    let cart = facade
        .to_cartesian(&Point3::new(0.5, 0.25, 0.0), true)
        .unwrap();
    assert_relative_eq!(cart, Point3::new(5.0, 2.5, 0.0), epsilon = 1e-9);
    let frac = facade.to_fractional(&cart, true).unwrap();
    assert_relative_eq!(frac, Point3::new(0.5, 0.25, 0.0), epsilon = 1e-9);
    let inside = facade
        .to_unit_cell(&Point3::new(15.0, -2.5, 20.0), None)
        .unwrap();
    assert_relative_eq!(inside, Point3::new(5.0, 7.5, 0.0), epsilon = 1e-9);
}

#[test]
fn test_symmetry_facade_description_requires_cell() {
    let mut facade = SymmetryFacade::new();
    facade.set_space_group("-P 1", None).unwrap();
    assert!(facade
        .symmetry_operation_description(1, None, None)
        .is_err());

    facade.set_unit_cell(&cubic_cell(10.0)).unwrap();
    let desc = facade
        .symmetry_operation_description(1, Some(&Point3::new(1.0, 2.0, 3.0)), None)
        .unwrap();
    assert_eq!(desc.label, "inversion center|0 0 0");
    assert!(facade
        .symmetry_operation_description(5, None, None)
        .is_err());
}

#[test]
fn test_symmetry_facade_rotate_ellipsoid() {
    let mut facade = SymmetryFacade::new();
    facade.set_space_group("-P 1", None).unwrap();
    let axes = [Vector3::x(), Vector3::y(), Vector3::z()];
    assert!(facade
        .rotate_ellipsoid(1, &Point3::origin(), &axes)
        .is_none());
    facade.set_unit_cell(&cubic_cell(5.0)).unwrap();
    let rotated = facade
        .rotate_ellipsoid(0, &Point3::origin(), &axes)
        .unwrap();
    assert_eq!(rotated.len(), 3);
    for (r, a) in rotated.iter().zip(axes.iter()) {
        assert_relative_eq!(r.cross(a).norm(), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn test_symmetry_facade_point_group() {
    let mol = Molecule::from_xyz(format!("{ROOT}/tests/xyz/h2o.xyz"), 1e-7).unwrap();
    let detector = PointGroupDetector::default();
    let mut facade = SymmetryFacade::new();
    assert_eq!(facade.set_point_group(&detector, &mol.atoms).name(), "C2v");
    assert_eq!(facade.point_group_name(), Some("C2v"));
    assert!(facade.point_group_info().unwrap().starts_with("# 3 atoms\n"));

    // Unchanged atoms give the same result.
    let again = facade.set_point_group(&detector, &mol.atoms).clone();
    assert_eq!(again.name(), "C2v");
}

#[test]
fn test_symmetry_facade_statics() {
    assert_eq!(
        SymmetryFacade::fcoord(&Point3::new(0.5, 1.0 / 3.0, 0.25)),
        "1/2 1/3 1/4"
    );
    let (xyz, matrix) = SymmetryFacade::matrix_from_string("x,-y,z+1/2").unwrap();
    assert_eq!(xyz, "x,-y,z+1/2");
    assert_relative_eq!(matrix[(1, 1)], -1.0);
    assert_relative_eq!(matrix[(2, 3)], 0.5, epsilon = 1e-12);
    assert_relative_eq!(
        SymmetryFacade::ijk_to_point(656),
        Point3::new(1.0, 0.0, 1.0)
    );
    assert_eq!(
        SymmetryFacade::space_group_lookup("P21/c", None).unwrap(),
        "-P 2ybc [P 1 21/c 1] #14"
    );
}
