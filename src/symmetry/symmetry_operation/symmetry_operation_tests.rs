use approx::assert_relative_eq;
use nalgebra::{Matrix4, Point3, Vector3};
use proptest::prelude::*;

use crate::symmetry::symmetry_error::SymmetryError;
use crate::symmetry::symmetry_operation::operation_kind::{GlideKind, OperationKind};
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::twelfths::xyz_from_matrix;
use crate::symmetry::unit_cell::UnitCell;

fn cubic(a: f64) -> UnitCell {
    UnitCell::from_lengths_angles([a, a, a, 90.0, 90.0, 90.0]).unwrap()
}

#[test]
fn test_symmetry_operation_parse_simple() {
    let op = SymmetryOperation::parse("x,-y,z+1/2", 3, true).unwrap();
    assert_eq!(op.xyz, "x,-y,z+1/2");
    assert_eq!(op.xyz_original, "x,-y,z+1/2");
    assert_eq!(op.op_id, 3);
    assert!(!op.is_finalised);
    #[rustfmt::skip]
    let expected = Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, -1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 6.0,
        0.0, 0.0, 0.0, 1.0,
    );
    assert_eq!(*op.matrix(), expected);
}

#[test]
fn test_symmetry_operation_parse_variants() {
    let op = SymmetryOperation::parse("X, Y+1/2, -Z+3/4", 0, true).unwrap();
    assert_eq!(op.xyz, "x,y+1/2,-z-1/4");
    assert_eq!(op.translation(), Vector3::new(0.0, 6.0, -3.0));

    // Without normalisation the matrix keeps the translation as given, while the canonical
    // form is still centred.
    let op = SymmetryOperation::parse("x,y+1/2,-z+3/4", 0, false).unwrap();
    assert_eq!(op.translation(), Vector3::new(0.0, 6.0, 9.0));
    assert_eq!(op.xyz, "x,y+1/2,-z-1/4");
    assert_eq!(op.jones_faithful(), "x,y+1/2,-z+3/4");

    let op = SymmetryOperation::parse("1/2+x, y, z", 0, true).unwrap();
    assert_eq!(op.xyz, "x+1/2,y,z");

    let op = SymmetryOperation::parse("x+0.5,y-0.25,z", 0, true).unwrap();
    assert_eq!(op.xyz, "x+1/2,y-1/4,z");

    let op = SymmetryOperation::parse("x-y,x,z+1/6", 0, true).unwrap();
    assert_eq!(op.xyz, "x-y,x,z+1/6");
    assert_eq!(op.rotation()[(0, 1)], -1.0);

    let op = SymmetryOperation::parse("-y,x-y,z+2/3", 0, true).unwrap();
    assert_eq!(op.xyz, "-y,x-y,z-1/3");

    let op = SymmetryOperation::parse("'x', 'y', '-z'", 0, true).unwrap();
    assert_eq!(op.xyz, "x,y,-z");
}

#[test]
fn test_symmetry_operation_parse_reverse() {
    let op = SymmetryOperation::parse("!-y,x,z+1/4", 0, true).unwrap();
    assert_eq!(op.xyz_original, "!-y,x,z+1/4");
    assert_eq!(op.xyz, "y,-x,z-1/4");
}

#[test]
fn test_symmetry_operation_parse_superspace() {
    let op = SymmetryOperation::parse("x1,-x2,x3+1/2,x4", 0, true).unwrap();
    assert_eq!(op.xyz, "x,-y,z+1/2");
}

#[test]
fn test_symmetry_operation_parse_matrices() {
    let op = SymmetryOperation::parse(
        "[[-1,0,0,0.5],[0,1,0,0],[0,0,-1,0],[0,0,0,1]]",
        0,
        true,
    )
    .unwrap();
    assert_eq!(op.xyz, "-x+1/2,y,-z");
    assert_eq!(op.translation(), Vector3::new(6.0, 0.0, 0.0));

    let op = SymmetryOperation::parse(
        "xyz matrix: -1 0 0 0.5 0 1 0 0 0 0 -1 0.25 0 0 0 1",
        0,
        true,
    )
    .unwrap();
    assert_eq!(op.xyz, "-x+1/2,y,-z+1/4");
    assert!(!op.is_finalised);

    let op = SymmetryOperation::parse(
        "xyz matrix: 1.0e0 0 0 -7.5e-1 0 1 0 0 0 0 1 0 0 0 0 1",
        0,
        true,
    )
    .unwrap();
    assert_eq!(op.xyz, "x+1/4,y,z");
}

#[test]
fn test_symmetry_operation_parse_errors() {
    for bad in [
        "x,y",
        "x,y,z,x",
        "x,y,1/2",
        "x,2y,z",
        "x,q,z",
        "x,y+1/0,z",
        "x+x,y,z",
        "",
        "[[1,0,0,0],[0,1,0,0]]",
        "xyz matrix: 1 0 0",
        "[[2,0,0,0],[0,1,0,0],[0,0,1,0],[0,0,0,1]]",
    ] {
        let result = SymmetryOperation::parse(bad, 0, true);
        assert!(
            matches!(result, Err(SymmetryError::NotationParse(_))),
            "`{bad}` should not parse."
        );
    }
}

#[test]
fn test_symmetry_operation_equality() {
    let a = SymmetryOperation::parse("x,y,z", 0, true).unwrap();
    let b = SymmetryOperation::parse("+x, +y, +z", 1, true).unwrap();
    let c = SymmetryOperation::parse("x,y,z+1", 2, true).unwrap();
    assert_eq!(a, b);
    assert_eq!(a, c);
    assert_ne!(a, SymmetryOperation::parse("-x,y,z", 0, true).unwrap());
}

#[test]
fn test_symmetry_operation_finalise() {
    let mut op = SymmetryOperation::parse("x+1/2,-y+1/4,z", 0, true).unwrap();
    assert_eq!(op.matrix_12ths(), *op.matrix());
    op.finalise();
    assert!(op.is_finalised);
    assert_relative_eq!(op.translation(), Vector3::new(0.5, 0.25, 0.0));
    assert_relative_eq!(op.matrix_12ths()[(0, 3)], 6.0);
    op.finalise();
    assert_relative_eq!(op.translation(), Vector3::new(0.5, 0.25, 0.0));
    assert_eq!(op.jones_faithful(), "x+1/2,-y+1/4,z");
}

#[test]
fn test_symmetry_operation_new_point() {
    let op = SymmetryOperation::parse("-x,-y,-z", 0, true).unwrap().finalised();
    let pt = op.new_point(&Point3::new(0.1, 0.2, 0.3), [1, 0, 0]);
    assert_relative_eq!(pt, Point3::new(0.9, -0.2, -0.3), epsilon = 1e-12);

    // Constants off the twelfths grid keep their exact value in the matrix.
    let op = SymmetryOperation::parse("x+0.1,y+1/8,z", 0, true).unwrap();
    assert_eq!(op.xyz, "x+1/12,y+1/6,z");
    let pt = op.finalised().new_point(&Point3::origin(), [0, 0, 0]);
    assert_relative_eq!(pt, Point3::new(0.1, 0.125, 0.0), epsilon = 1e-12);
}

#[test]
fn test_symmetry_operation_parse_exponent_constants() {
    let op = SymmetryOperation::parse("x+1e-5,y,z-2.5E-1", 0, true).unwrap();
    assert_eq!(op.xyz, "x,y,z-1/4");
    assert_relative_eq!(
        op.finalised().translation(),
        Vector3::new(1e-5, 0.0, -0.25),
        epsilon = 1e-12
    );
}

#[test]
fn test_symmetry_operation_set_offset() {
    let mut op = SymmetryOperation::parse("-x,-y,-z", 0, true).unwrap().finalised();
    op.set_offset(&[Point3::new(0.1, 0.2, 0.3)]);
    assert_relative_eq!(op.translation(), Vector3::new(1.0, 1.0, 1.0));

    let mut op = SymmetryOperation::parse("x+1/2,y,z", 0, true).unwrap().finalised();
    op.set_offset(&[Point3::new(0.7, 0.2, 0.3), Point3::new(0.8, 0.1, 0.4)]);
    // The centroid image (1.25, 0.15, 0.35) is brought back into the cell.
    assert_relative_eq!(op.translation(), Vector3::new(-0.5, 0.0, 0.0));

    let mut op = SymmetryOperation::parse("x,y,z", 0, true).unwrap().finalised();
    op.set_offset(&[]);
    assert_relative_eq!(op.translation(), Vector3::zeros());
}

#[test]
fn test_symmetry_operation_rotate_ellipsoid() {
    let uc = cubic(10.0);
    let op = SymmetryOperation::parse("-x,y,-z+1/2", 0, true).unwrap().finalised();
    let rotated = op.rotate_ellipsoid(
        &Point3::new(1.0, 2.0, 3.0),
        &[Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 1.0)],
        &uc,
    );
    assert_eq!(rotated.len(), 2);
    assert_relative_eq!(rotated[0], Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-9);
    assert_relative_eq!(rotated[1], Vector3::new(0.0, 1.0, -1.0), epsilon = 1e-9);
}

#[test]
fn test_symmetry_operation_dump_seitz() {
    let op = SymmetryOperation::parse("-x,y+1/2,-z+1/2", 0, true).unwrap();
    assert_eq!(
        op.dump_seitz(),
        "{\t-1\t0\t0\t0\t}\n{\t0\t1\t0\t1/2\t}\n{\t0\t0\t-1\t1/2\t}\n{\t0\t0\t0\t1\t}\n"
    );
    assert_eq!(
        op.finalised().dump_canonical_seitz(),
        "{\t-1\t0\t0\t1\t}\n{\t0\t1\t0\t3/2\t}\n{\t0\t0\t-1\t3/2\t}\n{\t0\t0\t0\t1\t}\n"
    );
    assert!(op.dump_info().starts_with("\n-x,y+1/2,-z+1/2\ninternal matrix representation:"));
}

// ===================
// Geometric analysis
// ===================

#[test]
fn test_symmetry_operation_describe_identity_and_inversion() {
    let uc = cubic(10.0);
    let pt = Point3::new(1.0, 2.0, 3.0);

    let identity = SymmetryOperation::parse("x,y,z", 0, true).unwrap();
    let desc = identity.describe(&uc, Some(&pt), None).unwrap();
    assert_eq!(desc.kind, OperationKind::Identity);
    assert_eq!(desc.label, "identity");
    assert_eq!(desc.xyz, "x,y,z");

    let inversion = SymmetryOperation::parse("-x,-y,-z", 0, true).unwrap();
    let desc = inversion.describe(&uc, Some(&pt), None).unwrap();
    assert_eq!(desc.label, "inversion center|0 0 0");
    match desc.kind {
        OperationKind::Inversion { centre } => {
            assert_relative_eq!(centre, Point3::origin(), epsilon = 1e-9)
        }
        other => panic!("Unexpected kind {other:?}"),
    }

    let shifted = SymmetryOperation::parse("-x+1/2,-y,-z", 0, true).unwrap();
    let desc = shifted.describe(&uc, Some(&pt), None).unwrap();
    assert_eq!(desc.label, "inversion center|1/4 0 0");
}

#[test]
fn test_symmetry_operation_describe_rotations() {
    let uc = cubic(10.0);
    let pt = Point3::new(1.0, 2.0, 3.0);

    let c2 = SymmetryOperation::parse("-x,-y,z", 0, true).unwrap();
    let desc = c2.describe(&uc, Some(&pt), None).unwrap();
    assert_eq!(desc.label, "C2 axis");
    match desc.kind {
        OperationKind::Rotation {
            order,
            axis_point,
            axis,
            ..
        } => {
            assert_eq!(order, 2);
            assert_relative_eq!(axis, Vector3::z(), epsilon = 1e-6);
            assert_relative_eq!(axis_point.x, 0.0, epsilon = 1e-6);
            assert_relative_eq!(axis_point.y, 0.0, epsilon = 1e-6);
        }
        other => panic!("Unexpected kind {other:?}"),
    }

    let screw = SymmetryOperation::parse("-x,-y,z+1/2", 0, true).unwrap();
    let desc = screw.describe(&uc, Some(&pt), None).unwrap();
    assert_eq!(desc.label, "2-fold screw axis|translation: 0 0 1/2");
    match desc.kind {
        OperationKind::ScrewRotation {
            order, translation, ..
        } => {
            assert_eq!(order, 2);
            assert_relative_eq!(translation, Vector3::new(0.0, 0.0, 0.5), epsilon = 1e-6);
        }
        other => panic!("Unexpected kind {other:?}"),
    }

    let c4 = SymmetryOperation::parse("-y,x,z", 0, true).unwrap();
    let desc = c4.describe(&uc, Some(&pt), None).unwrap();
    assert_eq!(desc.label, "C4 axis");

    let s4 = SymmetryOperation::parse("y,-x,-z", 0, true).unwrap();
    let desc = s4.describe(&uc, Some(&pt), None).unwrap();
    assert!(desc.label.starts_with("4-bar axis"), "{}", desc.label);
    assert!(matches!(
        desc.kind,
        OperationKind::Rotoinversion { order: 4, .. }
    ));
}

#[test]
fn test_symmetry_operation_describe_planes() {
    let uc = cubic(10.0);
    let pt = Point3::new(1.0, 2.0, 3.0);

    let mirror = SymmetryOperation::parse("x,y,-z", 0, true).unwrap();
    let desc = mirror.describe(&uc, Some(&pt), None).unwrap();
    assert_eq!(desc.label, "mirror plane");
    match desc.kind {
        OperationKind::MirrorPlane { point, normal } => {
            assert_relative_eq!(normal.z.abs(), 1.0, epsilon = 1e-6);
            assert_relative_eq!(point.z, 0.0, epsilon = 1e-6);
        }
        other => panic!("Unexpected kind {other:?}"),
    }

    let glide = SymmetryOperation::parse("x,-y,z+1/2", 0, true).unwrap();
    let desc = glide.describe(&uc, Some(&pt), None).unwrap();
    assert_eq!(desc.label, "c-glide plane |translation: 0 0 1/2");
    match desc.kind {
        OperationKind::GlidePlane {
            kind,
            normal,
            translation,
            ..
        } => {
            assert_eq!(kind, GlideKind::C);
            assert_relative_eq!(normal.y.abs(), 1.0, epsilon = 1e-6);
            assert_relative_eq!(translation, Vector3::new(0.0, 0.0, 0.5), epsilon = 1e-6);
        }
        other => panic!("Unexpected kind {other:?}"),
    }

    let n_glide = SymmetryOperation::parse("x+1/2,y+1/2,-z", 0, true).unwrap();
    let desc = n_glide.describe(&uc, Some(&pt), None).unwrap();
    assert!(desc.label.starts_with("n-glide plane"), "{}", desc.label);
}

#[test]
fn test_symmetry_operation_describe_with_target() {
    let uc = cubic(10.0);
    let pt = Point3::new(1.0, 2.0, 3.0);

    let identity = SymmetryOperation::parse("x,y,z", 0, true).unwrap();
    let desc = identity
        .describe(&uc, Some(&pt), Some(&Point3::new(11.0, 2.0, 3.0)))
        .unwrap();
    assert_eq!(desc.xyz, "x+1,y,z");
    assert_relative_eq!(desc.lattice_translation, Vector3::new(1.0, 0.0, 0.0));
    assert!(matches!(desc.kind, OperationKind::Translation { .. }));

    let result = identity.describe(&uc, Some(&pt), Some(&Point3::new(5.0, 5.0, 5.0)));
    assert!(matches!(result, Err(SymmetryError::GeometricDegeneracy(_))));
}

// ==========
// Properties
// ==========

fn rotation_entry() -> impl Strategy<Value = f64> {
    prop_oneof![Just(-1.0), Just(0.0), Just(1.0)]
}

proptest! {
    #[test]
    fn test_symmetry_operation_format_parse_round_trip(
        rot in prop::array::uniform9(rotation_entry()),
        trans in prop::array::uniform3(0i32..12),
    ) {
        for i in 0..3 {
            prop_assume!(rot[3 * i..3 * i + 3].iter().any(|v| *v != 0.0));
        }
        let mut mat = Matrix4::identity();
        for i in 0..3 {
            for j in 0..3 {
                mat[(i, j)] = rot[3 * i + j];
            }
            mat[(i, 3)] = f64::from(trans[i]);
        }
        let xyz = xyz_from_matrix(&mat, true, true, false);
        let op = SymmetryOperation::parse(&xyz, 0, false).unwrap().finalised();

        let formatted = op.jones_faithful();
        let reparsed = SymmetryOperation::parse(&formatted, 0, false).unwrap().finalised();
        prop_assert!((reparsed.matrix() - op.matrix()).norm() < 1e-12);
        prop_assert_eq!(reparsed.xyz, op.xyz);
    }
}
