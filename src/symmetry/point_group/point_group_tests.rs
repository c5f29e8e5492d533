use nalgebra::{Point3, Vector3};
use proptest::prelude::*;

use crate::auxiliary::atom::{Atom, ElementMap};
use crate::auxiliary::geometry::Transform;
use crate::auxiliary::molecule::Molecule;
use crate::symmetry::point_group::point_group_element::PointGroupElementKind;
use crate::symmetry::point_group::{
    capacity_exceeded_name, PointGroup, PointGroupDetector, ATOM_COUNT_MAX,
};

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

fn load(name: &str) -> Molecule {
    let path = format!("{ROOT}/tests/xyz/{name}.xyz");
    Molecule::from_xyz(path, 1e-7).unwrap()
}

fn detect(atoms: &[Atom]) -> PointGroup {
    PointGroupDetector::builder()
        .build()
        .unwrap()
        .detect(atoms)
}

fn make_atoms(spec: &[(&str, [f64; 3])]) -> Vec<Atom> {
    let emap = ElementMap::new();
    spec.iter()
        .map(|(symbol, [x, y, z])| Atom::new(symbol, Point3::new(*x, *y, *z), &emap, 1e-7).unwrap())
        .collect()
}

#[test]
fn test_point_group_detector_builder() {
    let detector = PointGroupDetector::builder().build().unwrap();
    assert_eq!(detector, PointGroupDetector::default());
    assert_eq!(detector.distance_tolerance(), 0.2);
    assert_eq!(detector.linear_tolerance(), 8.0);
    assert!(!detector.use_vibrations());

    assert!(PointGroupDetector::builder()
        .distance_tolerance(0.0)
        .build()
        .is_err());
    assert!(PointGroupDetector::builder()
        .linear_tolerance(95.0)
        .build()
        .is_err());
}

#[test]
fn test_point_group_linear() {
    let hcl = make_atoms(&[("H", [0.0, 0.0, 0.0]), ("Cl", [0.0, 0.0, 1.27])]);
    let pg = detect(&hcl);
    assert_eq!(pg.name(), "C(infinity)v");
    assert!(!pg.has_inversion_centre());
    assert!(pg.principal_axis().is_some());
    assert!(pg.principal_plane().is_none());

    let n2 = make_atoms(&[("N", [0.0, 0.0, -0.55]), ("N", [0.0, 0.0, 0.55])]);
    assert_eq!(detect(&n2).name(), "D(infinity)h");

    let pg = detect(&load("co2").atoms);
    assert_eq!(pg.name(), "D(infinity)h");
    assert!(pg.has_inversion_centre());
    let axis = pg.principal_axis().unwrap().normal_or_axis.unwrap();
    approx::assert_relative_eq!(axis.dot(&Vector3::z()).abs(), 1.0, epsilon = 1e-10);
    let plane = pg.principal_plane().unwrap();
    assert_eq!(plane.kind, PointGroupElementKind::Plane);
}

#[test]
fn test_point_group_water() {
    let pg = detect(&load("h2o").atoms);
    assert_eq!(pg.name(), "C2v");
    assert!(pg.is_determined());
    let counts = pg.element_counts();
    assert_eq!(counts[&"C2".to_string()], 1);
    assert_eq!(counts[&"Cs".to_string()], 2);
    assert_eq!(counts[&"Ci".to_string()], 0);
    assert_eq!(pg.total_operation_count(), 4);
    let axis = pg.principal_axis().unwrap().normal_or_axis.unwrap();
    approx::assert_relative_eq!(axis.dot(&Vector3::z()).abs(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_point_group_ammonia() {
    let pg = detect(&load("nh3").atoms);
    assert_eq!(pg.name(), "C3v");
    let counts = pg.element_counts();
    assert_eq!(counts[&"C3".to_string()], 1);
    assert_eq!(counts[&"Cs".to_string()], 3);
    assert_eq!(pg.total_operation_count(), 6);
}

#[test]
fn test_point_group_methane() {
    let pg = detect(&load("ch4").atoms);
    assert_eq!(pg.name(), "Td");
    let counts = pg.element_counts();
    assert_eq!(counts[&"C3".to_string()], 4);
    assert_eq!(counts[&"C2".to_string()], 3);
    assert_eq!(counts[&"S4".to_string()], 3);
    assert_eq!(counts[&"Cs".to_string()], 6);
    assert_eq!(pg.total_operation_count(), 24);
}

#[test]
fn test_point_group_benzene() {
    let pg = detect(&load("benzene").atoms);
    assert_eq!(pg.name(), "D6h");
    assert!(pg.has_inversion_centre());
    assert_eq!(pg.element_counts()[&"C6".to_string()], 1);
    assert_eq!(pg.element_counts()[&"C2".to_string()], 7);
    assert_eq!(pg.element_counts()[&"Cs".to_string()], 7);
    assert_eq!(pg.total_operation_count(), 24);
    let axis = pg.principal_axis().unwrap();
    assert_eq!(axis.label(), "C6");
    let plane = pg.principal_plane().unwrap().normal_or_axis.unwrap();
    approx::assert_relative_eq!(plane.dot(&Vector3::z()).abs(), 1.0, epsilon = 1e-10);
}

#[test]
fn test_point_group_pentagon() {
    let r = 1.2;
    let emap = ElementMap::new();
    let pentagon = (0..5)
        .map(|k| {
            let theta = (72.0 * f64::from(k)).to_radians();
            Atom::new("C", Point3::new(r * theta.cos(), r * theta.sin(), 0.0), &emap, 1e-7).unwrap()
        })
        .collect::<Vec<_>>();
    let pg = detect(&pentagon);
    assert_eq!(pg.name(), "D5h");
    assert!(!pg.has_inversion_centre());
    let counts = pg.element_counts();
    assert_eq!(counts[&"C5".to_string()], 1);
    assert_eq!(counts[&"S5".to_string()], 1);
    assert_eq!(counts[&"C2".to_string()], 5);
    assert_eq!(counts[&"Cs".to_string()], 6);
    assert_eq!(pg.total_operation_count(), 20);
    assert_eq!(pg.principal_axis().unwrap().label(), "C5");
}

#[test]
fn test_point_group_octahedral() {
    let pg = detect(&load("sf6").atoms);
    assert_eq!(pg.name(), "Oh");
    let counts = pg.element_counts();
    assert_eq!(counts[&"C4".to_string()], 3);
    assert_eq!(counts[&"C3".to_string()], 4);
    assert_eq!(counts[&"C2".to_string()], 9);
    assert_eq!(counts[&"S4".to_string()], 3);
    assert_eq!(counts[&"S6".to_string()], 4);
    assert_eq!(counts[&"Cs".to_string()], 9);
    assert_eq!(counts[&"Ci".to_string()], 1);
    assert_eq!(pg.total_operation_count(), 48);

    // Six identical atoms on the vertices of a regular octahedron.
    let d = 1.5;
    let octahedron = make_atoms(&[
        ("Ne", [d, 0.0, 0.0]),
        ("Ne", [-d, 0.0, 0.0]),
        ("Ne", [0.0, d, 0.0]),
        ("Ne", [0.0, -d, 0.0]),
        ("Ne", [0.0, 0.0, d]),
        ("Ne", [0.0, 0.0, -d]),
    ]);
    assert_eq!(detect(&octahedron).name(), "Oh");
}

#[test]
fn test_point_group_low_symmetry() {
    let emap = ElementMap::new();
    let hocl = make_atoms(&[
        ("O", [0.0, 0.0, 0.0]),
        ("H", [0.96, 0.0, 0.0]),
        ("Cl", [-0.4, 1.6, 0.0]),
    ]);
    assert_eq!(detect(&hocl).name(), "Cs");

    let mut chfclbr = make_atoms(&[
        ("C", [0.0, 0.0, 0.0]),
        ("H", [0.63, 0.63, 0.63]),
        ("F", [-0.8, -0.8, 0.8]),
        ("Cl", [-1.0, 1.0, -1.0]),
    ]);
    chfclbr.push(Atom::new("Br", Point3::new(1.1, -1.1, -1.1), &emap, 1e-7).unwrap());
    assert_eq!(detect(&chfclbr).name(), "C1");
}

#[test]
fn test_point_group_bond_classes() {
    // Identical elements in different bond buckets cannot be interchanged.
    let emap = ElementMap::new();
    let atoms = vec![
        Atom::new("C", Point3::new(0.0, 0.0, -0.6), &emap, 1e-7)
            .unwrap()
            .with_bond_count(4),
        Atom::new("C", Point3::new(0.0, 0.0, 0.6), &emap, 1e-7)
            .unwrap()
            .with_bond_count(2),
    ];
    assert_eq!(detect(&atoms).name(), "C(infinity)v");
}

#[test]
fn test_point_group_capacity_exceeded() {
    let atoms = (0..=ATOM_COUNT_MAX)
        .map(|i| ("C", [i as f64 * 1.5, 0.0, 0.0]))
        .collect::<Vec<_>>();
    let pg = detect(&make_atoms(&atoms));
    assert_eq!(pg.name(), capacity_exceeded_name());
    assert!(!pg.is_determined());
    assert_eq!(pg.elements().count(), 0);
}

#[test]
fn test_point_group_vibrations() {
    let mut water = load("h2o");
    water.atoms[1].vibration = Some(Vector3::new(0.0, 1.0, 0.0));

    let static_detector = PointGroupDetector::builder().build().unwrap();
    assert_eq!(static_detector.detect(&water.atoms).name(), "C2v");

    let vib_detector = PointGroupDetector::builder()
        .use_vibrations(true)
        .build()
        .unwrap();
    assert_eq!(vib_detector.detect(&water.atoms).name(), "Cs");
}

#[test]
fn test_point_group_reuse() {
    let detector = PointGroupDetector::builder().build().unwrap();
    let mut ammonia = load("nh3");
    let first = detector.detect(&ammonia.atoms);
    assert!(detector.is_equivalent_to(&ammonia.atoms, &first));
    let reused = detector.detect_with_previous(&ammonia.atoms, Some(&first));
    assert_eq!(reused.name(), first.name());

    let looser = PointGroupDetector::builder()
        .distance_tolerance(0.3)
        .build()
        .unwrap();
    assert!(!looser.is_equivalent_to(&ammonia.atoms, &first));

    ammonia.atoms[1].coordinates.y += 0.5;
    assert!(!detector.is_equivalent_to(&ammonia.atoms, &first));
    let redetected = detector.detect_with_previous(&ammonia.atoms, Some(&first));
    assert_eq!(redetected.name(), "Cs");
}

#[test]
fn test_point_group_info_and_summary() {
    let pg = detect(&load("sf6").atoms);
    let table = pg.info_table();
    assert!(table.starts_with("# 7 atoms\n"));
    assert!(table.contains("Oh\ttype\tnType\tnUnique"));
    assert!(table.contains("Oh\tE\t  1\t  1"));
    assert!(table.contains("Oh\tCi\t  1\t  1"));
    assert!(table.contains("Oh\tCs\t  9\t  9\n"));
    assert!(table.contains("Oh\tnC4\t3\t2"));
    assert!(table.ends_with("Oh\t\tTOTAL\t 48\n"));

    let summary = pg.summary();
    assert_eq!(summary.name, "Oh");
    assert_eq!(summary.n_atoms, 7);
    assert_eq!(summary.n_total, 48);
    assert_eq!(summary.n_ci, 1);
    assert_eq!(summary.n_cs, 9);
    assert_eq!(summary.n_cn, 16);
    assert_eq!(summary.n_sn, 7);
    assert_eq!(summary.element_counts[&"nC4".to_string()], 3);
    assert_eq!(
        summary.element_counts.keys().next().map(String::as_str),
        Some("nC4")
    );

    let yaml = serde_yaml::to_string(&summary).unwrap();
    let restored: crate::symmetry::point_group::PointGroupSummary =
        serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(restored, summary);
}

fn fixture_names() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["h2o", "nh3", "ch4", "benzene", "sf6", "co2"])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]
    #[test]
    fn test_point_group_permutation_invariance(
        name in fixture_names(),
        seed in any::<u64>(),
    ) {
        let mol = load(name);
        let reference = detect(&mol.atoms);
        let mut atoms = mol.atoms.clone();
        // A deterministic shuffle driven by the seed.
        let n = atoms.len();
        let mut state = seed;
        for i in (1..n).rev() {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let j = (state >> 33) as usize % (i + 1);
            atoms.swap(i, j);
        }
        let permuted = detect(&atoms);
        prop_assert_eq!(permuted.name(), reference.name());
        prop_assert_eq!(permuted.element_counts(), reference.element_counts());
    }

    #[test]
    fn test_point_group_rigid_motion_invariance(
        name in fixture_names(),
        axis in prop::array::uniform3(-1.0f64..1.0),
        angle in 0.0f64..std::f64::consts::TAU,
        shift in prop::array::uniform3(-5.0f64..5.0),
    ) {
        let axis = Vector3::from(axis);
        prop_assume!(axis.norm() > 0.1);
        let mol = load(name);
        let reference = detect(&mol.atoms);
        let moved = mol.rotate(angle, &axis).translate(&Vector3::from(shift));
        let pg = detect(&moved.atoms);
        prop_assert_eq!(pg.name(), reference.name());
        prop_assert_eq!(pg.element_counts(), reference.element_counts());
    }
}
