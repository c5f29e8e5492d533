use approx;
use nalgebra::{Point3, Vector3};

use crate::auxiliary::atom::{Atom, ElementMap};
use crate::auxiliary::geometry::Transform;
use crate::auxiliary::molecule::Molecule;

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

#[test]
fn test_molecule_from_xyz_co2() {
    let path: String = format!("{}{}", ROOT, "/tests/xyz/co2.xyz");
    let mol = Molecule::from_xyz(&path, 1e-7).unwrap();
    assert_eq!(mol.n_atoms(), 3);
    assert_eq!(mol.atoms[0].atomic_symbol, "C");
    assert_eq!(mol.atoms[1].atomic_number, 8);
    approx::assert_relative_eq!(mol.centroid(), Point3::origin(), epsilon = 1e-10);
}

#[test]
fn test_molecule_from_xyz_str_bad_count() {
    let contents = "3\ncomment\nH 0.0 0.0 0.0\nH 0.0 0.0 0.74\n";
    assert!(Molecule::from_xyz_str(contents, 1e-7).is_err());
}

#[test]
fn test_molecule_from_xyz_str_bad_symbol() {
    let contents = "1\ncomment\nXx 0.0 0.0 0.0\n";
    assert!(Molecule::from_xyz_str(contents, 1e-7).is_err());
}

#[test]
fn test_molecule_bond_counts_and_classes() {
    let emap = ElementMap::new();
    let atoms = [
        Atom::new("C", Point3::origin(), &emap, 1e-7).unwrap(),
        Atom::new("H", Point3::new(1.0, 0.0, 0.0), &emap, 1e-7).unwrap(),
        Atom::new("H", Point3::new(-1.0, 0.0, 0.0), &emap, 1e-7).unwrap(),
    ];
    let mut mol = Molecule::from_atoms(&atoms, 1e-7);
    mol.assign_bond_counts(1.2);
    assert_eq!(mol.atoms[0].bond_count, 2);
    assert_eq!(mol.atoms[1].bond_count, 1);
    // Bond counts of three or fewer share a bucket.
    assert_eq!(mol.atoms[0].class(), 6 * 4);
    assert_eq!(mol.atoms[1].class(), mol.atoms[2].class());
}

#[test]
fn test_molecule_transform() {
    let emap = ElementMap::new();
    let atoms = [Atom::new("O", Point3::new(1.0, 0.0, 0.0), &emap, 1e-7)
        .unwrap()
        .with_vibration(Vector3::new(0.0, 1.0, 0.0))];
    let mol = Molecule::from_atoms(&atoms, 1e-7)
        .rotate(std::f64::consts::FRAC_PI_2, &Vector3::z())
        .translate(&Vector3::new(0.0, 0.0, 2.0));
    approx::assert_relative_eq!(
        mol.atoms[0].coordinates,
        Point3::new(0.0, 1.0, 2.0),
        epsilon = 1e-12
    );
    approx::assert_relative_eq!(
        mol.atoms[0].vibration.unwrap(),
        Vector3::new(-1.0, 0.0, 0.0),
        epsilon = 1e-12
    );
}
