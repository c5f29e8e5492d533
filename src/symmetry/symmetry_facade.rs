//! A single entry point composing a space group, a unit cell and a point group.

use nalgebra::{Matrix4, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::auxiliary::atom::Atom;
use crate::symmetry::point_group::{PointGroup, PointGroupDetector};
use crate::symmetry::space_group::{SpaceGroup, SpaceGroupInfo};
use crate::symmetry::space_group_catalog::SpaceGroupCatalog;
use crate::symmetry::symmetry_error::SymmetryError;
use crate::symmetry::symmetry_operation::operation_kind::OperationDescription;
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::twelfths;
use crate::symmetry::unit_cell::{
    ijk_to_point, CellParameters, DisplacementParameters, Ellipsoid, UnitCell,
};

#[cfg(test)]
#[path = "symmetry_facade_tests.rs"]
mod symmetry_facade_tests;

/// A structure holding the symmetry state of one model: an optional space group, an optional
/// unit cell and the most recently detected point group.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SymmetryFacade {
    space_group: Option<SpaceGroup>,
    unit_cell: Option<UnitCell>,
    point_group: Option<PointGroup>,
}

impl SymmetryFacade {
    /// Creates an empty facade.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -----------
    // Point group
    // -----------

    /// Detects the point group of a set of atoms, reusing the previous result when the atoms
    /// and settings are unchanged.
    pub fn set_point_group(&mut self, detector: &PointGroupDetector, atoms: &[Atom]) -> &PointGroup {
        let pg = detector.detect_with_previous(atoms, self.point_group.as_ref());
        self.point_group.insert(pg)
    }

    pub fn point_group(&self) -> Option<&PointGroup> {
        self.point_group.as_ref()
    }

    pub fn point_group_name(&self) -> Option<&str> {
        self.point_group.as_ref().map(PointGroup::name)
    }

    /// Returns the tab-separated element report of the current point group.
    pub fn point_group_info(&self) -> Option<String> {
        self.point_group.as_ref().map(PointGroup::info_table)
    }

    // -----------
    // Space group
    // -----------

    /// Starts an empty space group holding only the identity, unless one already exists.
    pub fn start_space_group(&mut self, do_normalise: bool) {
        if self.space_group.is_none() {
            self.space_group = Some(SpaceGroup::new(do_normalise));
        }
    }

    /// Replaces the space group with one built from a name in any supported notation.
    ///
    /// # Errors
    ///
    /// Errors if the name cannot be resolved. The previous space group is dropped in that
    /// case.
    pub fn set_space_group(
        &mut self,
        name: &str,
        cell: Option<&[f64; 6]>,
    ) -> Result<&SpaceGroup, SymmetryError> {
        self.space_group = None;
        let sg = SpaceGroup::create(name, cell)?;
        log::debug!("Using generated space group {}", sg.dump_info());
        Ok(self.space_group.insert(sg))
    }

    /// Replaces the space group with another one, or removes it.
    pub fn replace_space_group(&mut self, space_group: Option<SpaceGroup>) {
        self.space_group = space_group;
    }

    pub fn has_space_group(&self) -> bool {
        self.space_group.is_some()
    }

    pub fn space_group(&self) -> Option<&SpaceGroup> {
        self.space_group.as_ref()
    }

    fn space_group_mut(&mut self) -> &mut SpaceGroup {
        self.space_group.get_or_insert_with(|| SpaceGroup::new(true))
    }

    /// Adds an operation to the current space group, starting a normalising one if needed.
    pub fn add_space_group_operation(
        &mut self,
        xyz: &str,
        op_id: usize,
    ) -> Result<usize, SymmetryError> {
        self.space_group_mut().add_operation(xyz, op_id)
    }

    /// Adds an operation given as a fractional $`4 \times 4`$ matrix.
    pub fn add_space_group_operation_matrix(
        &mut self,
        matrix: &Matrix4<f64>,
    ) -> Result<usize, SymmetryError> {
        self.space_group_mut().add_operation_matrix(matrix)
    }

    /// Applies a SHELX `LATT` code to the current space group.
    pub fn set_lattice(&mut self, latt: i32) -> Result<(), SymmetryError> {
        self.space_group_mut().set_lattice(latt)
    }

    pub fn space_group_name(&self) -> &str {
        self.space_group.as_ref().map_or("", SpaceGroup::name)
    }

    pub fn lattice_designation(&self) -> Option<String> {
        self.space_group
            .as_ref()
            .and_then(SpaceGroup::lattice_designation)
    }

    /// Finalises the operations of the current space group, recentring them on `atoms` if
    /// given.
    pub fn set_final_operations(&mut self, atoms: Option<&mut [Point3<f64>]>) {
        let Some(sg) = self.space_group.as_mut() else {
            log::warn!("No space group to finalise.");
            return;
        };
        match atoms {
            Some(atoms) => sg.finalise_with_atoms(atoms),
            None => sg.finalise(),
        }
    }

    pub fn space_group_operation_count(&self) -> usize {
        self.space_group
            .as_ref()
            .map_or(0, SpaceGroup::operation_count)
    }

    pub fn space_group_operation(&self, i: usize) -> Option<&SymmetryOperation> {
        self.space_group.as_ref()?.operation(i)
    }

    pub fn space_group_xyz(&self, i: usize, normalised: bool) -> Option<&str> {
        self.space_group.as_ref()?.xyz(i, normalised)
    }

    /// Applies operation `i` and a lattice translation to a fractional point.
    pub fn new_space_group_point(
        &self,
        i: usize,
        pt: &Point3<f64>,
        lattice_translation: [i32; 3],
    ) -> Option<Point3<f64>> {
        self.space_group
            .as_ref()?
            .new_point(i, pt, lattice_translation)
    }

    /// Transforms the Cartesian axis vectors of an ellipsoid centred at `centre` by operation
    /// `i`. Requires both a space group and a unit cell.
    pub fn rotate_ellipsoid(
        &self,
        i: usize,
        centre: &Point3<f64>,
        vectors: &[Vector3<f64>],
    ) -> Option<Vec<Vector3<f64>>> {
        let uc = self.unit_cell.as_ref()?;
        let op = self.space_group_operation(i)?;
        Some(op.rotate_ellipsoid(centre, vectors, uc))
    }

    /// Classifies operation `i` geometrically relative to a Cartesian reference point.
    ///
    /// # Errors
    ///
    /// Errors if there is no space group, no unit cell or no such operation, or if the
    /// classification itself fails.
    pub fn symmetry_operation_description(
        &self,
        i: usize,
        pt00: Option<&Point3<f64>>,
        target: Option<&Point3<f64>>,
    ) -> Result<OperationDescription, SymmetryError> {
        let uc = self.unit_cell.as_ref().ok_or_else(|| {
            SymmetryError::GeometricDegeneracy("No unit cell available.".to_string())
        })?;
        let op = self.space_group_operation(i).ok_or_else(|| {
            SymmetryError::LookupMiss(format!("No space-group operation with index {i}."))
        })?;
        op.describe(uc, pt00, target)
    }

    /// Summarises the current space group.
    pub fn space_group_info(&self) -> Option<SpaceGroupInfo> {
        self.space_group.as_ref().map(SpaceGroup::info)
    }

    /// Reports the catalog entry a name resolves to, without building a group.
    pub fn space_group_lookup(name: &str, cell: Option<&[f64; 6]>) -> Result<String, SymmetryError> {
        let catalog = SpaceGroupCatalog::get();
        let index = catalog.resolve(name, cell)?;
        catalog
            .entry(index)
            .map(|entry| entry.name.clone())
            .ok_or_else(|| SymmetryError::LookupMiss(name.to_string()))
    }

    /// Formats a fractional point with coordinates in thirds or twelfths.
    pub fn fcoord(p: &Point3<f64>) -> String {
        twelfths::fcoord(&[p.x, p.y, p.z])
    }

    /// Parses an operator string into the canonical string and fractional matrix.
    pub fn matrix_from_string(xyz: &str) -> Result<(String, Matrix4<f64>), SymmetryError> {
        let op = SymmetryOperation::parse(xyz, 0, false)?.finalised();
        Ok((op.xyz.clone(), *op.matrix()))
    }

    /// Converts a cell index such as `555` into a fractional point.
    pub fn ijk_to_point(nnn: i32) -> Point3<f64> {
        ijk_to_point(nnn, 0)
    }

    // ---------
    // Unit cell
    // ---------

    /// Replaces the unit cell.
    pub fn set_unit_cell(&mut self, parameters: &CellParameters) -> Result<&UnitCell, SymmetryError> {
        let uc = UnitCell::new(parameters)?;
        Ok(self.unit_cell.insert(uc))
    }

    pub fn has_unit_cell(&self) -> bool {
        self.unit_cell.is_some()
    }

    pub fn unit_cell(&self) -> Option<&UnitCell> {
        self.unit_cell.as_ref()
    }

    pub fn unit_cell_mut(&mut self) -> Option<&mut UnitCell> {
        self.unit_cell.as_mut()
    }

    pub fn to_cartesian(&self, pt: &Point3<f64>, absolute: bool) -> Option<Point3<f64>> {
        self.unit_cell.as_ref().map(|uc| uc.to_cartesian(pt, absolute))
    }

    pub fn to_fractional(&self, pt: &Point3<f64>, absolute: bool) -> Option<Point3<f64>> {
        self.unit_cell
            .as_ref()
            .map(|uc| uc.to_fractional(pt, absolute))
    }

    /// Wraps a Cartesian point into the current cell.
    pub fn to_unit_cell(&self, pt: &Point3<f64>, offset: Option<&Vector3<f64>>) -> Option<Point3<f64>> {
        self.unit_cell.as_ref().map(|uc| uc.to_unit_cell(pt, offset))
    }

    /// Converts displacement parameters into an ellipsoid in the current cell.
    pub fn ellipsoid(
        &self,
        displacement: &DisplacementParameters,
    ) -> Result<Ellipsoid, SymmetryError> {
        self.unit_cell
            .as_ref()
            .ok_or_else(|| SymmetryError::GeometricDegeneracy("No unit cell available.".to_string()))?
            .ellipsoid(displacement)
    }

    pub fn is_periodic(&self) -> bool {
        self.unit_cell.is_some()
    }
}
