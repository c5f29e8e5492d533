//! Collections of atoms.

use std::fmt;
use std::fs;
use std::path::Path;

use anyhow::{self, ensure, format_err};
use nalgebra::{Matrix3, Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::auxiliary::atom::{Atom, ElementMap};
use crate::auxiliary::geometry::Transform;

#[cfg(test)]
#[path = "molecule_tests.rs"]
mod molecule_tests;

/// A struct containing the atoms constituting a molecule or an atom selection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Molecule {
    /// The atoms constituting this molecule.
    pub atoms: Vec<Atom>,

    /// A threshold for approximate equality comparisons.
    pub threshold: f64,
}

impl Molecule {
    /// Parses an `xyz` file to construct a molecule.
    ///
    /// # Arguments
    ///
    /// * `filename` - The `xyz` file to be parsed.
    /// * `thresh` - A threshold for approximate equality comparisons.
    ///
    /// # Returns
    ///
    /// The parsed [`Molecule`] struct, or an error if the file cannot be read or is malformed.
    pub fn from_xyz<P: AsRef<Path>>(filename: P, thresh: f64) -> Result<Self, anyhow::Error> {
        let contents = fs::read_to_string(filename.as_ref()).map_err(|err| {
            format_err!(
                "Unable to read file {}: {err}",
                filename.as_ref().display()
            )
        })?;
        Self::from_xyz_str(&contents, thresh)
    }

    /// Parses the contents of an `xyz` file to construct a molecule.
    pub fn from_xyz_str(contents: &str, thresh: f64) -> Result<Self, anyhow::Error> {
        let emap = ElementMap::new();
        let mut lines = contents.lines();
        let n_atoms = lines
            .next()
            .ok_or_else(|| format_err!("Empty `xyz` contents."))?
            .trim()
            .parse::<usize>()
            .map_err(|err| format_err!("Unable to parse the number of atoms: {err}"))?;
        let atoms = lines
            .skip(1)
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                Atom::from_xyz(line, &emap, thresh)
                    .ok_or_else(|| format_err!("Unable to parse atom line `{line}`."))
            })
            .collect::<Result<Vec<_>, _>>()?;
        ensure!(
            atoms.len() == n_atoms,
            "Expected {} atoms, got {} instead.",
            n_atoms,
            atoms.len()
        );
        Ok(Self::from_atoms(&atoms, thresh))
    }

    /// Constructs a molecule from a slice of atoms.
    #[must_use]
    pub fn from_atoms(atoms: &[Atom], thresh: f64) -> Self {
        Molecule {
            atoms: atoms.to_vec(),
            threshold: thresh,
        }
    }

    /// Returns the number of atoms in this molecule.
    pub fn n_atoms(&self) -> usize {
        self.atoms.len()
    }

    /// Calculates the unweighted centroid of the atoms.
    pub fn centroid(&self) -> Point3<f64> {
        if self.atoms.is_empty() {
            return Point3::origin();
        }
        let sum = self
            .atoms
            .iter()
            .fold(Vector3::zeros(), |acc, atom| acc + atom.coordinates.coords);
        Point3::from(sum / self.atoms.len() as f64)
    }

    /// Assigns to every atom the number of other atoms lying within `max_bond_length` of it.
    ///
    /// # Arguments
    ///
    /// * `max_bond_length` - The largest interatomic distance counted as a covalent bond.
    pub fn assign_bond_counts(&mut self, max_bond_length: f64) {
        let coordinates = self
            .atoms
            .iter()
            .map(|atom| atom.coordinates)
            .collect::<Vec<_>>();
        for (i, atom) in self.atoms.iter_mut().enumerate() {
            let count = coordinates
                .iter()
                .enumerate()
                .filter(|(j, pt)| *j != i && (**pt - atom.coordinates).norm() <= max_bond_length)
                .count();
            atom.bond_count = u32::try_from(count).unwrap_or(u32::MAX);
        }
    }
}

impl fmt::Display for Molecule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in self.atoms.iter() {
            writeln!(f, "{atom}")?;
        }
        Ok(())
    }
}

impl Transform for Molecule {
    fn transform_mut(&mut self, mat: &Matrix3<f64>) {
        for atom in self.atoms.iter_mut() {
            atom.transform_mut(mat);
        }
    }

    fn translate_mut(&mut self, tvec: &Vector3<f64>) {
        for atom in self.atoms.iter_mut() {
            atom.translate_mut(tvec);
        }
    }
}
