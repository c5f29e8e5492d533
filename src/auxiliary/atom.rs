//! Atoms as consumed by point-group detection.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use nalgebra::{Matrix3, Point3, Translation3, Vector3};
use num_traits::ToPrimitive;
use periodic_table;
use serde::{Deserialize, Serialize};

use crate::auxiliary::geometry::Transform;
use crate::auxiliary::misc::HashableFloat;

/// A struct storing a look-up of element symbols to give atomic numbers.
pub struct ElementMap<'a> {
    /// A [`HashMap`] from a symbol string to an atomic number.
    pub map: HashMap<&'a str, u32>,
}

impl Default for ElementMap<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementMap<'static> {
    /// Creates a new [`ElementMap`] for all elements in the periodic table.
    #[must_use]
    pub fn new() -> ElementMap<'static> {
        let map = periodic_table::periodic_table()
            .into_iter()
            .map(|element| (element.symbol, element.atomic_number))
            .collect::<HashMap<_, _>>();
        ElementMap { map }
    }
}

/// A struct representing an atom.
#[derive(Clone, Serialize, Deserialize)]
pub struct Atom {
    /// The atomic number of the atom.
    pub atomic_number: u32,

    /// The atomic symbol of the atom.
    pub atomic_symbol: String,

    /// The position of the atom.
    pub coordinates: Point3<f64>,

    /// The number of covalent bonds this atom makes.
    pub bond_count: u32,

    /// An optional vibrational displacement of the atom.
    pub vibration: Option<Vector3<f64>>,

    /// A threshold for approximate equality comparisons.
    pub threshold: f64,
}

impl Atom {
    /// Parses an atom line in an `xyz` file to construct an [`Atom`].
    ///
    /// # Arguments
    ///
    /// * `line` - A line in an `xyz` file containing an atomic symbol and
    ///     three Cartesian coordinates.
    /// * `emap` - A hash map between atomic symbols and atomic numbers.
    /// * `thresh` - A threshold for approximate equality comparisons.
    ///
    /// # Returns
    ///
    /// The parsed [`Atom`] struct if the line has the correct format,
    /// otherwise [`None`].
    #[must_use]
    pub fn from_xyz(line: &str, emap: &ElementMap, thresh: f64) -> Option<Atom> {
        let split: Vec<&str> = line.split_whitespace().collect();
        if split.len() != 4 {
            return None;
        };
        let coordinates = split[1..]
            .iter()
            .map(|x| x.parse::<f64>().ok())
            .collect::<Option<Vec<_>>>()?;
        Atom::new(
            split[0],
            Point3::new(coordinates[0], coordinates[1], coordinates[2]),
            emap,
            thresh,
        )
    }

    /// Creates an atom of a given element at some coordinates, with no bonds and no vibration.
    ///
    /// # Returns
    ///
    /// The atom, or `None` if `atomic_symbol` is not a known element.
    #[must_use]
    pub fn new(
        atomic_symbol: &str,
        coordinates: Point3<f64>,
        emap: &ElementMap,
        thresh: f64,
    ) -> Option<Atom> {
        let atomic_number = emap.map.get(atomic_symbol).copied().or_else(|| {
            log::error!("Invalid atomic symbol `{atomic_symbol}` encountered.");
            None
        })?;
        Some(Atom {
            atomic_number,
            atomic_symbol: atomic_symbol.to_string(),
            coordinates,
            bond_count: 0,
            vibration: None,
            threshold: thresh,
        })
    }

    /// Returns this atom with its covalent bond count replaced.
    #[must_use]
    pub fn with_bond_count(mut self, bond_count: u32) -> Self {
        self.bond_count = bond_count;
        self
    }

    /// Returns this atom with a vibrational displacement attached.
    #[must_use]
    pub fn with_vibration(mut self, vibration: Vector3<f64>) -> Self {
        self.vibration = Some(vibration);
        self
    }

    /// The equivalence class of this atom for symmetry matching. Two atoms can only be mapped
    /// onto each other by a symmetry operation if they are of the same element and fall in the
    /// same covalent-bond bucket.
    pub fn class(&self) -> u32 {
        self.atomic_number * (1 + self.bond_count.max(3))
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = self
            .threshold
            .log10()
            .abs()
            .round()
            .to_usize()
            .ok_or(fmt::Error)?
            + 1;
        let length = (precision + precision.div_euclid(2)).max(6);
        write!(
            f,
            "{:>9} {:>3} {:+length$.precision$} {:+length$.precision$} {:+length$.precision$}",
            "Atom",
            self.atomic_symbol,
            self.coordinates[0],
            self.coordinates[1],
            self.coordinates[2],
        )
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Transform for Atom {
    fn transform_mut(&mut self, mat: &Matrix3<f64>) {
        self.coordinates = mat * self.coordinates;
        if let Some(vibration) = self.vibration.as_mut() {
            *vibration = mat * *vibration;
        }
    }

    fn translate_mut(&mut self, tvec: &Vector3<f64>) {
        let translation = Translation3::from(*tvec);
        self.coordinates = translation.transform_point(&self.coordinates);
    }
}

impl PartialEq for Atom {
    /// The `[Self::threshold]` value for each atom defines a discrete grid over
    /// the real number field. The coordinates are rounded to take on the values on this
    /// discrete grid which are then used for hashing and comparisons.
    fn eq(&self, other: &Self) -> bool {
        self.atomic_number == other.atomic_number
            && self.bond_count == other.bond_count
            && (0..3).all(|i| {
                approx::relative_eq!(
                    self.coordinates[i].round_factor(1.0 / self.threshold),
                    other.coordinates[i].round_factor(1.0 / other.threshold),
                )
            })
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.atomic_number.hash(state);
        self.bond_count.hash(state);
        for i in 0..3 {
            self.coordinates[i]
                .round_factor(1.0 / self.threshold)
                .integer_decode()
                .hash(state);
        }
    }
}
