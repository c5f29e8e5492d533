//! Symmetry elements found during point-group detection.

use std::fmt;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Number of element buckets. Bucket `0` holds mirror planes, bucket `1` the inversion centre,
/// buckets `3..FIRST_PROPER` improper axes $`S_n`$ and buckets `FIRST_PROPER + n` proper axes
/// $`C_n`$.
pub(crate) const N_BUCKETS: usize = 23;

/// Offset of the proper-axis buckets.
pub(crate) const FIRST_PROPER: usize = 14;

pub(crate) const PLANES: usize = 0;
pub(crate) const INVERSION: usize = 1;
pub(crate) const S3: usize = 3;
pub(crate) const S4: usize = 4;
pub(crate) const S5: usize = 5;
pub(crate) const S6: usize = 6;
pub(crate) const S8: usize = 8;
pub(crate) const S10: usize = 10;
pub(crate) const S12: usize = 12;
pub(crate) const C2: usize = FIRST_PROPER + 2;
pub(crate) const C3: usize = FIRST_PROPER + 3;
pub(crate) const C4: usize = FIRST_PROPER + 4;
pub(crate) const C5: usize = FIRST_PROPER + 5;
pub(crate) const C6: usize = FIRST_PROPER + 6;
pub(crate) const C8: usize = FIRST_PROPER + 8;

/// Maximum number of elements kept in each bucket. These are the largest counts occurring in
/// any of the supported point groups; a full bucket stops further searches for that element.
pub(crate) const MAX_ELEMENTS: [usize; N_BUCKETS] = [
    15, 0, 0, 1, 3, 1, 10, 0, 1, 0, 6, 0, 1, 0, 0, 0, 15, 10, 6, 6, 10, 0, 1,
];

/// Number of distinct non-identity operations generated by one element of each bucket.
pub(crate) const UNIQUE_OPERATIONS: [usize; N_BUCKETS] = [
    1, 0, 0, 2, 2, 4, 2, 0, 4, 0, 4, 0, 4, 0, 0, 0, 1, 2, 2, 4, 2, 0, 4,
];

/// An enumerated type for the kinds of point-group symmetry element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointGroupElementKind {
    /// A mirror plane, described by its unit normal.
    Plane,

    /// A proper rotation axis $`C_n`$.
    ProperAxis,

    /// An improper rotation axis $`S_n`$.
    ImproperAxis,

    /// A centre of inversion.
    InversionCentre,
}

impl fmt::Display for PointGroupElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plane => write!(f, "plane"),
            Self::ProperAxis => write!(f, "proper axis"),
            Self::ImproperAxis => write!(f, "improper axis"),
            Self::InversionCentre => write!(f, "center of inversion"),
        }
    }
}

/// A structure for a single detected symmetry element.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointGroupElement {
    /// The kind of this element.
    pub kind: PointGroupElementKind,

    /// The order of the axis. Planes have order `0` and the inversion centre order `1`.
    pub order: u32,

    /// The creation index of this element within its detection run, starting from `1`.
    pub index: usize,

    /// The unit axis or plane normal. Absent for the inversion centre.
    pub normal_or_axis: Option<Vector3<f64>>,
}

impl PointGroupElement {
    pub(crate) fn inversion_centre(index: usize) -> Self {
        Self {
            kind: PointGroupElementKind::InversionCentre,
            order: 1,
            index,
            normal_or_axis: None,
        }
    }

    pub(crate) fn plane(normal: &Vector3<f64>, index: usize) -> Self {
        Self {
            kind: PointGroupElementKind::Plane,
            order: 0,
            index,
            normal_or_axis: Some(normal.normalize()),
        }
    }

    /// Constructs the axis belonging to element bucket `bucket`.
    pub(crate) fn axis(axis: &Vector3<f64>, bucket: usize, index: usize) -> Self {
        let kind = if bucket < FIRST_PROPER {
            PointGroupElementKind::ImproperAxis
        } else {
            PointGroupElementKind::ProperAxis
        };
        Self {
            kind,
            order: (bucket % FIRST_PROPER) as u32,
            index,
            normal_or_axis: Some(axis.normalize()),
        }
    }

    /// Returns the Schoenflies label of this element, *e.g.* `Cs`, `S4` or `C3`.
    pub fn label(&self) -> String {
        match self.kind {
            PointGroupElementKind::Plane => "Cs".to_string(),
            PointGroupElementKind::InversionCentre => "Ci".to_string(),
            PointGroupElementKind::ImproperAxis => format!("S{}", self.order),
            PointGroupElementKind::ProperAxis => format!("C{}", self.order),
        }
    }
}

impl fmt::Display for PointGroupElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.normal_or_axis {
            Some(v) => write!(
                f,
                "{} #{} ({:+.4}, {:+.4}, {:+.4})",
                self.label(),
                self.index,
                v[0],
                v[1],
                v[2]
            ),
            None => write!(f, "{} #{}", self.label(), self.index),
        }
    }
}
