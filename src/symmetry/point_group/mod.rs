//! Point-group detection for finite sets of atoms.
//!
//! Candidate axes are generated from pairs and triples of equivalent atoms and accepted only
//! when the corresponding rotation (or rotoinversion) maps the whole set onto itself within
//! a distance tolerance. Mirror planes are found in the same way, after which a fixed
//! decision tree on the element inventory yields the Schoenflies name.

use std::collections::BTreeMap;
use std::fmt;

use counter::Counter;
use derive_builder::Builder;
use indexmap::IndexMap;
use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::auxiliary::atom::Atom;
use crate::symmetry::symmetry_error::SymmetryError;

pub mod point_group_element;

use point_group_element::{
    PointGroupElement, PointGroupElementKind, C2, C3, C4, C5, C6, C8, FIRST_PROPER, INVERSION,
    MAX_ELEMENTS, N_BUCKETS, PLANES, S10, S12, S3, S4, S5, S6, S8,
    UNIQUE_OPERATIONS,
};

#[cfg(test)]
#[path = "point_group_tests.rs"]
mod point_group_tests;

/// Largest number of atoms for which detection is attempted.
pub const ATOM_COUNT_MAX: usize = 100;

/// Name reported before any detection has taken place.
pub const UNDETERMINED_NAME: &str = "C_1?";

/// Name reported when the atom cap is exceeded.
pub fn capacity_exceeded_name() -> String {
    format!(
        "point group not determined -- atomCount > {ATOM_COUNT_MAX} -- select fewer atoms and \
        try again."
    )
}

// ==================
// Struct definitions
// ==================

/// A structure for the settings of a point-group detection.
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct PointGroupDetector {
    /// Largest distance between an image point and an atom for the two to be considered
    /// coincident.
    #[builder(default = "0.2")]
    distance_tolerance: f64,

    /// Largest angle in degrees between two directions for them to be considered parallel.
    #[builder(default = "8.0")]
    linear_tolerance: f64,

    /// Whether atoms are displaced along their vibration vectors before detection.
    #[builder(default = "false")]
    use_vibrations: bool,
}

impl PointGroupDetectorBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(tol) = self.distance_tolerance {
            if tol <= 0.0 {
                log::error!("Distance tolerance {tol} is invalid. It must be positive.");
                return Err("Invalid distance tolerance.".to_string());
            }
        }
        if let Some(tol) = self.linear_tolerance {
            if !(0.0..90.0).contains(&tol) {
                log::error!("Linear tolerance {tol} is invalid. It must lie in [0, 90) degrees.");
                return Err("Invalid linear tolerance.".to_string());
            }
        }
        Ok(())
    }
}

impl Default for PointGroupDetector {
    fn default() -> Self {
        Self {
            distance_tolerance: 0.2,
            linear_tolerance: 8.0,
            use_vibrations: false,
        }
    }
}

/// A structure for a detected point group. This is an immutable snapshot of the element
/// inventory of one detection run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointGroup {
    name: String,

    /// Whether detection ran to completion.
    determined: bool,

    distance_tolerance: f64,

    linear_tolerance: f64,

    use_vibrations: bool,

    /// The positions used for detection, after any vibrational displacement.
    points: Vec<Point3<f64>>,

    /// The equivalence class of each atom.
    classes: Vec<u32>,

    centre: Point3<f64>,

    radius: f64,

    /// Detected elements, bucketed as described in [`point_group_element`].
    elements: Vec<Vec<PointGroupElement>>,

    /// Creation index of the principal axis.
    principal_axis: Option<usize>,

    /// Creation index of the principal plane.
    principal_plane: Option<usize>,
}

/// A structure for a serialisable summary of a detected point group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointGroupSummary {
    pub name: String,
    pub n_atoms: usize,
    pub n_total: usize,
    pub n_ci: usize,
    pub n_cs: usize,
    pub n_cn: usize,
    pub n_sn: usize,
    pub distance_tolerance: f64,
    pub linear_tolerance: f64,

    /// Number of elements per label, *e.g.* `nC2`, from the highest bucket down.
    pub element_counts: IndexMap<String, usize>,

    pub principal_axis: Option<Vector3<f64>>,
    pub principal_plane: Option<Vector3<f64>>,
}

// =====================
// Detector search state
// =====================

/// Working state of a single detection run.
struct ElementSearch {
    points: Vec<Point3<f64>>,
    classes: Vec<u32>,
    centre: Point3<f64>,
    centre_index: Option<usize>,
    distance_tolerance: f64,
    cos_tolerance: f64,
    have_inversion_centre: bool,
    elements: Vec<Vec<PointGroupElement>>,
    n_ops: usize,
    principal_axis: Option<usize>,
    principal_plane: Option<usize>,
}

impl ElementSearch {
    fn new(points: Vec<Point3<f64>>, classes: Vec<u32>, detector: &PointGroupDetector) -> Self {
        let centre = Point3::from(
            points
                .iter()
                .fold(Vector3::zeros(), |acc, pt| acc + pt.coords)
                / points.len() as f64,
        );
        let centre_index = points
            .iter()
            .position(|pt| (pt - centre).norm() < detector.distance_tolerance);
        Self {
            points,
            classes,
            centre,
            centre_index,
            distance_tolerance: detector.distance_tolerance,
            cos_tolerance: detector.linear_tolerance.to_radians().cos(),
            have_inversion_centre: false,
            elements: vec![vec![]; N_BUCKETS],
            n_ops: 0,
            principal_axis: None,
            principal_plane: None,
        }
    }

    fn count(&self, bucket: usize) -> usize {
        self.elements[bucket].len()
    }

    fn first_index(&self, bucket: usize) -> Option<usize> {
        self.elements[bucket].first().map(|el| el.index)
    }

    fn next_index(&mut self) -> usize {
        self.n_ops += 1;
        self.n_ops
    }

    /// Requires unit vectors.
    fn is_parallel(&self, v1: &Vector3<f64>, v2: &Vector3<f64>) -> bool {
        v1.dot(v2).abs() >= self.cos_tolerance
    }

    /// Requires unit vectors.
    fn is_perpendicular(&self, v1: &Vector3<f64>, v2: &Vector3<f64>) -> bool {
        v1.dot(v2).abs() <= 1.0 - self.cos_tolerance
    }

    /// Checks whether a rotation about the centre, optionally followed by inversion through
    /// the centre, maps every atom onto an atom of the same class.
    fn check_operation(&self, rotation: Option<&UnitQuaternion<f64>>, invert: bool) -> bool {
        self.points.iter().enumerate().all(|(i, a1)| {
            if Some(i) == self.centre_index {
                return true;
            }
            let mut pt = match rotation {
                Some(q) => self.centre + q * (a1 - self.centre),
                None => *a1,
            };
            if invert {
                pt = self.centre + (self.centre - pt);
            }
            if (pt - a1).norm() < self.distance_tolerance {
                return true;
            }
            self.points
                .iter()
                .zip(self.classes.iter())
                .enumerate()
                .any(|(j, (a2, class))| {
                    j != i
                        && *class == self.classes[i]
                        && (pt - a2).norm() < self.distance_tolerance
                })
        })
    }

    fn find_inversion_centre(&mut self) {
        self.have_inversion_centre = self.check_operation(None, true);
        if self.have_inversion_centre {
            let index = self.next_index();
            self.elements[INVERSION].push(PointGroupElement::inversion_centre(index));
        }
    }

    fn is_linear(&self) -> bool {
        if self.points.len() < 2 {
            return false;
        }
        let mut reference: Option<Vector3<f64>> = None;
        for (i, pt) in self.points.iter().enumerate() {
            if Some(i) == self.centre_index {
                continue;
            }
            let v = pt - self.centre;
            if v.norm() < f64::EPSILON {
                continue;
            }
            let v = v.normalize();
            match reference {
                None => reference = Some(v),
                Some(ref v1) => {
                    if !self.is_parallel(v1, &v) {
                        return false;
                    }
                }
            }
        }
        true
    }

    fn have_axis(&self, bucket: usize, v: &Vector3<f64>) -> bool {
        self.count(bucket) == MAX_ELEMENTS[bucket]
            || self.elements[bucket].iter().any(|el| {
                el.normal_or_axis
                    .map_or(false, |axis| self.is_parallel(v, &axis))
            })
    }

    fn add_axis(&mut self, bucket: usize, v: &Vector3<f64>) {
        if !(v.norm() > f64::EPSILON) {
            return;
        }
        let v = v.normalize();
        if self.have_axis(bucket, &v) {
            return;
        }
        let index = self.next_index();
        self.elements[bucket].push(PointGroupElement::axis(&v, bucket, index));
    }

    /// Tests an axis of the order given by `bucket` along `v` and records it, together with
    /// the elements it implies, if it is a symmetry element.
    fn check_axis_order(&mut self, bucket: usize, v: &Vector3<f64>) -> bool {
        let conflicting = match bucket {
            C8 => self.count(C3) > 0 || self.count(C5) > 0,
            C6 | C4 => self.count(C5) > 0,
            C3 => self.count(C8) > 0,
            C5 => self.count(C4) > 0 || self.count(C6) > 0 || self.count(C8) > 0,
            _ => false,
        };
        if conflicting || !(v.norm() > f64::EPSILON) {
            return false;
        }
        let v = v.normalize();
        if self.have_axis(bucket, &v) {
            return false;
        }
        let improper = bucket < FIRST_PROPER;
        let angle = if improper { 180.0 } else { 0.0 } + 360.0 / (bucket % FIRST_PROPER) as f64;
        let q = UnitQuaternion::from_axis_angle(&Unit::new_normalize(v), angle.to_radians());
        if !self.check_operation(Some(&q), improper) {
            return false;
        }
        self.add_axis(bucket, &v);
        match bucket {
            C2 => {
                self.check_axis_order(S4, &v);
            }
            C3 => {
                self.check_axis_order(S3, &v);
                if self.have_inversion_centre {
                    self.add_axis(S6, &v);
                }
            }
            C4 => {
                self.add_axis(C2, &v);
                self.check_axis_order(S4, &v);
                self.check_axis_order(S8, &v);
            }
            C5 => {
                self.check_axis_order(S5, &v);
                if self.have_inversion_centre {
                    self.add_axis(S10, &v);
                }
            }
            C6 => {
                self.add_axis(C2, &v);
                self.add_axis(C3, &v);
                self.check_axis_order(S3, &v);
                self.check_axis_order(S6, &v);
                self.check_axis_order(S12, &v);
            }
            // An S16 axis of D8d is not searched for.
            C8 => {
                self.add_axis(C2, &v);
                self.add_axis(C4, &v);
            }
            _ => {}
        }
        true
    }

    fn check_all_axes(&mut self, v: &Vector3<f64>) {
        for bucket in C2..N_BUCKETS {
            if self.count(bucket) < MAX_ELEMENTS[bucket] {
                self.check_axis_order(bucket, v);
            }
        }
    }

    /// Returns the bucket of the highest-order axis, preferring the proper axis of the same
    /// order over an improper one.
    fn highest_order(&self) -> usize {
        match (2..FIRST_PROPER).rev().find(|&n| self.count(n) > 0) {
            Some(n) if n + FIRST_PROPER < N_BUCKETS && self.count(n + FIRST_PROPER) > 0 => {
                n + FIRST_PROPER
            }
            Some(n) => n,
            None => (2..N_BUCKETS)
                .rev()
                .find(|&n| self.count(n) > 0)
                .unwrap_or(1),
        }
    }

    fn find_c_axes(&mut self) -> usize {
        let n_points = self.points.len();

        // Axes relating pairs of equivalent atoms.
        for i in (0..n_points).rev() {
            if Some(i) == self.centre_index {
                continue;
            }
            for j in ((i + 1)..n_points).rev() {
                if self.classes[j] != self.classes[i] {
                    continue;
                }
                let a1 = self.points[i];
                let a2 = self.points[j];
                let v1 = a1 - self.centre;
                let v2 = a2 - self.centre;
                if v1.norm() < f64::EPSILON || v2.norm() < f64::EPSILON {
                    self.check_all_axes(&(Point3::from((a1.coords + a2.coords) * 0.5) - self.centre));
                    continue;
                }
                let v1 = v1.normalize();
                let v2 = v2.normalize();
                if self.is_parallel(&v1, &v2) {
                    self.check_all_axes(&v1);
                    continue;
                }

                if self.count(C2) < MAX_ELEMENTS[C2] {
                    let midpoint = Point3::from((a1.coords + a2.coords) * 0.5);
                    self.check_all_axes(&(midpoint - self.centre));
                }

                let order = 2.0 * std::f64::consts::PI / v1.angle(&v2);
                let i_order = (order + 0.01) as usize;
                if order - (i_order as f64) > 0.02 {
                    continue;
                }
                let bucket = i_order + FIRST_PROPER;
                if bucket >= N_BUCKETS {
                    continue;
                }
                if self.count(bucket) < MAX_ELEMENTS[bucket] {
                    self.check_axis_order(bucket, &v1.cross(&v2));
                }
            }
        }

        // Threefold axes along sums of three twofold axes.
        let vs = self.elements[C2]
            .iter()
            .filter_map(|el| el.normal_or_axis)
            .flat_map(|v| [v, -v])
            .collect::<Vec<_>>();
        for i in (2..vs.len()).rev() {
            for j in (1..i).rev() {
                for k in (0..j).rev() {
                    let v3 = vs[i] + vs[j] + vs[k];
                    if v3.norm() < 1.0 {
                        continue;
                    }
                    self.check_axis_order(C3, &v3);
                }
            }
        }

        // Triples of the least populous class with at least three atoms.
        let class_counts = self.classes.iter().copied().collect::<Counter<u32>>();
        let least_class = class_counts
            .iter()
            .filter(|(_, n)| **n > 2)
            .min_by_key(|(class, n)| (**n, **class))
            .map(|(class, _)| *class);
        if let Some(least_class) = least_class {
            let members = (0..n_points)
                .filter(|&i| self.classes[i] == least_class)
                .collect::<Vec<_>>();
            'triples: for (x, &i) in members.iter().enumerate() {
                for (y, &j) in members.iter().enumerate().skip(x + 1) {
                    for &k in members.iter().skip(y + 1) {
                        let (pi, pj, pk) = (self.points[i], self.points[j], self.points[k]);
                        let v1 = pi - pj;
                        let v2 = pi - pk;
                        let normal = v1.normalize().cross(&v2.normalize());
                        self.check_all_axes(&normal);
                        let mid = (pi - self.centre) + (pj - self.centre) + (pk - self.centre);
                        if mid.norm() > f64::EPSILON && normal.norm() > f64::EPSILON {
                            let mid = mid.normalize();
                            if !self.is_parallel(&mid, &normal.normalize()) {
                                self.check_all_axes(&mid);
                            }
                        }
                        if self.count(C5) == MAX_ELEMENTS[C5] {
                            break 'triples;
                        }
                    }
                }
            }
        }

        // Twofold axes through the geometric centres of each class. With an inversion centre
        // all class centroids coincide, so a single representative atom is used instead.
        let mut class_centres: BTreeMap<u32, Vector3<f64>> = BTreeMap::new();
        for i in (0..n_points).rev() {
            let rel = self.points[i] - self.centre;
            match class_centres.get_mut(&self.classes[i]) {
                None => {
                    class_centres.insert(self.classes[i], rel);
                }
                Some(_) if self.have_inversion_centre => {}
                Some(sum) => *sum += rel,
            }
        }
        if !self.have_inversion_centre {
            for (class, sum) in class_centres.iter_mut() {
                *sum /= class_counts[class] as f64;
            }
        }
        let centres = class_centres.values().copied().collect::<Vec<_>>();
        for (i, ci) in centres.iter().enumerate() {
            for (j, cj) in centres.iter().enumerate() {
                if i == j {
                    continue;
                }
                let v = if self.have_inversion_centre {
                    ci.cross(cj)
                } else {
                    ci - cj
                };
                self.check_axis_order(C2, &v);
            }
        }

        self.highest_order()
    }

    fn get_plane(&mut self, normal: &Vector3<f64>) -> usize {
        if !(normal.norm() > f64::EPSILON) {
            return self.count(PLANES);
        }
        let normal = normal.normalize();
        if !self.have_axis(PLANES, &normal) {
            let q = UnitQuaternion::from_axis_angle(&Unit::new_normalize(normal), std::f64::consts::PI);
            if self.check_operation(Some(&q), true) {
                let index = self.next_index();
                self.elements[PLANES].push(PointGroupElement::plane(&normal, index));
            }
        }
        self.count(PLANES)
    }

    fn find_planes(&mut self) -> usize {
        let n_points = self.points.len();
        let have_axes = self.highest_order() > 1;
        let mut n_planes = 0;
        for i in (0..n_points).rev() {
            if Some(i) == self.centre_index {
                continue;
            }
            for j in ((i + 1)..n_points).rev() {
                if have_axes && self.classes[j] != self.classes[i] {
                    continue;
                }
                let a1 = self.points[i];
                let a2 = self.points[j];

                // Planes containing both atoms and the centre.
                let v1 = a1 - self.centre;
                let v2 = a2 - self.centre;
                if v1.norm() > f64::EPSILON && v2.norm() > f64::EPSILON {
                    let (v1, v2) = (v1.normalize(), v2.normalize());
                    if !self.is_parallel(&v1, &v2) {
                        self.get_plane(&v1.cross(&v2));
                    }
                }

                // Planes bisecting the two atoms.
                n_planes = self.get_plane(&(a2 - a1));
                if n_planes == MAX_ELEMENTS[PLANES] {
                    return n_planes;
                }
            }
        }

        if have_axes {
            let normals = (C2..N_BUCKETS)
                .flat_map(|bucket| self.elements[bucket].iter().filter_map(|el| el.normal_or_axis))
                .collect::<Vec<_>>();
            for normal in normals {
                n_planes = self.get_plane(&normal);
            }
        }
        n_planes
    }

    fn find_additional_axes(&mut self, n_planes: usize) {
        let planes = self.elements[PLANES]
            .iter()
            .filter_map(|el| el.normal_or_axis)
            .collect::<Vec<_>>();
        let cn = n_planes + FIRST_PROPER;
        if n_planes > 1 && cn < N_BUCKETS && self.count(cn) == 0 {
            let v = planes[0].cross(&planes[1]);
            if !self.check_axis_order(cn, &v) && n_planes > 2 {
                let v = planes[1].cross(&planes[2]);
                self.check_axis_order(cn - 1, &v);
            }
        }
        if self.count(C2) == 0 && n_planes > 2 {
            for i in 0..(n_planes - 1) {
                for j in (i + 1)..n_planes {
                    self.check_axis_order(C2, &(planes[i] + planes[j]));
                }
            }
        }
    }

    /// The principal plane is the one perpendicular to more than two other planes.
    fn set_principal_plane(&mut self, n: usize, n_planes: usize) -> Option<usize> {
        if n_planes == 1 {
            self.principal_plane = self.first_index(PLANES);
            return self.principal_plane;
        }
        if n_planes == 0 || n_planes + FIRST_PROPER == n {
            return None;
        }
        let normals = self.elements[PLANES]
            .iter()
            .filter_map(|el| el.normal_or_axis)
            .collect::<Vec<_>>();
        let found = (0..normals.len()).find(|&i| {
            normals
                .iter()
                .filter(|vj| self.is_perpendicular(&normals[i], vj))
                .count()
                > 2
        })?;
        self.elements[PLANES].swap(0, found);
        self.principal_plane = self.first_index(PLANES);
        self.principal_plane
    }

    fn set_principal_axis(&mut self, n: usize, n_planes: usize) -> Option<usize> {
        let principal_plane = self.set_principal_plane(n, n_planes);
        if (n_planes == 0 && n < FIRST_PROPER) || self.count(n) == 1 {
            if n_planes > 0 && n < FIRST_PROPER {
                // The twofold axis coinciding with the improper axis.
                let improper = self.elements[n].first().and_then(|el| el.normal_or_axis);
                let bucket = FIRST_PROPER + n / 2;
                if let Some(axis) = improper {
                    if let Some(found) = self.elements[bucket].iter().position(|el| {
                        el.normal_or_axis
                            .map_or(false, |v| self.is_parallel(&v, &axis))
                    }) {
                        self.elements[bucket].swap(0, found);
                    }
                }
                return self.first_index(bucket);
            }
            return self.first_index(n);
        }

        // D2, D2d and D2h: the twofold axis normal to the principal plane.
        principal_plane?;
        let normal = self.elements[PLANES]
            .first()
            .and_then(|el| el.normal_or_axis)?;
        let found = self.elements[C2].iter().position(|el| {
            el.normal_or_axis
                .map_or(false, |v| self.is_parallel(&normal, &v))
        })?;
        self.elements[C2].swap(0, found);
        self.first_index(C2)
    }

    /// Assigns the Schoenflies name from the element inventory.
    fn classify(&mut self, n_planes: usize) -> String {
        let mut n = self.highest_order();
        let inv = self.have_inversion_centre;
        if self.count(C3) > 1 {
            let name = if self.count(C5) > 1 {
                if inv { "Ih" } else { "I" }
            } else if self.count(C4) > 1 {
                if inv { "Oh" } else { "O" }
            } else if n_planes > 0 {
                if inv { "Th" } else { "Td" }
            } else {
                "T"
            };
            return name.to_string();
        }

        if n < 2 {
            return if n_planes == 1 {
                "Cs"
            } else if inv {
                "Ci"
            } else {
                "C1"
            }
            .to_string();
        }

        if (n % 2 == 1 && self.count(C2) > 0) || (n % 2 == 0 && self.count(C2) > 1) {
            self.principal_axis = self.set_principal_axis(n, n_planes);
            if n_planes == 0 {
                return if n < FIRST_PROPER {
                    format!("S{n}")
                } else {
                    format!("D{}", n - FIRST_PROPER)
                };
            }
            // The highest axis may be S2n while the group is Dnd or Dnh.
            n = if n < FIRST_PROPER { n / 2 } else { n - FIRST_PROPER };
            return if n_planes == n {
                format!("D{n}d")
            } else {
                format!("D{n}h")
            };
        }

        if n_planes == 0 {
            self.principal_axis = self.first_index(n);
            return if n < FIRST_PROPER {
                format!("S{n}")
            } else {
                format!("C{}", n - FIRST_PROPER)
            };
        }

        if n_planes + FIRST_PROPER == n {
            self.principal_axis = self.first_index(n);
            return format!("C{n_planes}v");
        }

        self.principal_axis = self.first_index(if n < FIRST_PROPER { n + FIRST_PROPER } else { n });
        self.principal_plane = self.first_index(PLANES);
        n = if n < FIRST_PROPER { n / 2 } else { n - FIRST_PROPER };
        format!("C{n}h")
    }

    fn run(&mut self) -> String {
        self.find_inversion_centre();

        if self.is_linear() {
            let v = self.points[1] - self.points[0];
            self.add_axis(C2, &v);
            self.principal_axis = self.first_index(C2);
            if !self.have_inversion_centre {
                return "C(infinity)v".to_string();
            }
            if v.norm() > f64::EPSILON {
                let index = self.next_index();
                self.elements[PLANES].push(PointGroupElement::plane(&v, index));
                self.principal_plane = Some(index);
            }
            return "D(infinity)h".to_string();
        }

        self.find_c_axes();
        let n_planes = self.find_planes();
        self.find_additional_axes(n_planes);
        self.classify(n_planes)
    }
}

// =====================
// Trait implementations
// =====================

impl PointGroupDetector {
    /// Returns a builder to construct a new detector.
    pub fn builder() -> PointGroupDetectorBuilder {
        PointGroupDetectorBuilder::default()
    }

    pub fn distance_tolerance(&self) -> f64 {
        self.distance_tolerance
    }

    pub fn linear_tolerance(&self) -> f64 {
        self.linear_tolerance
    }

    pub fn use_vibrations(&self) -> bool {
        self.use_vibrations
    }

    fn points_and_classes(&self, atoms: &[Atom]) -> (Vec<Point3<f64>>, Vec<u32>) {
        atoms
            .iter()
            .map(|atom| {
                let pt = match (self.use_vibrations, atom.vibration) {
                    (true, Some(vib)) => atom.coordinates + vib,
                    _ => atom.coordinates,
                };
                (pt, atom.class())
            })
            .unzip()
    }

    /// Checks whether a previous result was obtained with the same settings for identical
    /// atoms, in which case it can be reused as it is. Positions must be exactly equal.
    pub fn is_equivalent_to(&self, atoms: &[Atom], previous: &PointGroup) -> bool {
        if self.distance_tolerance != previous.distance_tolerance
            || self.linear_tolerance != previous.linear_tolerance
            || self.use_vibrations != previous.use_vibrations
            || atoms.len() != previous.n_atoms()
        {
            return false;
        }
        let (points, classes) = self.points_and_classes(atoms);
        classes == previous.classes && points == previous.points
    }

    /// Detects the point group of a set of atoms.
    ///
    /// # Arguments
    ///
    /// * `atoms` - The atoms. Each atom's equivalence class is determined by its element and
    ///     covalent-bond count.
    ///
    /// # Returns
    ///
    /// The detected point group. More than [`ATOM_COUNT_MAX`] atoms give an undetermined
    /// result with a descriptive name.
    pub fn detect(&self, atoms: &[Atom]) -> PointGroup {
        let mut pg = PointGroup {
            name: UNDETERMINED_NAME.to_string(),
            determined: false,
            distance_tolerance: self.distance_tolerance,
            linear_tolerance: self.linear_tolerance,
            use_vibrations: self.use_vibrations,
            points: vec![],
            classes: vec![],
            centre: Point3::origin(),
            radius: 0.0,
            elements: vec![vec![]; N_BUCKETS],
            principal_axis: None,
            principal_plane: None,
        };
        if atoms.len() > ATOM_COUNT_MAX {
            let err = SymmetryError::CapacityExceeded(format!(
                "Too many atoms for point group calculation: {} > {ATOM_COUNT_MAX}.",
                atoms.len()
            ));
            log::error!("{err}");
            pg.name = capacity_exceeded_name();
            return pg;
        }
        let (points, classes) = self.points_and_classes(atoms);
        pg.points = points.clone();
        pg.classes = classes.clone();
        if points.is_empty() {
            log::warn!("No atoms given for point-group detection.");
            return pg;
        }

        let mut search = ElementSearch::new(points, classes, self);
        let name = search.run();
        log::debug!("Point group detected: {name}");

        pg.radius = search
            .points
            .iter()
            .map(|pt| OrderedFloat((pt - search.centre).norm()))
            .max()
            .map_or(0.0, |r| r.into_inner());
        pg.name = name;
        pg.determined = true;
        pg.centre = search.centre;
        pg.elements = search.elements;
        pg.principal_axis = search.principal_axis;
        pg.principal_plane = search.principal_plane;
        pg
    }

    /// Detects the point group of a set of atoms, reusing `previous` when
    /// [`Self::is_equivalent_to`] holds.
    pub fn detect_with_previous(&self, atoms: &[Atom], previous: Option<&PointGroup>) -> PointGroup {
        match previous {
            Some(pg) if self.is_equivalent_to(atoms, pg) => {
                log::debug!("Reusing the previously detected point group {}.", pg.name);
                pg.clone()
            }
            _ => self.detect(atoms),
        }
    }
}

impl PointGroup {
    /// Returns the Schoenflies name, *e.g.* `C2v` or `D(infinity)h`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if detection ran to completion.
    pub fn is_determined(&self) -> bool {
        self.determined
    }

    pub fn n_atoms(&self) -> usize {
        self.points.len()
    }

    pub fn centre(&self) -> &Point3<f64> {
        &self.centre
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn has_inversion_centre(&self) -> bool {
        !self.elements[INVERSION].is_empty()
    }

    /// Iterates over all detected elements, planes first and proper axes last.
    pub fn elements(&self) -> impl Iterator<Item = &PointGroupElement> {
        self.elements.iter().flatten()
    }

    fn find_element(&self, index: Option<usize>) -> Option<&PointGroupElement> {
        let index = index?;
        self.elements().find(|el| el.index == index)
    }

    pub fn principal_axis(&self) -> Option<&PointGroupElement> {
        self.find_element(self.principal_axis)
    }

    pub fn principal_plane(&self) -> Option<&PointGroupElement> {
        self.find_element(self.principal_plane)
    }

    /// Returns the number of detected elements per label, *e.g.* `"C2" => 3`.
    pub fn element_counts(&self) -> Counter<String> {
        self.elements().map(|el| el.label()).collect()
    }

    /// Returns the number of elements of a given kind.
    pub fn n_elements_of_kind(&self, kind: PointGroupElementKind) -> usize {
        self.elements().filter(|el| el.kind == kind).count()
    }

    /// Returns the total number of operations of the group, identity included.
    pub fn total_operation_count(&self) -> usize {
        1 + usize::from(self.has_inversion_centre())
            + (0..N_BUCKETS)
                .filter(|&bucket| bucket != INVERSION)
                .map(|bucket| UNIQUE_OPERATIONS[bucket] * self.elements[bucket].len())
                .sum::<usize>()
    }

    /// Returns the number of operations contributed by elements of a given kind.
    fn operation_count_of_kind(&self, kind: PointGroupElementKind) -> usize {
        (0..N_BUCKETS)
            .filter(|&bucket| bucket != INVERSION)
            .flat_map(|bucket| {
                self.elements[bucket]
                    .iter()
                    .filter(move |el| el.kind == kind)
                    .map(move |_| UNIQUE_OPERATIONS[bucket])
            })
            .sum()
    }

    /// Returns a tab-separated report of the elements and the operation table with rows
    /// `E`, `Ci`, `Cs`, `Cn`, `Sn` and `TOTAL`.
    pub fn info_table(&self) -> String {
        let name = &self.name;
        let mut table = format!("# {} atoms\n", self.n_atoms());
        let ctype = if self.has_inversion_centre() { "Ci" } else { "center" };
        table += &format!(
            "\n\n{name}\t{ctype}\t{{{:.4} {:.4} {:.4}}}",
            self.centre[0], self.centre[1], self.centre[2]
        );
        for bucket in (0..N_BUCKETS).rev().filter(|&b| b != INVERSION) {
            let Some(first) = self.elements[bucket].first() else {
                continue;
            };
            let label = first.label();
            table += &format!(
                "\n\n{name}\tn{label}\t{}\t{}",
                self.elements[bucket].len(),
                UNIQUE_OPERATIONS[bucket]
            );
            for (j, el) in self.elements[bucket].iter().enumerate() {
                if let Some(v) = el.normal_or_axis {
                    table += &format!(
                        "\n{name}\t{label}_{}\t({:.4}, {:.4}, {:.4})",
                        j + 1,
                        v[0],
                        v[1],
                        v[2]
                    );
                }
            }
        }

        let n_ci = usize::from(self.has_inversion_centre());
        let n_cs = self.elements[PLANES].len();
        let n_cn = self.n_elements_of_kind(PointGroupElementKind::ProperAxis);
        let n_sn = self.n_elements_of_kind(PointGroupElementKind::ImproperAxis);
        table += "\n";
        table += &format!("\n{name}\ttype\tnType\tnUnique");
        table += &format!("\n{name}\tE\t  1\t  1");
        table += &format!("\n{name}\tCi\t  {n_ci}\t  {n_ci}");
        table += &format!(
            "\n{name}\tCs\t{:>4}{:>4}",
            format!("{n_cs}\t"),
            format!("{n_cs}\n")
        );
        table += &format!(
            "{name}\tCn\t{:>4}{:>4}",
            format!("{n_cn}\t"),
            format!(
                "{}\n",
                self.operation_count_of_kind(PointGroupElementKind::ProperAxis)
            )
        );
        table += &format!(
            "{name}\tSn\t{:>4}{:>4}",
            format!("{n_sn}\t"),
            format!(
                "{}\n",
                self.operation_count_of_kind(PointGroupElementKind::ImproperAxis)
            )
        );
        table += &format!(
            "{name}\t\tTOTAL\t{:>4}",
            format!("{}\n", self.total_operation_count())
        );
        table
    }

    /// Returns a structured summary of this point group.
    pub fn summary(&self) -> PointGroupSummary {
        let element_counts = (0..N_BUCKETS)
            .rev()
            .filter(|&bucket| bucket != INVERSION)
            .filter_map(|bucket| {
                self.elements[bucket]
                    .first()
                    .map(|el| (format!("n{}", el.label()), self.elements[bucket].len()))
            })
            .collect::<IndexMap<_, _>>();
        PointGroupSummary {
            name: self.name.clone(),
            n_atoms: self.n_atoms(),
            n_total: self.total_operation_count(),
            n_ci: usize::from(self.has_inversion_centre()),
            n_cs: self.elements[PLANES].len(),
            n_cn: self.n_elements_of_kind(PointGroupElementKind::ProperAxis),
            n_sn: self.n_elements_of_kind(PointGroupElementKind::ImproperAxis),
            distance_tolerance: self.distance_tolerance,
            linear_tolerance: self.linear_tolerance,
            element_counts,
            principal_axis: self.principal_axis().and_then(|el| el.normal_or_axis),
            principal_plane: self.principal_plane().and_then(|el| el.normal_or_axis),
        }
    }
}

impl fmt::Display for PointGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} atoms)", self.name, self.n_atoms())
    }
}
