//! Crystallographic symmetry operations as affine matrices and as Jones–Faithful strings.

use std::fmt;

use lazy_static::lazy_static;
use nalgebra::{Matrix3, Matrix4, Point3, Vector3};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::symmetry::symmetry_error::SymmetryError;
use crate::symmetry::twelfths::{
    dump_canonical_seitz, dump_seitz, normalise_twelfths, xyz_from_matrix,
};
use crate::symmetry::unit_cell::UnitCell;

pub mod operation_kind;

#[cfg(test)]
#[path = "symmetry_operation_tests.rs"]
mod symmetry_operation_tests;

lazy_static! {
    static ref FLOAT_RE: Regex =
        Regex::new(r"[-+]?(?:\d+\.?\d*|\.\d+)(?:[eE][-+]?\d+)?").expect("Invalid float regex.");
}

/// The prefix of an operation given as sixteen row-major matrix elements.
const XYZ_MATRIX_PREFIX: &str = "xyz matrix:";

/// A structure for a single symmetry operation of a space group.
///
/// While a group is being generated, the translation column of [`Self::matrix`] is in twelfths
/// of the cell edges. [`Self::finalise`] converts it to cell fractions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SymmetryOperation {
    /// The operation as supplied.
    pub xyz_original: String,

    /// The canonical Jones–Faithful form of the operation. Two operations are the same iff
    /// their canonical forms agree.
    pub xyz: String,

    /// An identifier assigned by the caller.
    pub op_id: usize,

    /// Whether translations are wrapped into $`(-1/2, 1/2]`$ when parsed.
    pub do_normalise: bool,

    /// Whether the translation column holds cell fractions rather than twelfths.
    pub is_finalised: bool,

    matrix: Matrix4<f64>,
}

impl SymmetryOperation {
    /// Parses a symmetry operation.
    ///
    /// The accepted encodings are
    ///
    /// * Jones–Faithful strings such as `x,-y,z+1/2` or `1/2+x, y, -z` (case-insensitive,
    /// rational or decimal constants);
    /// * superspace-style `x1,x2,x3,x4` strings, whose last row is dropped;
    /// * `[[m00,m01,m02,m03],[m10,...],...]` matrix literals with translations in cell
    /// fractions;
    /// * `xyz matrix: m00 m01 ... m33`, sixteen row-major elements in cell fractions.
    ///
    /// A leading `!` selects the inverse of the operation.
    ///
    /// # Arguments
    ///
    /// * `xyz` - The operation.
    /// * `op_id` - An identifier for the operation.
    /// * `do_normalise` - Whether translations are wrapped into $`(-1/2, 1/2]`$.
    ///
    /// # Errors
    ///
    /// Errors if the operation cannot be interpreted. The error is also logged.
    pub fn parse(xyz: &str, op_id: usize, do_normalise: bool) -> Result<Self, SymmetryError> {
        let lower = xyz.trim().to_lowercase();
        let (is_reverse, body) = match lower.strip_prefix('!') {
            Some(body) => (true, body.trim_start()),
            None => (false, lower.as_str()),
        };

        let (mut matrix, canonical) = if let Some(elements) = body.strip_prefix(XYZ_MATRIX_PREFIX)
        {
            (matrix_from_floats(xyz, elements, do_normalise)?, None)
        } else if body.starts_with("[[") {
            let elements = body.replace(['[', ']', ','], " ");
            (matrix_from_literal(xyz, &elements)?, None)
        } else {
            let (matrix, canonical) = matrix_from_string(body, do_normalise).map_err(|msg| {
                let msg = format!("Unable to interpret symmetry operation `{xyz}`: {msg}");
                log::error!("{msg}");
                SymmetryError::NotationParse(msg)
            })?;
            (matrix, Some(canonical))
        };

        if is_reverse {
            matrix = matrix.try_inverse().ok_or_else(|| {
                let msg = format!("Symmetry operation `{xyz}` cannot be inverted.");
                log::error!("{msg}");
                SymmetryError::NotationParse(msg)
            })?;
        }
        let xyz_canonical = match canonical {
            Some(canonical) if !is_reverse => canonical,
            _ => xyz_from_matrix(&matrix, true, false, false),
        };
        log::debug!("Symmetry operation `{xyz}` parsed as `{xyz_canonical}`.");

        Ok(Self {
            xyz_original: xyz.to_string(),
            xyz: xyz_canonical,
            op_id,
            do_normalise,
            is_finalised: false,
            matrix,
        })
    }

    /// Replaces the matrix with one in twelfths, keeping the canonical string.
    pub(crate) fn set_matrix_12ths(&mut self, matrix: Matrix4<f64>) {
        self.matrix = matrix;
        self.is_finalised = false;
    }

    /// The affine matrix of the operation.
    pub fn matrix(&self) -> &Matrix4<f64> {
        &self.matrix
    }

    /// The affine matrix of the operation with its translation column in twelfths.
    pub fn matrix_12ths(&self) -> Matrix4<f64> {
        let mut mat = self.matrix;
        if self.is_finalised {
            for i in 0..3 {
                mat[(i, 3)] *= 12.0;
            }
        }
        mat
    }

    /// The rotation block of the operation. Its entries are always $`-1`$, $`0`$ or $`1`$.
    pub fn rotation(&self) -> Matrix3<f64> {
        self.matrix.fixed_view::<3, 3>(0, 0).into_owned()
    }

    /// The translation column, in twelfths or in cell fractions depending on
    /// [`Self::is_finalised`].
    pub fn translation(&self) -> Vector3<f64> {
        self.matrix.fixed_view::<3, 1>(0, 3).into_owned()
    }

    /// The canonical form, or the form as supplied if `normalised` is `false`.
    pub fn xyz(&self, normalised: bool) -> &str {
        if normalised {
            &self.xyz
        } else {
            &self.xyz_original
        }
    }

    /// Formats the current matrix as a Jones–Faithful string without any wrapping of the
    /// translations. Parsing the result without normalisation reproduces the matrix.
    pub fn jones_faithful(&self) -> String {
        xyz_from_matrix(&self.matrix, !self.is_finalised, false, false)
    }

    /// Converts the translation column from twelfths into cell fractions. Calling this on a
    /// finalised operation has no effect.
    pub fn finalise(&mut self) {
        if self.is_finalised {
            return;
        }
        for i in 0..3 {
            self.matrix[(i, 3)] /= 12.0;
        }
        self.is_finalised = true;
    }

    /// Returns a finalised copy of the operation.
    pub fn finalised(&self) -> Self {
        let mut op = self.clone();
        op.finalise();
        op
    }

    /// Applies the operation to a fractional point. The operation should be finalised.
    pub fn transform_point(&self, pt: &Point3<f64>) -> Point3<f64> {
        self.matrix.transform_point(pt)
    }

    /// Applies the operation to a fractional point and adds a lattice translation.
    pub fn new_point(&self, pt: &Point3<f64>, lattice_translation: [i32; 3]) -> Point3<f64> {
        let image = self.transform_point(pt);
        image + Vector3::from(lattice_translation.map(f64::from))
    }

    /// Shifts the translation of a finalised operation by whole cells so that the centroid of
    /// the images of a set of fractional points lies in the unit cell.
    ///
    /// # Arguments
    ///
    /// * `atoms` - The fractional points, typically the asymmetric unit of a structure.
    pub fn set_offset(&mut self, atoms: &[Point3<f64>]) {
        if atoms.is_empty() {
            return;
        }
        let count = atoms.len() as f64;
        let mut sums = atoms.iter().fold(Vector3::zeros(), |acc, atom| {
            acc + self.transform_point(atom).coords
        });
        for i in 0..3 {
            while sums[i] < -0.001 || sums[i] >= count + 0.001 {
                let shift = if sums[i] < 0.0 { 1.0 } else { -1.0 };
                self.matrix[(i, 3)] += shift;
                sums[i] += shift * count;
            }
        }
    }

    /// Applies the operation to the principal axes of a displacement ellipsoid.
    ///
    /// # Arguments
    ///
    /// * `centre` - The Cartesian centre of the ellipsoid.
    /// * `vectors` - The Cartesian axis vectors.
    /// * `unit_cell` - The unit cell relating the Cartesian and fractional frames.
    ///
    /// # Returns
    ///
    /// The transformed axis vectors, in the order given.
    pub fn rotate_ellipsoid(
        &self,
        centre: &Point3<f64>,
        vectors: &[Vector3<f64>],
        unit_cell: &UnitCell,
    ) -> Vec<Vector3<f64>> {
        let transform_cartesian = |pt: &Point3<f64>| {
            unit_cell.to_cartesian(
                &self.transform_point(&unit_cell.to_fractional(pt, false)),
                false,
            )
        };
        let centre_image = transform_cartesian(centre);
        vectors
            .iter()
            .map(|v| transform_cartesian(&(centre + v)) - centre_image)
            .collect()
    }

    /// Formats the Seitz matrix with its translations in twelfths.
    pub fn dump_seitz(&self) -> String {
        dump_seitz(&self.matrix_12ths())
    }

    /// Formats the Seitz matrix for canonical group keys. See
    /// [`crate::symmetry::twelfths::dump_canonical_seitz`].
    pub fn dump_canonical_seitz(&self) -> String {
        dump_canonical_seitz(&self.matrix_12ths())
    }

    /// Writes the canonical form followed by the matrix.
    pub fn dump_info(&self) -> String {
        format!(
            "\n{}\ninternal matrix representation:\n{}",
            self.xyz, self.matrix
        )
    }
}

impl PartialEq for SymmetryOperation {
    fn eq(&self, other: &Self) -> bool {
        self.xyz == other.xyz
    }
}

impl Eq for SymmetryOperation {}

impl fmt::Display for SymmetryOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xyz)
    }
}

// =================
// Parsing internals
// =================

/// Parses a Jones–Faithful string into a matrix in twelfths and its canonical form.
fn matrix_from_string(xyz: &str, do_normalise: bool) -> Result<(Matrix4<f64>, String), String> {
    let mut xyz = xyz.to_string();
    while xyz.contains("x4") {
        log::info!("Ignoring the last parameter in `{xyz}`.");
        let last = xyz
            .rfind(',')
            .ok_or_else(|| "a superspace operation needs at least four rows".to_string())?;
        xyz = xyz[..last]
            .replace("x1", "x")
            .replace("x2", "y")
            .replace("x3", "z");
    }

    let rows = xyz.split(',').collect::<Vec<_>>();
    if rows.len() != 3 {
        return Err(format!("expected three rows, found {}", rows.len()));
    }
    let mut matrix = Matrix4::identity();
    for (i, row) in rows.iter().enumerate() {
        let (coefficients, constant) = parse_row(row)?;
        for (j, coefficient) in coefficients.iter().enumerate() {
            matrix[(i, j)] = f64::from(*coefficient);
        }
        matrix[(i, 3)] = normalise_twelfths(constant * 12.0, do_normalise);
    }
    let canonical = xyz_from_matrix(&matrix, true, false, true);
    Ok((matrix, canonical))
}

/// Parses one row of a Jones–Faithful string into its $`x`$, $`y`$, $`z`$ coefficients and
/// its constant part.
fn parse_row(row: &str) -> Result<([i32; 3], f64), String> {
    let cleaned = row
        .chars()
        .filter(|c| !matches!(c, '\'' | ' ' | '\t' | '{' | '}' | '!'))
        .collect::<String>();
    if cleaned.is_empty() {
        return Err("empty row".to_string());
    }

    let mut terms = vec![];
    let mut start = 0;
    let mut previous = None;
    for (i, ch) in cleaned.char_indices() {
        let is_exponent_sign = matches!(previous, Some('e' | 'E'));
        previous = Some(ch);
        if (ch == '+' || ch == '-') && i > start && !is_exponent_sign {
            terms.push(&cleaned[start..i]);
            start = i;
        }
    }
    terms.push(&cleaned[start..]);

    let mut coefficients = [0i32; 3];
    let mut constant = 0.0;
    for term in terms {
        let (sign, body) = match term.chars().next() {
            Some('-') => (-1, &term[1..]),
            Some('+') => (1, &term[1..]),
            _ => (1, term),
        };
        let axis = match body {
            "x" => Some(0),
            "y" => Some(1),
            "z" => Some(2),
            _ => None,
        };
        if let Some(axis) = axis {
            coefficients[axis] += sign;
            if coefficients[axis].abs() > 1 {
                return Err(format!("repeated coordinate in row `{row}`"));
            }
        } else {
            constant += f64::from(sign) * parse_rational(body)
                .ok_or_else(|| format!("unrecognised term `{term}` in row `{row}`"))?;
        }
    }
    if coefficients == [0, 0, 0] {
        return Err(format!("no coordinate found in row `{row}`"));
    }
    Ok((coefficients, constant))
}

/// Parses an unsigned rational constant such as `1/2`, `0.25` or `3`.
fn parse_rational(body: &str) -> Option<f64> {
    match body.split_once('/') {
        Some((numer, denom)) => {
            let numer = numer.parse::<f64>().ok()?;
            let denom = denom.parse::<f64>().ok()?;
            if denom == 0.0 {
                None
            } else {
                Some(numer / denom)
            }
        }
        None => body.parse::<f64>().ok().filter(|v| v.is_finite()),
    }
}

/// Checks that the rotation block of a parsed matrix is made of $`-1`$, $`0`$ and $`1`$
/// only, and snaps it to those values.
fn snap_rotation(original: &str, matrix: &mut Matrix4<f64>) -> Result<(), SymmetryError> {
    for i in 0..3 {
        for j in 0..3 {
            let value = matrix[(i, j)];
            let rounded = value.round();
            if (value - rounded).abs() > 1.0e-3 || rounded.abs() > 1.0 {
                let msg = format!(
                    "Symmetry operation `{original}` has a rotation element {value} outside {{-1, 0, 1}}."
                );
                log::error!("{msg}");
                return Err(SymmetryError::NotationParse(msg));
            }
            matrix[(i, j)] = rounded + 0.0;
        }
    }
    Ok(())
}

/// Reads the sixteen row-major elements of an `xyz matrix:` operation.
fn matrix_from_floats(
    original: &str,
    elements: &str,
    do_normalise: bool,
) -> Result<Matrix4<f64>, SymmetryError> {
    let values = FLOAT_RE
        .find_iter(elements)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .take(16)
        .collect::<Vec<_>>();
    if values.len() < 16 {
        let msg = format!("Symmetry operation `{original}` has fewer than sixteen elements.");
        log::error!("{msg}");
        return Err(SymmetryError::NotationParse(msg));
    }
    let mut matrix = Matrix4::from_row_slice(&values);
    for i in 0..3 {
        let v = matrix[(i, 3)];
        let v = if v.abs() < 1.0e-5 { 0.0 } else { v };
        matrix[(i, 3)] = normalise_twelfths(v.signum() * (v * 12.0).abs().round(), do_normalise);
    }
    matrix.fixed_view_mut::<1, 4>(3, 0).copy_from_slice(&[0.0, 0.0, 0.0, 1.0]);
    snap_rotation(original, &mut matrix)?;
    Ok(matrix)
}

/// Reads a `[[...],[...],[...],[...]]` matrix literal whose brackets and commas have been
/// blanked out.
fn matrix_from_literal(original: &str, elements: &str) -> Result<Matrix4<f64>, SymmetryError> {
    let values = elements
        .split_whitespace()
        .map(str::parse::<f64>)
        .collect::<Result<Vec<_>, _>>()
        .ok()
        .filter(|values| values.len() == 16)
        .ok_or_else(|| {
            let msg = format!("Symmetry operation `{original}` is not a 4x4 matrix.");
            log::error!("{msg}");
            SymmetryError::NotationParse(msg)
        })?;
    let mut matrix = Matrix4::from_row_slice(&values);
    for i in 0..3 {
        matrix[(i, 3)] = (matrix[(i, 3)] * 12.0).round();
    }
    snap_rotation(original, &mut matrix)?;
    Ok(matrix)
}
