//! Parsing of Hall space-group symbols.
//!
//! A Hall symbol has the form
//!
//! ```text
//! [-]L  [N_A^T]_1  [N_A^T]_2  ...  [N_A^T]_p  [(Vx Vy Vz)]
//! ```
//!
//! where `L` is the lattice symbol (prefixed by `-` for centrosymmetric lattices), each
//! `N_A^T` is a generator term of order `N` about axis `A` with translation symbols `T`, and
//! the optional parenthesised vector is a change of origin in twelfths of the cell edges.
//! See <http://cci.lbl.gov/sginfo/hall_symbols.html>.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use nalgebra::{Matrix4, Vector3};
use serde::{Deserialize, Serialize};

use crate::symmetry::symmetry_error::SymmetryError;
use crate::symmetry::twelfths::{dump_seitz, xyz_from_matrix};

pub(crate) mod hall_tables;

use hall_tables::{LatticeData, LATTICES, TRANSLATIONS};


/// The maximum number of generator terms in a Hall symbol, including those implied by the
/// lattice symbol.
pub const MAX_ROTATION_TERMS: usize = 16;

// ================
// Enum definitions
// ================

/// An enumerated type for the lattice-centring types that can appear in a Hall symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LatticeKind {
    /// Primitive.
    P,

    /// Body-centred.
    I,

    /// Rhombohedral, obverse setting on hexagonal axes.
    R,

    /// All-face-centred.
    F,

    /// Centred on the $`bc`$ face.
    A,

    /// Centred on the $`ac`$ face.
    B,

    /// Centred on the $`ab`$ face.
    C,

    /// Rhombohedral, alternative setting S.
    S,

    /// Rhombohedral, alternative setting T.
    T,
}

impl LatticeKind {
    /// Returns the lattice type for a (case-insensitive) lattice letter.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'P' => Some(Self::P),
            'I' => Some(Self::I),
            'R' => Some(Self::R),
            'F' => Some(Self::F),
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'S' => Some(Self::S),
            'T' => Some(Self::T),
            _ => None,
        }
    }

    /// Returns the lattice type and centrosymmetry flag for a SHELX `LATT` code.
    ///
    /// Codes 1 to 7 follow SHELX; 8 and 9 denote the S and T rhombohedral settings. A negative
    /// code is non-centrosymmetric. Codes beyond 9 are read as the character code of a lattice
    /// letter.
    ///
    /// # Returns
    ///
    /// A tuple of the lattice type and the centrosymmetry flag, or `None` for code 0 or an
    /// unrecognised code.
    pub fn from_latt(latt: i32) -> Option<(Self, bool)> {
        let is_centrosymmetric = latt > 0;
        let index = latt.unsigned_abs();
        let kind = if index == 0 {
            None
        } else if index as usize > LATTICES.len() {
            char::from_u32(index).and_then(Self::from_code)
        } else {
            Self::from_code(LATTICES[index as usize - 1].code)
        }?;
        Some((kind, is_centrosymmetric))
    }

    /// Returns the lattice letter.
    pub fn code(&self) -> char {
        self.data().code
    }

    /// Returns the SHELX-style lattice index, from 1 for P up to 9 for T.
    pub fn latt_index(&self) -> i32 {
        LATTICES
            .iter()
            .position(|data| data.code == self.code())
            .map(|i| i as i32 + 1)
            .unwrap_or(0)
    }

    /// Returns the extra Hall terms implied by this lattice, *e.g.* `" 1n"` for `I`. A
    /// centrosymmetric lattice also carries an inversion term.
    pub fn extension(&self, is_centrosymmetric: bool) -> String {
        let inversion = if is_centrosymmetric { " -1" } else { "" };
        format!("{}{inversion}", self.data().extension)
    }

    /// Returns a description of this lattice, *e.g.* `-C: centrosymmetric C-centered`.
    pub fn designation(&self, is_centrosymmetric: bool) -> String {
        format!(
            "{}{}: {}{}",
            if is_centrosymmetric { "-" } else { "" },
            self.code(),
            if is_centrosymmetric {
                "centrosymmetric "
            } else {
                ""
            },
            self.data().designation
        )
    }

    fn data(&self) -> &'static LatticeData {
        let code = match self {
            Self::P => 'P',
            Self::I => 'I',
            Self::R => 'R',
            Self::F => 'F',
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::S => 'S',
            Self::T => 'T',
        };
        LATTICES
            .iter()
            .find(|data| data.code == code)
            .unwrap_or(&LATTICES[0])
    }
}

impl fmt::Display for LatticeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Returns the Hall symbol equivalent to a SHELX `LATT` code, *e.g.* `-P 1` for `LATT 1`.
pub fn hall_lattice_equivalent(latt: i32) -> Option<String> {
    LatticeKind::from_latt(latt).map(|(kind, is_centrosymmetric)| {
        format!(
            "{}{} 1",
            if is_centrosymmetric { "-" } else { "" },
            kind.code()
        )
    })
}

/// An enumerated type for the axis types of Hall generator terms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisType {
    /// No axis, for the identity and the inversion.
    None,

    /// The $`a`$ axis.
    X,

    /// The $`b`$ axis.
    Y,

    /// The $`c`$ axis.
    Z,

    /// The body diagonal $`a + b + c`$.
    BodyDiagonal,

    /// The face diagonal of type $`a - b`$, symbol `'`.
    FaceDiagonal,

    /// The face diagonal of type $`a + b`$, symbol `"`.
    FaceDiagonalPlus,
}

impl AxisType {
    /// Returns the axis type for a Hall axis symbol.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '_' => Some(Self::None),
            'x' => Some(Self::X),
            'y' => Some(Self::Y),
            'z' => Some(Self::Z),
            '*' => Some(Self::BodyDiagonal),
            '\'' => Some(Self::FaceDiagonal),
            '"' => Some(Self::FaceDiagonalPlus),
            _ => None,
        }
    }

    /// Returns the Hall axis symbol.
    pub fn symbol(&self) -> char {
        match self {
            Self::None => '_',
            Self::X => 'x',
            Self::Y => 'y',
            Self::Z => 'z',
            Self::BodyDiagonal => '*',
            Self::FaceDiagonal => '\'',
            Self::FaceDiagonalPlus => '"',
        }
    }

    /// Returns the index of the Cartesian component along this axis, if it is a cell axis.
    fn component(&self) -> Option<usize> {
        match self {
            Self::X => Some(0),
            Self::Y => Some(1),
            Self::Z => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for AxisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Returns the axis implied for a generator term whose axis symbol has been omitted.
///
/// The rules follow the International Tables convention for Hall symbols and must be applied
/// in this order:
///
/// 1. a term of order 1 has no axis;
/// 2. the first term is about $`c`$;
/// 3. the third term is about the body diagonal;
/// 4. a term following one of order 2 or 4 is about $`a`$;
/// 5. otherwise, the term is about the face diagonal $`a - b`$.
///
/// # Arguments
///
/// * `order` - The order of the term.
/// * `index` - The zero-based position of the term in the symbol.
/// * `previous_order` - The order of the preceding term, or 0 if there is none.
pub fn default_axis(order: u32, index: usize, previous_order: u32) -> AxisType {
    if order == 1 {
        AxisType::None
    } else if index == 0 {
        AxisType::Z
    } else if index == 2 {
        AxisType::BodyDiagonal
    } else if previous_order == 2 || previous_order == 4 {
        AxisType::X
    } else {
        AxisType::FaceDiagonal
    }
}

// ==================
// Struct definitions
// ==================

/// A structure for one generator term of a Hall symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RotationTerm {
    /// The term as it appears in the symbol (or in the lattice extension).
    pub input_code: String,

    /// The term rewritten with all implied axis symbols made explicit.
    pub primitive_code: String,

    /// The normalised code used to look up the rotation block.
    pub lookup_code: String,

    /// The translation symbols recognised in this term.
    pub translation_string: String,

    /// The order of the rotation.
    pub order: u32,

    /// The axis of the rotation.
    pub axis_type: AxisType,

    /// The cell axis perpendicular to a face-diagonal axis, if any.
    pub diagonal_reference_axis: Option<AxisType>,

    /// Whether the term is a rotoinversion.
    pub is_improper: bool,

    /// The origin shift applied to this term, in twelfths, if any.
    pub origin_shift: Option<Vector3<i32>>,

    /// The Seitz matrix of this term. The translation column is in twelfths.
    pub seitz_matrix_12ths: Matrix4<f64>,
}

impl RotationTerm {
    /// Parses a single generator term.
    ///
    /// # Arguments
    ///
    /// * `code` - The term, *e.g.* `-2ybc` or `61`.
    /// * `index` - The zero-based position of the term in the symbol.
    /// * `previous_order` - The order of the preceding term, or 0 if there is none.
    /// * `previous_axis` - The axis of the preceding term, if there is one.
    /// * `origin_shift` - An optional origin shift in twelfths, applied by conjugation.
    ///
    /// # Returns
    ///
    /// The parsed term, or an error if the rotation cannot be identified.
    pub fn parse(
        code: &str,
        index: usize,
        previous_order: u32,
        previous_axis: Option<AxisType>,
        origin_shift: Option<Vector3<i32>>,
    ) -> Result<Self, SymmetryError> {
        let input_code = code.to_string();
        let mut chars = code.chars().collect::<Vec<_>>();
        let is_improper = chars.first() == Some(&'-');
        if is_improper {
            chars.remove(0);
        }
        chars.extend([' '; 3]);
        let order = chars[0].to_digit(10).ok_or_else(|| {
            let msg = format!("Unable to read the rotation order in Hall term `{input_code}`.");
            log::error!("{msg}");
            SymmetryError::NotationParse(msg)
        })?;

        let mut ptr = 2;
        let mut diagonal_reference_axis = None;
        let axis_type = match chars[1] {
            c @ ('x' | 'y' | 'z') => {
                if matches!(chars[2], '\'' | '"') {
                    diagonal_reference_axis = AxisType::from_symbol(c);
                    ptr += 1;
                    AxisType::from_symbol(chars[2])
                } else {
                    AxisType::from_symbol(c)
                }
            }
            '*' => Some(AxisType::BodyDiagonal),
            c @ ('\'' | '"') => {
                if matches!(chars[2], 'x' | 'y' | 'z') {
                    diagonal_reference_axis = AxisType::from_symbol(chars[2]);
                    ptr += 1;
                } else {
                    diagonal_reference_axis = previous_axis;
                }
                AxisType::from_symbol(c)
            }
            _ => {
                let axis = default_axis(order, index, previous_order);
                chars.insert(1, axis.symbol());
                Some(axis)
            }
        }
        .unwrap_or(AxisType::None);

        let mut primitive_code = if axis_type == AxisType::None {
            "1".to_string()
        } else {
            format!("{order}{}", axis_type.symbol())
        };
        if let Some(reference) = diagonal_reference_axis {
            primitive_code.push(reference.symbol());
            chars = [chars[0], reference.symbol(), axis_type.symbol()]
                .into_iter()
                .chain(chars[ptr..].iter().copied())
                .collect();
            ptr = 3;
        }
        let lookup_code = chars[..ptr].iter().collect::<String>();
        let rotation = hall_tables::rotation(&lookup_code).ok_or_else(|| {
            let msg = format!(
                "Rotation lookup could not find `{input_code}` (normalised to `{lookup_code}`)."
            );
            log::error!("{msg}");
            SymmetryError::NotationParse(msg)
        })?;

        let mut translation_string = String::new();
        let mut rotation_shift = 0;
        let mut vector_shift = Vector3::<i32>::zeros();
        for c in chars[ptr..].iter().copied() {
            if let Some(shift) = TRANSLATIONS.get(&c) {
                vector_shift += Vector3::from(*shift);
                translation_string.push(c);
            } else if let Some(shift) = hall_tables::screw_shift(c, order) {
                rotation_shift += shift;
                translation_string.push(c);
            }
        }
        let primitive_code = format!(
            "{}{primitive_code}{translation_string}",
            if is_improper { "-" } else { "" }
        );

        let sign = if is_improper { -1.0 } else { 1.0 };
        let mut seitz = Matrix4::<f64>::identity();
        for (i, row) in rotation.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                seitz[(i, j)] = sign * f64::from(*value);
            }
            seitz[(i, 3)] = f64::from(vector_shift[i]);
        }
        if let Some(component) = axis_type.component() {
            seitz[(component, 3)] += f64::from(rotation_shift);
        }
        if let Some(shift) = origin_shift {
            let shift = shift.map(f64::from);
            let mut forward = Matrix4::<f64>::identity();
            let mut backward = Matrix4::<f64>::identity();
            for i in 0..3 {
                forward[(i, 3)] = shift[i];
                backward[(i, 3)] = -shift[i];
            }
            seitz = forward * seitz * backward;
        }
        log::debug!(
            "Hall term `{input_code}`: normalised code `{}`, primitive code `{primitive_code}`.",
            chars.iter().collect::<String>().trim_end()
        );

        Ok(RotationTerm {
            input_code,
            primitive_code,
            lookup_code,
            translation_string,
            order,
            axis_type,
            diagonal_reference_axis,
            is_improper,
            origin_shift,
            seitz_matrix_12ths: seitz,
        })
    }

    /// Returns the operator string of this term, with translations taken positive.
    pub fn xyz(&self) -> String {
        xyz_from_matrix(&self.seitz_matrix_12ths, true, true, true)
    }

    /// Writes a report on this term.
    pub fn dump_info(&self) -> String {
        let mut s = format!(
            "\ninput code: {}; primitive code: {}\norder: {}{}",
            self.input_code,
            self.primitive_code,
            self.order,
            if self.is_improper {
                " (improper axis)"
            } else {
                ""
            }
        );
        if self.axis_type != AxisType::None {
            s += &format!("; axisType: {}", self.axis_type);
            if let Some(reference) = self.diagonal_reference_axis {
                s.push(reference.symbol());
            }
        }
        if !self.translation_string.is_empty() {
            s += &format!("; translation: {}", self.translation_string);
        }
        if let Some(shift) = self.origin_shift {
            s += &format!("; vector offset: ({} {} {})", shift[0], shift[1], shift[2]);
        }
        s += &format!(
            "\noperator: {}\nSeitz matrix:\n{}",
            self.xyz(),
            dump_seitz(&self.seitz_matrix_12ths)
        );
        s
    }
}

/// A structure for a parsed Hall symbol.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HallSymbol {
    /// The symbol as supplied, with surrounding whitespace removed.
    pub hall_symbol: String,

    /// The symbol rebuilt from the primitive codes of all generator terms, including those
    /// implied by the lattice.
    pub primitive_hall_symbol: String,

    /// The lattice type.
    pub lattice: LatticeKind,

    /// Whether the lattice symbol carries an inversion centre.
    pub is_centrosymmetric: bool,

    /// The origin shift in twelfths, if one was given.
    pub origin_shift: Option<Vector3<i32>>,

    /// The generator terms, in the order in which they appear in the expanded symbol.
    pub rotation_terms: Vec<RotationTerm>,
}

impl HallSymbol {
    /// Returns the number of generator terms.
    pub fn n_rotations(&self) -> usize {
        self.rotation_terms.len()
    }

    /// Returns a description of the lattice, *e.g.* `-P: centrosymmetric primitive`.
    pub fn lattice_designation(&self) -> String {
        self.lattice.designation(self.is_centrosymmetric)
    }

    /// Writes a report on the symbol and all of its generator terms.
    pub fn dump_info(&self) -> String {
        let mut s = format!(
            "\nHall symbol: {}\nprimitive Hall symbol: {}\nlattice type: {}",
            self.hall_symbol,
            self.primitive_hall_symbol,
            self.lattice_designation()
        );
        for (i, term) in self.rotation_terms.iter().enumerate() {
            s += &format!("\n\nrotation term {}{}", i + 1, term.dump_info());
        }
        s
    }
}

/// Splits an origin-shift clause `(Nx Ny Nz)` off a Hall symbol.
///
/// One number is taken as the $`z`$ shift and two as the $`x`$ and $`z`$ shifts.
fn extract_origin_shift(name: &str) -> Result<(String, Option<Vector3<i32>>), SymmetryError> {
    let (Some(i), Some(j)) = (name.find('('), name.find(')')) else {
        return Ok((name.to_string(), None));
    };
    if i == 0 || j <= i {
        return Ok((name.to_string(), None));
    }
    let values = name[i + 1..j]
        .split_whitespace()
        .map(|v| v.parse::<i32>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            let msg = format!("Invalid origin shift in Hall symbol `{name}`: {err}");
            log::error!("{msg}");
            SymmetryError::NotationParse(msg)
        })?;
    let shift = match values.as_slice() {
        [z] => Vector3::new(0, 0, *z),
        [x, z] => Vector3::new(*x, 0, *z),
        [x, y, z] => Vector3::new(*x, *y, *z),
        _ => {
            let msg = format!("Invalid origin shift in Hall symbol `{name}`.");
            log::error!("{msg}");
            return Err(SymmetryError::NotationParse(msg));
        }
    };
    Ok((name[..i].trim().to_string(), Some(shift)))
}

impl FromStr for HallSymbol {
    type Err = SymmetryError;

    /// Parses a Hall symbol such as `-P 2ybc` or `P 61 2 (0 0 5)`.
    ///
    /// # Errors
    ///
    /// Errors if the lattice symbol is not recognised, the origin shift is malformed, or any
    /// generator term cannot be identified. Every error is also logged.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hall_symbol = s.trim().to_string();
        let (lattice_term, rest) = hall_symbol.split_once(' ').ok_or_else(|| {
            let msg = format!("Invalid Hall symbol `{hall_symbol}`: no lattice term found.");
            log::error!("{msg}");
            SymmetryError::NotationParse(msg)
        })?;
        let lattice_term = lattice_term.to_uppercase();
        let (is_centrosymmetric, lattice_code) = match lattice_term.strip_prefix('-') {
            Some(code) => (true, code.chars().next()),
            None => (false, lattice_term.chars().next()),
        };
        let lattice = lattice_code.and_then(LatticeKind::from_code).ok_or_else(|| {
            let msg = format!("Invalid lattice type in Hall symbol `{hall_symbol}`.");
            log::error!("{msg}");
            SymmetryError::NotationParse(msg)
        })?;

        let (rest, origin_shift) = extract_origin_shift(rest.trim())?;
        let expanded = rest + &lattice.extension(is_centrosymmetric);
        log::debug!("Hall symbol `{hall_symbol}` expanded to `{expanded}`.");

        let mut rotation_terms: Vec<RotationTerm> = vec![];
        let mut previous: Option<(u32, AxisType)> = None;
        for code in expanded
            .split_whitespace()
            .take(MAX_ROTATION_TERMS)
        {
            let term = RotationTerm::parse(
                code,
                rotation_terms.len(),
                previous.map(|(order, _)| order).unwrap_or(0),
                previous.map(|(_, axis)| axis),
                origin_shift,
            )
            .map_err(|err| {
                log::error!("Invalid Hall symbol `{hall_symbol}`.");
                err
            })?;
            previous = Some((term.order, term.axis_type));
            rotation_terms.push(term);
        }

        let vector_code = origin_shift
            .map(|v| format!(" ({} {} {})", v[0], v[1], v[2]))
            .unwrap_or_default();
        let primitive_hall_symbol = format!(
            "P {}{vector_code}",
            rotation_terms
                .iter()
                .map(|term| term.primitive_code.as_str())
                .join(" ")
        );

        Ok(HallSymbol {
            hall_symbol,
            primitive_hall_symbol,
            lattice,
            is_centrosymmetric,
            origin_shift,
            rotation_terms,
        })
    }
}
