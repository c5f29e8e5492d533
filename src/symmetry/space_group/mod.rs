//! Space groups generated from Hall symbols, catalog entries or explicit operation lists.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use lazy_static::lazy_static;
use nalgebra::{Matrix4, Point3};
use serde::{Deserialize, Serialize};

use crate::symmetry::hall_symbol::{hall_lattice_equivalent, HallSymbol, LatticeKind};
use crate::symmetry::space_group_catalog::{SpaceGroupCatalog, SpaceGroupEntry};
use crate::symmetry::symmetry_error::SymmetryError;
use crate::symmetry::symmetry_operation::SymmetryOperation;
use crate::symmetry::twelfths::{dump_canonical_seitz, wrap_twelfths, xyz_from_matrix};


/// The name given to a group with no recognisable setting.
pub const UNSPECIFIED_NAME: &str = "spacegroup unspecified";

lazy_static! {
    /// Canonical Seitz lists of all catalog entries, in catalog order.
    static ref CATALOG_SEITZ_LISTS: Vec<Option<String>> = {
        log::debug!("Generating canonical Seitz lists for the space-group catalog...");
        SpaceGroupCatalog::get()
            .entries()
            .iter()
            .map(|entry| {
                SpaceGroup::from_catalog(entry.index)
                    .ok()
                    .map(|sg| sg.canonical_seitz_list())
            })
            .collect()
    };
}

/// Finds the first catalog entry whose canonical Seitz list equals `list`.
fn find_catalog_entry(list: &str) -> Option<usize> {
    CATALOG_SEITZ_LISTS
        .iter()
        .position(|s| s.as_deref() == Some(list))
}

// ==================
// Struct definitions
// ==================

/// A structure for a space group under construction or fully generated.
///
/// Operations are held with translations in twelfths and deduplicated by their canonical
/// strings. [`Self::finalise`] produces the public set of operations in cell fractions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpaceGroup {
    name: String,

    /// The catalog entry this group was built from, if any.
    catalog_index: Option<usize>,

    /// The catalog entry whose operation set equals that of this group, if one was found.
    matched_index: Option<usize>,

    hall: Option<HallSymbol>,

    /// The lattice type and centrosymmetry flag.
    lattice: Option<(LatticeKind, bool)>,

    /// Whether operations added by name have their translations centred.
    do_normalise: bool,

    operations: Vec<SymmetryOperation>,

    /// Every string under which an operation has been added, mapped to its position in
    /// [`Self::operations`].
    xyz_index: IndexMap<String, usize>,

    final_operations: Option<Vec<SymmetryOperation>>,
}

impl SpaceGroup {
    /// Creates a group containing only the identity.
    ///
    /// # Arguments
    ///
    /// * `do_normalise` - Whether operations added later have their translations wrapped into
    /// $`(-1/2, 1/2]`$ when parsed.
    pub fn new(do_normalise: bool) -> Self {
        let mut sg = Self {
            name: UNSPECIFIED_NAME.to_string(),
            catalog_index: None,
            matched_index: None,
            hall: None,
            lattice: None,
            do_normalise,
            operations: vec![],
            xyz_index: IndexMap::new(),
            final_operations: None,
        };
        sg.reset_to_identity();
        sg
    }

    /// Generates the group of a catalog entry.
    ///
    /// # Errors
    ///
    /// Errors if the index is out of range or the Hall symbol of the entry cannot be parsed.
    pub fn from_catalog(index: usize) -> Result<Self, SymmetryError> {
        let entry = SpaceGroupCatalog::get().entry(index).ok_or_else(|| {
            SymmetryError::LookupMiss(format!("No space-group catalog entry at index {index}."))
        })?;
        if entry.is_uncertain() {
            log::warn!(
                "Operators generated for {} may differ from those listed in some structure files.",
                entry.name
            );
        }
        let hall = HallSymbol::from_str(&entry.hall_symbol)?;
        let mut sg = Self::from_hall_symbol(hall);
        sg.name = entry.name.clone();
        sg.catalog_index = Some(index);
        sg.matched_index = Some(index);
        Ok(sg)
    }

    /// Generates the group of a parsed Hall symbol by closure over its generator terms.
    pub fn from_hall_symbol(hall: HallSymbol) -> Self {
        let mut sg = Self::new(true);
        sg.name = hall.hall_symbol.clone();
        sg.lattice = Some((hall.lattice, hall.is_centrosymmetric));
        sg.generate_operators(&hall);
        sg.hall = Some(hall);
        sg
    }

    /// Creates a group from a `;`-separated list of operations such as
    /// `x,y,z;-x,-y,z+1/2`.
    ///
    /// The listed operations are kept as given and no closure is applied. Translations are not
    /// centred. Entries that cannot be parsed are skipped.
    pub fn from_xyz_list(xyz_list: &str) -> Self {
        let mut sg = Self::new(false);
        for term in xyz_list.to_lowercase().split(';') {
            let term = term.trim();
            if term.is_empty() {
                continue;
            }
            if let Err(err) = sg.add_operation(term, 0) {
                log::warn!("Skipping symmetry operation `{term}`: {err}");
            }
        }
        sg
    }

    /// Creates the group implied by a SHELX `LATT` code alone.
    ///
    /// # Errors
    ///
    /// Errors if the code is not recognised.
    pub fn from_latt(latt: i32) -> Result<Self, SymmetryError> {
        let mut sg = Self::new(true);
        sg.set_lattice(latt)?;
        sg.name = sg
            .lattice_designation()
            .unwrap_or_else(|| UNSPECIFIED_NAME.to_string());
        Ok(sg)
    }

    /// Creates a space group from a name in any supported notation.
    ///
    /// The name is tried, in order, as a catalog name (see [`SpaceGroupCatalog::resolve`]), as
    /// a Hall symbol, and as a `;`-separated list of operations.
    ///
    /// # Arguments
    ///
    /// * `name` - The name.
    /// * `cell` - Optional cell parameters used to resolve ambiguous catalog names.
    ///
    /// # Errors
    ///
    /// Errors with [`SymmetryError::LookupMiss`] if the name fits none of the notations.
    pub fn create(name: &str, cell: Option<&[f64; 6]>) -> Result<Self, SymmetryError> {
        let name = name.trim();
        if let Ok(index) = SpaceGroupCatalog::get().resolve(name, cell) {
            return Self::from_catalog(index);
        }
        match HallSymbol::from_str(name) {
            Ok(hall) if hall.n_rotations() > 0 => return Ok(Self::from_hall_symbol(hall)),
            _ => {}
        }
        if name.contains(',') {
            return Ok(Self::from_xyz_list(name));
        }
        let msg = format!("Unable to create a space group from `{name}`.");
        log::error!("{msg}");
        Err(SymmetryError::LookupMiss(msg))
    }

    // ---------
    // Accessors
    // ---------

    /// The display name of the group.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The catalog entry the group was built from or matched to, if any.
    pub fn catalog_entry(&self) -> Option<&'static SpaceGroupEntry> {
        self.matched_index
            .and_then(|index| SpaceGroupCatalog::get().entry(index))
    }

    /// The index of the catalog entry the group was built from, if any.
    pub fn catalog_index(&self) -> Option<usize> {
        self.catalog_index
    }

    /// The parsed Hall symbol, if the group was generated from one.
    pub fn hall(&self) -> Option<&HallSymbol> {
        self.hall.as_ref()
    }

    /// The Hall symbol, or `--` if the group was not generated from one.
    pub fn hall_symbol(&self) -> &str {
        self.hall
            .as_ref()
            .map_or("--", |hall| hall.hall_symbol.as_str())
    }

    /// Whether operations added by name have their translations centred.
    pub fn do_normalise(&self) -> bool {
        self.do_normalise
    }

    /// The lattice description, *e.g.* `-P: centrosymmetric primitive`, if known.
    pub fn lattice_designation(&self) -> Option<String> {
        self.lattice
            .map(|(kind, is_centrosymmetric)| kind.designation(is_centrosymmetric))
    }

    /// The generated operations, with translations in twelfths.
    pub fn operations(&self) -> &[SymmetryOperation] {
        &self.operations
    }

    /// The finalised operations, if [`Self::finalise`] has been called.
    pub fn final_operations(&self) -> Option<&[SymmetryOperation]> {
        self.final_operations.as_deref()
    }

    /// The number of operations.
    pub fn operation_count(&self) -> usize {
        self.final_operations
            .as_ref()
            .map_or(self.operations.len(), Vec::len)
    }

    /// The operation at position `i`, finalised if available.
    pub fn operation(&self, i: usize) -> Option<&SymmetryOperation> {
        match self.final_operations.as_ref() {
            Some(ops) => ops.get(i),
            None => self.operations.get(i),
        }
    }

    /// The canonical (or, if `normalised` is `false`, the supplied) string of operation `i`.
    pub fn xyz(&self, i: usize, normalised: bool) -> Option<&str> {
        self.operation(i).map(|op| op.xyz(normalised))
    }

    /// Applies operation `i` and a lattice translation to a fractional point.
    pub fn new_point(
        &self,
        i: usize,
        pt: &Point3<f64>,
        lattice_translation: [i32; 3],
    ) -> Option<Point3<f64>> {
        self.operation(i)
            .map(|op| op.finalised().new_point(pt, lattice_translation))
    }

    // ------------------
    // Adding operations
    // ------------------

    fn reset_to_identity(&mut self) {
        self.clear_operations();
        if let Err(err) = self.add_operation("x,y,z", 0) {
            log::error!("Unable to add the identity operation: {err}");
        }
    }

    /// Removes all operations, including the identity.
    pub fn clear_operations(&mut self) {
        self.operations.clear();
        self.xyz_index.clear();
        self.final_operations = None;
    }

    /// Adds an operation unless an identical one is already present.
    ///
    /// A leading `=` adds the operation even if an identical one is present; such an operation
    /// is not indexed by its canonical string.
    ///
    /// # Arguments
    ///
    /// * `xyz` - The operation in any notation accepted by [`SymmetryOperation::parse`].
    /// * `op_id` - An identifier for the operation.
    ///
    /// # Returns
    ///
    /// The position of the new or existing operation.
    ///
    /// # Errors
    ///
    /// Errors if the operation lacks one of $`x`$, $`y`$ and $`z`$ or cannot be parsed.
    pub fn add_operation(&mut self, xyz: &str, op_id: usize) -> Result<usize, SymmetryError> {
        let xyz = xyz.trim().to_lowercase();
        let (is_special, xyz0) = match xyz.strip_prefix('=') {
            Some(rest) => (true, rest),
            None => (false, xyz.as_str()),
        };
        if !xyz0.contains("[[")
            && !xyz0.contains("x4")
            && !(xyz0.contains('x') && xyz0.contains('y') && xyz0.contains('z'))
        {
            let msg = format!("Symmetry operation `{xyz0}` does not involve all of x, y and z.");
            log::error!("{msg}");
            return Err(SymmetryError::NotationParse(msg));
        }
        if let Some(&index) = self.xyz_index.get(xyz0) {
            return Ok(index);
        }

        let op = SymmetryOperation::parse(xyz0, op_id, self.do_normalise)?;
        let index = self.operations.len();
        if !is_special {
            if let Some(&existing) = self.xyz_index.get(&op.xyz) {
                return Ok(existing);
            }
            self.xyz_index.insert(op.xyz.clone(), index);
        }
        if op.xyz != xyz0 {
            self.xyz_index.insert(xyz0.to_string(), index);
        }
        log::debug!("Operation {} added: {}", index + 1, op.xyz);
        self.operations.push(op);
        self.final_operations = None;
        Ok(index)
    }

    /// Adds an operation given as an affine matrix in cell fractions, without checking for
    /// duplicates.
    pub fn add_operation_matrix(&mut self, matrix: &Matrix4<f64>) -> Result<usize, SymmetryError> {
        self.add_operation(&format!("={}", xyz_from_matrix(matrix, false, false, false)), 0)
    }

    /// Combines the current operations with the lattice implied by a SHELX `LATT` code.
    ///
    /// # Errors
    ///
    /// Errors if the code is not recognised.
    pub fn set_lattice(&mut self, latt: i32) -> Result<(), SymmetryError> {
        let (kind, is_centrosymmetric) = LatticeKind::from_latt(latt).ok_or_else(|| {
            let msg = format!("Unrecognised LATT code {latt}.");
            log::error!("{msg}");
            SymmetryError::NotationParse(msg)
        })?;
        self.lattice = Some((kind, is_centrosymmetric));
        if self.hall.is_none() {
            let equivalent = hall_lattice_equivalent(latt).ok_or_else(|| {
                SymmetryError::NotationParse(format!("Unrecognised LATT code {latt}."))
            })?;
            let hall = HallSymbol::from_str(&equivalent)?;
            self.generate_operators(&hall);
        }
        Ok(())
    }

    /// Closes the current operation set under the generator terms of a Hall symbol.
    ///
    /// For each term in order, every power of the term up to its order is multiplied onto each
    /// operation present before the term was reached. Products are reduced modulo whole cells
    /// and kept if new.
    fn generate_operators(&mut self, hall: &HallSymbol) {
        for term in hall.rotation_terms.iter() {
            let n_ops = self.operations.len();
            let mut power = Matrix4::<f64>::identity();
            for _ in 0..term.order {
                power = term.seitz_matrix_12ths * power;
                for k in 0..n_ops {
                    let mut op = power * self.operations[k].matrix_12ths();
                    for i in 0..3 {
                        op[(i, 3)] = wrap_twelfths(op[(i, 3)]);
                    }
                    let xyz = xyz_from_matrix(&op, true, true, true);
                    match self.add_operation(&xyz, 0) {
                        Ok(index) => self.operations[index].set_matrix_12ths(op),
                        Err(err) => log::error!("Product `{xyz}` rejected: {err}"),
                    }
                }
            }
        }
        log::debug!(
            "{} operations generated from `{}`.",
            self.operations.len(),
            hall.hall_symbol
        );
    }

    // ------------
    // Finalisation
    // ------------

    /// Converts all operations into cell fractions with translations in $`[0, 1)`$.
    ///
    /// A group that was not built from the catalog is matched against it and renamed after the
    /// matching entry if there is one.
    pub fn finalise(&mut self) {
        let ops = self
            .operations
            .iter()
            .map(|op| {
                let mut op = op.clone();
                let mut matrix = op.matrix_12ths();
                for i in 0..3 {
                    matrix[(i, 3)] = wrap_twelfths(matrix[(i, 3)]);
                }
                op.set_matrix_12ths(matrix);
                op.finalised()
            })
            .collect::<Vec<_>>();
        self.final_operations = Some(ops);
        self.match_catalog();
    }

    /// Finalises the operations and shifts each by whole cells so that it keeps the centroid
    /// of a set of fractional atoms inside the unit cell.
    ///
    /// If the identity operation itself moves the atoms (because they lie outside the cell),
    /// the atoms are first brought into the cell in place.
    pub fn finalise_with_atoms(&mut self, atoms: &mut [Point3<f64>]) {
        self.finalise();
        if atoms.is_empty() {
            return;
        }
        if let Some(first) = self.operations.first() {
            let mut identity = first.finalised();
            identity.set_offset(atoms);
            let image = identity.transform_point(&atoms[0]);
            if nalgebra::distance(&image, &atoms[0]) > 1.0e-4 {
                for atom in atoms.iter_mut() {
                    *atom = identity.transform_point(atom);
                }
            }
        }
        if let Some(ops) = self.final_operations.as_mut() {
            for op in ops.iter_mut() {
                op.set_offset(atoms);
            }
        }
    }

    fn match_catalog(&mut self) {
        if self.catalog_index.is_some() {
            return;
        }
        self.matched_index = self.derived_space_group();
        if let Some(entry) = self.catalog_entry() {
            log::debug!("Operation set matches catalog entry {}.", entry.name);
            self.name = entry.name.clone();
        }
    }

    // ---------------------
    // Canonical comparison
    // ---------------------

    /// The sorted list of the canonical Seitz matrices of all operations, with translations
    /// reduced into one cell. Two groups have the same operations iff their lists are equal.
    pub fn canonical_seitz_list(&self) -> String {
        let mut list = self
            .operations
            .iter()
            .map(|op| {
                let mut matrix = op.matrix_12ths();
                for i in 0..3 {
                    matrix[(i, 3)] = wrap_twelfths(matrix[(i, 3)]);
                }
                dump_canonical_seitz(&matrix).replace(['\t', '\n'], " ")
            })
            .collect::<Vec<_>>();
        list.sort();
        format!("[{}]", list.iter().map(|s| format!("{s}; ")).collect::<String>())
    }

    /// Finds the catalog entry with the same operation set as this group.
    ///
    /// # Returns
    ///
    /// The catalog index this group was built from, or else the first catalog entry whose
    /// canonical Seitz list matches, or `None`.
    pub fn derived_space_group(&self) -> Option<usize> {
        self.catalog_index
            .or_else(|| find_catalog_entry(&self.canonical_seitz_list()))
    }

    // -------
    // Reports
    // -------

    /// Writes the symbols, the operators, the Hall-symbol analysis and the canonical Seitz
    /// list of the group.
    pub fn dump_info(&self) -> String {
        let (hm, number) = self.catalog_entry().map_or_else(
            || ("--".to_string(), "0".to_string()),
            |entry| (entry.hm_symbol_with_ext(), entry.intl_table_number_full.clone()),
        );
        let mut s = format!(
            "\nHermann-Mauguin symbol: {hm}\ninternational table number: {number}\n\n{} operators",
            self.operations.len()
        );
        if let Some(hall) = self.hall.as_ref() {
            s += &format!(" from Hall symbol {}", hall.hall_symbol);
        }
        s += ": ";
        for op in self.operations.iter() {
            s += &format!("\n{}", op.xyz);
        }
        s += &format!(
            "\n\n{}",
            self.hall
                .as_ref()
                .map_or("invalid Hall symbol".to_string(), HallSymbol::dump_info)
        );
        s += &format!(
            "\n\ncanonical Seitz: {}\n{}\n",
            self.canonical_seitz_list(),
            "-".repeat(52)
        );
        s
    }

    /// Summarises the group.
    pub fn info(&self) -> SpaceGroupInfo {
        let entry = self.catalog_entry();
        let operations = (0..self.operation_count())
            .filter_map(|i| self.xyz(i, true).map(str::to_string))
            .collect::<Vec<_>>();
        let mut symmetry_info = format!(
            "Spacegroup: {}\nNumber of symmetry operations: {}\nSymmetry Operations:",
            self.name,
            operations.len()
        );
        for xyz in operations.iter() {
            symmetry_info += &format!("\n{xyz}");
        }
        symmetry_info += "\n";
        SpaceGroupInfo {
            name: self.name.clone(),
            hall_symbol: self.hall_symbol().to_string(),
            hm_symbol: entry.map_or("--".to_string(), SpaceGroupEntry::hm_symbol_with_ext),
            intl_table_number: entry
                .map_or("0".to_string(), |entry| entry.intl_table_number_full.clone()),
            operation_count: operations.len(),
            operations,
            catalog_index: self.matched_index,
            symmetry_info,
        }
    }
}

impl fmt::Display for SpaceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} operations)", self.name, self.operation_count())
    }
}

/// A structure for a serialisable summary of a space group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceGroupInfo {
    /// The display name of the group.
    pub name: String,

    /// The Hall symbol, or `--`.
    pub hall_symbol: String,

    /// The Hermann–Mauguin symbol with extension, or `--`.
    pub hm_symbol: String,

    /// The International Tables number with extension, or `0`.
    pub intl_table_number: String,

    /// The number of operations.
    pub operation_count: usize,

    /// The canonical strings of the operations.
    pub operations: Vec<String>,

    /// The matching catalog entry, if any.
    pub catalog_index: Option<usize>,

    /// A plain-text summary of the name and operations.
    pub symmetry_info: String,
}

impl fmt::Display for SpaceGroupInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symmetry_info)
    }
}
