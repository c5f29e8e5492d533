//! The catalog of space-group settings and the resolution of space-group names against it.

use std::collections::HashSet;
use std::fmt;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::symmetry::symmetry_error::SymmetryError;

mod catalog_data;

#[cfg(test)]
#[path = "space_group_catalog_tests.rs"]
mod space_group_catalog_tests;

use catalog_data::SPACE_GROUP_DEFINITIONS;

/// The International Tables number of the setting whose generated operators are known to differ
/// from some external structure files. Its entry is kept as tabulated.
pub const UNCERTAIN_TABLE_NUMBER: &str = "154";

lazy_static! {
    static ref CATALOG: SpaceGroupCatalog = SpaceGroupCatalog::build();
}

// ==================
// Struct definitions
// ==================

/// The way in which several settings of one space group are told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ambiguity {
    /// The setting is unique.
    None,

    /// The settings differ in their unique axis, which is the first character of the
    /// extension, *e.g.* `b` in `14:b1`.
    Axis { unique_axis: char },

    /// The settings differ in their origin choice (`:1` or `:2`).
    Origin,

    /// The settings differ in their cell choice, hexagonal (`:h`) or rhombohedral (`:r`).
    CellChoice { axis_choice: char },
}

/// A structure for one setting in the space-group catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceGroupEntry {
    /// The position of the entry in the catalog.
    pub index: usize,

    /// The International Tables number with its extension, *e.g.* `14:b1`.
    pub intl_table_number_full: String,

    /// The International Tables number, *e.g.* `14`.
    pub intl_table_number: String,

    /// The setting extension, *e.g.* `b1`, or an empty string.
    pub intl_table_number_ext: String,

    /// The Schoenflies symbol, *e.g.* `c2h^5`.
    pub schoenflies: String,

    /// The full Hermann–Mauguin symbol with its extension, *e.g.* `P 1 21/c 1`.
    pub hm_symbol_full: String,

    /// The full Hermann–Mauguin symbol without extension.
    pub hm_symbol: String,

    /// The Hermann–Mauguin extension, *e.g.* `2` in `F d -3 m:2`.
    pub hm_symbol_ext: String,

    /// The variant spelling without the bar for `-3` cubic symbols, *e.g.* `f m 3 m`.
    pub hm_symbol_alternative: Option<String>,

    /// The Hermann–Mauguin symbol without spaces, *e.g.* `P121/c1`.
    pub hm_symbol_abbr: String,

    /// The Hermann–Mauguin symbol without ` 1` terms or spaces, *e.g.* `P21/c`.
    pub hm_symbol_abbr_short: String,

    /// The Hall symbol, *e.g.* `-P 2ybc`.
    pub hall_symbol: String,

    /// How this setting is distinguished from the other settings of the same group.
    pub ambiguity: Ambiguity,

    /// A display name of the form `hall [H-M] #number`.
    pub name: String,
}

impl SpaceGroupEntry {
    /// Parses one catalog line `number[:ext];schoenflies;hm[:ext];hall`.
    fn from_definition(index: usize, line: &str) -> Option<Self> {
        let mut terms = line.split(';');
        let intl_table_number_full = terms.next()?.trim().to_string();
        let schoenflies = terms.next()?.to_string();
        let hm = terms.next()?;
        let hall = terms.next()?;

        let (intl_table_number, intl_table_number_ext) = match intl_table_number_full
            .split_once(':')
        {
            Some((number, ext)) => (number.to_string(), ext.to_string()),
            None => (intl_table_number_full.clone(), String::new()),
        };
        let ambiguity = classify_extension(&intl_table_number_ext);

        let hm_symbol_full = capitalise(hm, 1);
        let (hm_symbol, hm_symbol_ext) = match hm_symbol_full.split_once(':') {
            Some((symbol, ext)) => (symbol.to_string(), ext.to_string()),
            None => (hm_symbol_full.clone(), String::new()),
        };
        let hm_symbol_alternative = hm_symbol.find(" -3").and_then(|pt| {
            let preceding = hm_symbol[..pt].chars().last()?;
            "admn".contains(preceding).then(|| {
                format!("{} 3{}", &hm_symbol[..pt], &hm_symbol[pt + 3..]).to_lowercase()
            })
        });
        let hm_symbol_abbr = hm_symbol.replace(' ', "");
        let hm_symbol_abbr_short = hm_symbol.replace(" 1", "").replace(' ', "");

        let hall_symbol = capitalise(hall, 2);
        let name = format!("{hall_symbol} [{hm_symbol_full}] #{intl_table_number}");

        Some(Self {
            index,
            intl_table_number_full,
            intl_table_number,
            intl_table_number_ext,
            schoenflies,
            hm_symbol_full,
            hm_symbol,
            hm_symbol_ext,
            hm_symbol_alternative,
            hm_symbol_abbr,
            hm_symbol_abbr_short,
            hall_symbol,
            ambiguity,
            name,
        })
    }

    /// Whether this entry is the setting flagged by [`UNCERTAIN_TABLE_NUMBER`].
    pub fn is_uncertain(&self) -> bool {
        self.intl_table_number == UNCERTAIN_TABLE_NUMBER
    }

    /// The Hermann–Mauguin symbol with its extension, if any, *e.g.* `F d -3 m:2`.
    pub fn hm_symbol_with_ext(&self) -> String {
        if self.hm_symbol_ext.is_empty() {
            self.hm_symbol.clone()
        } else {
            format!("{}:{}", self.hm_symbol, self.hm_symbol_ext)
        }
    }
}

impl fmt::Display for SpaceGroupEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Uppercases the first `n` characters of a catalog field.
fn capitalise(s: &str, n: usize) -> String {
    s.chars()
        .enumerate()
        .map(|(i, c)| if i < n { c.to_ascii_uppercase() } else { c })
        .collect()
}

fn classify_extension(ext: &str) -> Ambiguity {
    if ext.is_empty() {
        return Ambiguity::None;
    }
    let term = ext.strip_prefix('-').unwrap_or(ext);
    if term == "h" || term == "r" {
        ext.chars()
            .next()
            .map_or(Ambiguity::None, |axis_choice| Ambiguity::CellChoice { axis_choice })
    } else if ext.starts_with('1') || ext.starts_with('2') {
        Ambiguity::Origin
    } else if ext.chars().count() <= 2 {
        ext.chars()
            .next()
            .map_or(Ambiguity::None, |unique_axis| Ambiguity::Axis { unique_axis })
    } else {
        Ambiguity::None
    }
}

// ===========
// The catalog
// ===========

/// The kind of name given to the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NameKind {
    Any,
    Hall,
    HermannMauguin,
}

/// A structure for the immutable table of space-group settings.
///
/// The table is built once on first use and shared thereafter.
#[derive(Debug)]
pub struct SpaceGroupCatalog {
    entries: Vec<SpaceGroupEntry>,

    /// Hermann–Mauguin symbols (lowercase) that are listed more than once for the same number
    /// and Hall symbol. These are resolved by cell metric even when no extension is given.
    ambiguous_names: HashSet<String>,
}

impl SpaceGroupCatalog {
    fn build() -> Self {
        let entries = SPACE_GROUP_DEFINITIONS
            .iter()
            .enumerate()
            .filter_map(|(i, line)| SpaceGroupEntry::from_definition(i, line))
            .collect::<Vec<_>>();
        assert_eq!(
            entries.len(),
            SPACE_GROUP_DEFINITIONS.len(),
            "Malformed space-group catalog line."
        );

        let mut ambiguous_names = HashSet::new();
        let mut last_info = String::new();
        for entry in entries.iter() {
            let info = format!("{}{}", entry.intl_table_number, entry.hall_symbol);
            if !entry.intl_table_number.starts_with('0') && info == last_info {
                ambiguous_names.insert(entry.hm_symbol.to_lowercase());
            }
            last_info = info;
        }
        log::debug!(
            "Space-group catalog built with {} entries and {} ambiguous names.",
            entries.len(),
            ambiguous_names.len()
        );
        Self {
            entries,
            ambiguous_names,
        }
    }

    /// Returns the process-wide catalog.
    pub fn get() -> &'static Self {
        &CATALOG
    }

    /// The entries in catalog order.
    pub fn entries(&self) -> &[SpaceGroupEntry] {
        &self.entries
    }

    /// The entry at `index`, if any.
    pub fn entry(&self, index: usize) -> Option<&SpaceGroupEntry> {
        self.entries.get(index)
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty. It never is.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a Hermann–Mauguin symbol is listed more than once for the same setting.
    pub fn is_ambiguous_name(&self, name: &str) -> bool {
        self.ambiguous_names.contains(&name.to_lowercase())
    }

    /// Resolves a space-group name to a catalog index.
    ///
    /// # Arguments
    ///
    /// * `name` - A Hall symbol (optionally prefixed `hall:`), a Hermann–Mauguin symbol in full,
    /// abbreviated or short form (optionally prefixed `hm:`), or an International Tables
    /// number, each optionally followed by `:ext`.
    /// * `cell` - Optional cell parameters $`(a, b, c, \alpha, \beta, \gamma)`$ used to pick a
    /// unique axis when the name does not specify one.
    ///
    /// # Errors
    ///
    /// Errors with [`SymmetryError::LookupMiss`] if no entry matches.
    pub fn resolve(&self, name: &str, cell: Option<&[f64; 6]>) -> Result<usize, SymmetryError> {
        self.resolve_after(name, cell, None).ok_or_else(|| {
            let msg = format!("No space group found for `{name}`.");
            log::debug!("{msg}");
            SymmetryError::LookupMiss(msg)
        })
    }

    /// Resolves a space-group name, considering only entries after `last`.
    ///
    /// Each stage of the resolution cascade scans the catalog from the top and the first
    /// matching entry of the first successful stage is returned.
    pub fn resolve_after(
        &self,
        name: &str,
        cell: Option<&[f64; 6]>,
        last: Option<usize>,
    ) -> Option<usize> {
        let start = last.map_or(0, |i| i + 1);
        let candidates = || self.entries.iter().skip(start);

        let mut name = name.trim().to_lowercase();
        let mut kind = NameKind::Any;
        if let Some(rest) = name.strip_prefix("hall:") {
            kind = NameKind::Hall;
            name = rest.trim().to_string();
        } else if let Some(rest) = name.strip_prefix("hm:") {
            kind = NameKind::HermannMauguin;
            name = rest.trim().to_string();
        } else if let Some(i) = name.find('[') {
            // A display name `hall [H-M] #n` fed back in.
            kind = NameKind::Hall;
            name = name[..i].trim().to_string();
        }
        let name_ext = name.clone();

        let mut name = separate_lattice(&name.replace('_', " "));
        let mut ext = String::new();
        let mut have_extension = false;
        if let Some(i) = name.find(':').filter(|i| *i > 0) {
            ext = name[i + 1..].to_string();
            name = name[..i].trim().to_string();
            have_extension = true;
        }
        if kind != NameKind::Hall && !have_extension && self.is_ambiguous_name(&name) {
            ext = "?".to_string();
            have_extension = true;
        }
        let ext_given = have_extension && !ext.starts_with('?');
        let abbr = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '(' | ')'))
            .collect::<String>();

        // Hall symbol
        if kind != NameKind::HermannMauguin && !have_extension {
            if let Some(entry) = candidates().find(|s| s.hall_symbol.eq_ignore_ascii_case(&name)) {
                return Some(entry.index);
            }
        }

        if kind != NameKind::Hall {
            // Full International Tables number with extension
            if kind != NameKind::HermannMauguin {
                if let Some(entry) = candidates().find(|s| s.intl_table_number_full == name_ext) {
                    return Some(entry.index);
                }
            }

            // Full Hermann–Mauguin symbol with extension
            if let Some(entry) =
                candidates().find(|s| s.hm_symbol_full.eq_ignore_ascii_case(&name_ext))
            {
                return Some(entry.index);
            }

            // `-3`/`3` spelling variants of cubic symbols
            if let Some(entry) = candidates()
                .find(|s| s.hm_symbol_alternative.as_deref() == Some(name_ext.as_str()))
            {
                return Some(entry.index);
            }

            if have_extension {
                // Abbreviated Hermann–Mauguin symbol with extension
                if let Some(entry) = candidates().find(|s| {
                    s.hm_symbol_abbr.eq_ignore_ascii_case(&abbr) && s.intl_table_number_ext == ext
                }) {
                    return Some(entry.index);
                }

                // Short Hermann–Mauguin symbol with extension
                if let Some(entry) = candidates().find(|s| {
                    s.hm_symbol_abbr_short.eq_ignore_ascii_case(&abbr)
                        && s.intl_table_number_ext == ext
                }) {
                    return Some(entry.index);
                }
            }

            // Settings distinguished by unique axis, origin or cell choice
            if !ext_given {
                let unique_axis = cell.and_then(|[a, b, c, alpha, beta, gamma]| {
                    Self::determine_unique_axis(*a, *b, *c, *alpha, *beta, *gamma)
                });
                let found = candidates()
                    .filter(|s| {
                        s.hm_symbol_abbr.eq_ignore_ascii_case(&abbr)
                            || s.hm_symbol_abbr_short.eq_ignore_ascii_case(&abbr)
                    })
                    .find(|s| match s.ambiguity {
                        Ambiguity::None => true,
                        Ambiguity::Axis { unique_axis: axis } => {
                            unique_axis.map_or(true, |unique_axis| unique_axis == axis)
                        }
                        Ambiguity::Origin => s.hm_symbol_ext == "2",
                        Ambiguity::CellChoice { axis_choice } => axis_choice == 'h',
                    });
                if let Some(entry) = found {
                    return Some(entry.index);
                }
            }
        }

        // Bare number
        if !ext_given {
            if let Some(entry) = candidates().find(|s| s.intl_table_number == name_ext) {
                return Some(entry.index);
            }
        }
        None
    }

    /// Lists every entry matching a name, by resuming the resolution after each hit.
    pub fn resolve_all(&self, name: &str, cell: Option<&[f64; 6]>) -> Vec<usize> {
        let mut hits = vec![];
        let mut last = None;
        while let Some(i) = self.resolve_after(name, cell, last) {
            hits.push(i);
            last = Some(i);
        }
        hits
    }

    /// Determines the unique axis of a cell from equalities among its parameters.
    ///
    /// # Returns
    ///
    /// `Some('a')`, `Some('b')` or `Some('c')`, or `None` if no axis is singled out (including
    /// when all lengths or all angles are equal).
    pub fn determine_unique_axis(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Option<char> {
        if a == b {
            return (b != c).then_some('c');
        }
        if b == c {
            return Some('a');
        }
        if c == a {
            return Some('b');
        }
        if alpha == beta {
            return (beta != gamma).then_some('c');
        }
        if beta == gamma {
            return Some('a');
        }
        if gamma == alpha {
            return Some('b');
        }
        None
    }
}

/// Makes sure that the lattice symbol (with its optional `-`) is followed by a space, so that
/// `p21/c` and `-p1` become `p 21/c` and `-p 1`.
fn separate_lattice(name: &str) -> String {
    if name.chars().count() < 2 {
        return name.to_string();
    }
    let i = if name.starts_with('-') { 2 } else { 1 };
    match name.get(i..) {
        Some(rest) if !rest.is_empty() && !rest.starts_with(' ') => {
            format!("{} {rest}", &name[..i])
        }
        _ => name.to_string(),
    }
}
