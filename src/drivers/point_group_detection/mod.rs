//! Driver for detecting the point group of a molecule.

use std::fmt;

use anyhow::{bail, format_err};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::auxiliary::molecule::Molecule;
use crate::drivers::XtalSymDriver;
use crate::io::format::{
    log_micsec_begin, log_micsec_end, log_subtitle, log_title, nice_bool, write_subtitle,
    xtalsym_output, XtalSymOutput,
};
use crate::io::{write_xtalsym_binary, XtalSymFileType};
use crate::symmetry::point_group::point_group_element::PointGroupElementKind;
use crate::symmetry::point_group::{PointGroup, PointGroupDetector};


// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

/// A structure containing control parameters for point-group detection.
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct PointGroupDetectionParams {
    /// Largest distance between an image point and an atom for the two to be considered
    /// coincident.
    #[builder(default = "0.2")]
    #[serde(default = "default_distance_tolerance")]
    pub distance_tolerance: f64,

    /// Largest angle in degrees between two directions for them to be considered parallel.
    #[builder(default = "8.0")]
    #[serde(default = "default_linear_tolerance")]
    pub linear_tolerance: f64,

    /// Boolean indicating if atoms are displaced along their vibration vectors before
    /// detection.
    #[builder(default = "false")]
    #[serde(default)]
    pub use_vibrations: bool,

    /// Optional largest distance between two atoms for them to be considered bonded. Bond
    /// counts distinguish otherwise identical atoms. If `None`, no bonds are assigned.
    #[builder(default = "None")]
    #[serde(default)]
    pub max_bond_length: Option<f64>,

    /// Boolean indicating if a summary of the located symmetry elements is to be written to the
    /// output file.
    #[builder(default = "false")]
    #[serde(default)]
    pub write_symmetry_elements: bool,

    /// Optional name for saving the result as a binary file of type [`XtalSymFileType::Pgr`].
    /// If `None`, the result will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

fn default_distance_tolerance() -> f64 {
    0.2
}

fn default_linear_tolerance() -> f64 {
    8.0
}

impl PointGroupDetectionParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(length)) = self.max_bond_length {
            if length <= 0.0 {
                log::error!("Maximum bond length {length} is invalid. It must be positive.");
                return Err("Invalid maximum bond length.".to_string());
            }
        }
        PointGroupDetector::builder()
            .distance_tolerance(
                self.distance_tolerance
                    .unwrap_or_else(default_distance_tolerance),
            )
            .linear_tolerance(self.linear_tolerance.unwrap_or_else(default_linear_tolerance))
            .build()
            .map(|_| ())
            .map_err(|err| err.to_string())
    }
}

impl PointGroupDetectionParams {
    /// Returns a builder to construct a [`PointGroupDetectionParams`] structure.
    pub fn builder() -> PointGroupDetectionParamsBuilder {
        PointGroupDetectionParamsBuilder::default()
    }

    /// Constructs the detector configured by these parameters.
    fn detector(&self) -> Result<PointGroupDetector, anyhow::Error> {
        PointGroupDetector::builder()
            .distance_tolerance(self.distance_tolerance)
            .linear_tolerance(self.linear_tolerance)
            .use_vibrations(self.use_vibrations)
            .build()
            .map_err(|err| format_err!(err))
    }
}

impl fmt::Display for PointGroupDetectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Distance tolerance: {:.3e}", self.distance_tolerance)?;
        writeln!(f, "Linear tolerance: {:.3} deg", self.linear_tolerance)?;
        writeln!(
            f,
            "Displace atoms along vibrations: {}",
            nice_bool(self.use_vibrations)
        )?;
        writeln!(
            f,
            "Maximum bond length: {}",
            self.max_bond_length
                .map_or_else(|| "--".to_string(), |length| format!("{length:.3}"))
        )?;
        writeln!(
            f,
            "Report symmetry elements: {}",
            nice_bool(self.write_symmetry_elements)
        )?;
        writeln!(
            f,
            "Save point-group detection results to file: {}",
            if let Some(name) = self.result_save_name.as_ref() {
                format!("{name}.{}", XtalSymFileType::Pgr.ext())
            } else {
                nice_bool(false)
            }
        )?;
        writeln!(f)?;
        Ok(())
    }
}

// ------
// Result
// ------

/// A structure to contain point-group detection results.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct PointGroupDetectionResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: PointGroupDetectionParams,

    /// The detected point group.
    pub point_group: PointGroup,
}

impl PointGroupDetectionResult {
    /// Returns a builder to construct a [`PointGroupDetectionResult`] structure.
    fn builder() -> PointGroupDetectionResultBuilder {
        PointGroupDetectionResultBuilder::default()
    }

    /// Writes the located symmetry elements in a table.
    fn write_symmetry_elements(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pg = &self.point_group;
        write_subtitle(
            f,
            &format!("Symmetry element report for point group {}", pg.name()),
        )?;
        writeln!(f)?;
        for kind in [
            PointGroupElementKind::ProperAxis,
            PointGroupElementKind::ImproperAxis,
            PointGroupElementKind::Plane,
            PointGroupElementKind::InversionCentre,
        ] {
            if pg.n_elements_of_kind(kind) == 0 {
                continue;
            }
            writeln!(f, "> {kind} elements")?;
            writeln!(f, "{}", "┈".repeat(54))?;
            writeln!(
                f,
                "{:>7} {:>7} {:>11}  {:>11}  {:>11}",
                "#", "Symbol", "x", "y", "z"
            )?;
            writeln!(f, "{}", "┈".repeat(54))?;
            for element in pg.elements().filter(|el| el.kind == kind) {
                match element.normal_or_axis {
                    Some(v) => writeln!(
                        f,
                        "{:>7} {:>7} {:>+11.7}  {:>+11.7}  {:>+11.7}",
                        element.index,
                        element.label(),
                        v[0],
                        v[1],
                        v[2]
                    )?,
                    None => {
                        let c = pg.centre();
                        writeln!(
                            f,
                            "{:>7} {:>7} {:>+11.7}  {:>+11.7}  {:>+11.7}",
                            element.index,
                            element.label(),
                            c[0],
                            c[1],
                            c[2]
                        )?
                    }
                }
            }
            writeln!(f, "{}", "┈".repeat(54))?;
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for PointGroupDetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pg = &self.point_group;
        writeln!(
            f,
            "Point group found: {} ({} {})",
            pg.name(),
            pg.total_operation_count(),
            if pg.total_operation_count() != 1 {
                "operations"
            } else {
                "operation"
            }
        )?;
        writeln!(f, "  Number of atoms: {}", pg.n_atoms())?;
        writeln!(f, "  Determined: {}", nice_bool(pg.is_determined()))?;
        if let Some(axis) = pg.principal_axis() {
            writeln!(f, "  Principal axis: {axis}")?;
        }
        if let Some(plane) = pg.principal_plane() {
            writeln!(f, "  Principal plane: {plane}")?;
        }
        writeln!(f)?;

        if self.parameters.write_symmetry_elements {
            self.write_symmetry_elements(f)?;
        }

        write_subtitle(f, "Operation table")?;
        writeln!(f, "{}", pg.info_table())?;
        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for point-group detection.
#[derive(Clone, Builder)]
pub struct PointGroupDetectionDriver<'a> {
    /// The control parameters for point-group detection.
    parameters: &'a PointGroupDetectionParams,

    /// A path to a `.xyz` file specifying the geometry of the molecule for symmetry analysis.
    /// Only one of this or [`Self::molecule`] should be specified.
    #[builder(default = "None")]
    xyz: Option<String>,

    /// A molecule for symmetry analysis. Only one of this or [`Self::xyz`] should be specified.
    #[builder(default = "None")]
    molecule: Option<&'a Molecule>,

    /// The result of the point-group detection.
    #[builder(setter(skip), default = "None")]
    result: Option<PointGroupDetectionResult>,
}

impl<'a> PointGroupDetectionDriver<'a> {
    /// Returns a builder to construct a [`PointGroupDetectionDriver`] structure.
    pub fn builder() -> PointGroupDetectionDriverBuilder<'a> {
        PointGroupDetectionDriverBuilder::default()
    }

    /// Executes point-group detection.
    fn detect_point_group(&mut self) -> Result<(), anyhow::Error> {
        log_title("Point-Group Detection");
        xtalsym_output!("");
        let params = self.parameters;
        params.log_output_display();

        let mut mol = match (self.molecule, self.xyz.as_ref()) {
            (Some(molecule), None) => molecule.clone(),
            (None, Some(xyz)) => Molecule::from_xyz(xyz, params.distance_tolerance)?,
            _ => bail!("Neither or both `molecule` and `xyz` are specified."),
        };
        if let Some(length) = params.max_bond_length {
            mol.assign_bond_counts(length);
        }
        xtalsym_output!("Molecule for point-group detection:");
        mol.log_output_display();
        xtalsym_output!("");

        let detector = params.detector()?;
        log_micsec_begin("Symmetry-element search");
        let point_group = detector.detect(&mol.atoms);
        xtalsym_output!(
            "{} symmetry element(s) located for {} atom(s).",
            point_group.elements().count(),
            point_group.n_atoms()
        );
        log_micsec_end("Symmetry-element search");
        xtalsym_output!("");
        if !point_group.is_determined() {
            log::warn!("Point group not determined: {}", point_group.name());
        }

        let result = PointGroupDetectionResult::builder()
            .parameters(params.clone())
            .point_group(point_group)
            .build()
            .map_err(|err| format_err!(err))?;

        log_subtitle("Detected point group");
        xtalsym_output!("");
        result.log_output_display();
        xtalsym_output!("");

        if let Some(name) = params.result_save_name.as_ref() {
            write_xtalsym_binary(name, XtalSymFileType::Pgr, &result)?;
            xtalsym_output!(
                "Point-group detection results saved as {name}.{}.",
                XtalSymFileType::Pgr.ext()
            );
            xtalsym_output!("");
        }

        self.result = Some(result);
        Ok(())
    }
}

impl XtalSymDriver for PointGroupDetectionDriver<'_> {
    type Params = PointGroupDetectionParams;

    type Outcome = PointGroupDetectionResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No point-group detection results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.detect_point_group()
    }
}
