//! Driver for generating a space group from a name and reporting its operations.

use std::fmt;

use anyhow::format_err;
use derive_builder::Builder;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::drivers::XtalSymDriver;
use crate::io::format::{
    log_micsec_begin, log_micsec_end, log_subtitle, log_title, nice_bool, write_subtitle,
    xtalsym_output, xtalsym_warn, XtalSymOutput,
};
use crate::io::{write_xtalsym_binary, XtalSymFileType};
use crate::symmetry::space_group::SpaceGroupInfo;
use crate::symmetry::symmetry_facade::SymmetryFacade;
use crate::symmetry::unit_cell::CellParameters;

#[cfg(test)]
#[path = "space_group_generation_tests.rs"]
mod space_group_generation_tests;

/// Cell assumed for operation descriptions when none is given.
const DEFAULT_CELL: [f64; 6] = [1.0, 1.0, 1.0, 90.0, 90.0, 90.0];

// ==================
// Struct definitions
// ==================

// ----------
// Parameters
// ----------

/// A structure containing control parameters for space-group generation.
#[derive(Clone, Builder, Debug, PartialEq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct SpaceGroupGenerationParams {
    /// The space-group name in any supported notation: a catalog name, a Hall symbol or a
    /// semicolon-separated list of operations.
    #[builder(setter(into))]
    pub symbol: String,

    /// Optional cell lengths and angles in degrees. These are used to pick the setting of an
    /// ambiguous monoclinic name and to describe operations geometrically.
    #[builder(default = "None")]
    #[serde(default)]
    pub unit_cell: Option<[f64; 6]>,

    /// Boolean indicating if operations are reported in their canonical form rather than as
    /// supplied.
    #[builder(default = "true")]
    #[serde(default = "default_true")]
    pub normalise_operations: bool,

    /// Boolean indicating if the Seitz matrix of every operation is to be written.
    #[builder(default = "false")]
    #[serde(default)]
    pub write_seitz_matrices: bool,

    /// Boolean indicating if every operation is to be classified geometrically.
    #[builder(default = "false")]
    #[serde(default)]
    pub describe_operations: bool,

    /// Optional name for saving the result as a binary file of type [`XtalSymFileType::Sgr`].
    /// If `None`, the result will not be saved.
    #[builder(default = "None")]
    #[serde(default)]
    pub result_save_name: Option<String>,
}

fn default_true() -> bool {
    true
}

impl SpaceGroupGenerationParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(symbol) = self.symbol.as_ref() {
            if symbol.trim().is_empty() {
                log::error!("An empty space-group symbol has been specified.");
                return Err("Empty space-group symbol.".to_string());
            }
        }
        if let Some(Some(cell)) = self.unit_cell.as_ref() {
            if cell[0] <= 0.0 {
                log::error!("The cell length `a` must be positive.");
                return Err("Invalid unit cell.".to_string());
            }
        }
        Ok(())
    }
}

impl SpaceGroupGenerationParams {
    /// Returns a builder to construct a [`SpaceGroupGenerationParams`] structure.
    pub fn builder() -> SpaceGroupGenerationParamsBuilder {
        SpaceGroupGenerationParamsBuilder::default()
    }
}

impl fmt::Display for SpaceGroupGenerationParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Space-group symbol: {}", self.symbol)?;
        writeln!(
            f,
            "Unit cell: {}",
            self.unit_cell.map_or_else(
                || "--".to_string(),
                |cell| cell.iter().map(|x| format!("{x:.4}")).join(" ")
            )
        )?;
        writeln!(
            f,
            "Report canonical operations: {}",
            nice_bool(self.normalise_operations)
        )?;
        writeln!(
            f,
            "Report Seitz matrices: {}",
            nice_bool(self.write_seitz_matrices)
        )?;
        writeln!(
            f,
            "Describe operations: {}",
            nice_bool(self.describe_operations)
        )?;
        writeln!(
            f,
            "Save space-group generation results to file: {}",
            if let Some(name) = self.result_save_name.as_ref() {
                format!("{name}.{}", XtalSymFileType::Sgr.ext())
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

/// A structure to contain space-group generation results.
#[derive(Clone, Builder, Debug, Serialize, Deserialize)]
pub struct SpaceGroupGenerationResult {
    /// The control parameters used to obtain this set of results.
    pub parameters: SpaceGroupGenerationParams,

    /// The summary of the generated space group.
    pub space_group: SpaceGroupInfo,

    /// The Seitz matrix of every operation, if requested.
    #[builder(default = "None")]
    pub seitz_matrices: Option<Vec<String>>,

    /// The geometric label of every operation, if requested. Operations that cannot be
    /// classified are labelled `?`.
    #[builder(default = "None")]
    pub operation_descriptions: Option<Vec<String>>,
}

impl SpaceGroupGenerationResult {
    /// Returns a builder to construct a [`SpaceGroupGenerationResult`] structure.
    fn builder() -> SpaceGroupGenerationResultBuilder {
        SpaceGroupGenerationResultBuilder::default()
    }
}

impl fmt::Display for SpaceGroupGenerationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sg = &self.space_group;
        writeln!(f, "Space group: {}", sg.name)?;
        writeln!(f, "  Hall symbol: {}", sg.hall_symbol)?;
        writeln!(f, "  H-M symbol: {}", sg.hm_symbol)?;
        writeln!(f, "  International Tables number: {}", sg.intl_table_number)?;
        writeln!(f, "  Number of operations: {}", sg.operation_count)?;
        writeln!(f)?;

        write_subtitle(f, "Symmetry operations")?;
        let width = sg.operations.iter().map(|xyz| xyz.len()).max().unwrap_or(0).max(3);
        writeln!(f, "{}", "┈".repeat(width + 8))?;
        writeln!(f, "{:>5}  {:<width$}", "#", "xyz")?;
        writeln!(f, "{}", "┈".repeat(width + 8))?;
        for (i, xyz) in sg.operations.iter().enumerate() {
            writeln!(f, "{:>5}  {xyz:<width$}", i + 1)?;
            if let Some(seitz) = self
                .seitz_matrices
                .as_ref()
                .and_then(|seitzs| seitzs.get(i))
            {
                for line in seitz.lines() {
                    writeln!(f, "{:>5}  {line}", "")?;
                }
            }
            if let Some(label) = self
                .operation_descriptions
                .as_ref()
                .and_then(|labels| labels.get(i))
            {
                writeln!(f, "{:>5}  > {label}", "")?;
            }
        }
        writeln!(f, "{}", "┈".repeat(width + 8))?;
        Ok(())
    }
}

// ------
// Driver
// ------

/// A driver for space-group generation.
#[derive(Clone, Builder)]
pub struct SpaceGroupGenerationDriver<'a> {
    /// The control parameters for space-group generation.
    parameters: &'a SpaceGroupGenerationParams,

    /// The result of the space-group generation.
    #[builder(setter(skip), default = "None")]
    result: Option<SpaceGroupGenerationResult>,
}

impl<'a> SpaceGroupGenerationDriver<'a> {
    /// Returns a builder to construct a [`SpaceGroupGenerationDriver`] structure.
    pub fn builder() -> SpaceGroupGenerationDriverBuilder<'a> {
        SpaceGroupGenerationDriverBuilder::default()
    }

    /// Executes space-group generation.
    fn generate_space_group(&mut self) -> Result<(), anyhow::Error> {
        log_title("Space-Group Generation");
        xtalsym_output!("");
        let params = self.parameters;
        params.log_output_display();

        let mut facade = SymmetryFacade::new();
        if let Some(cell) = params.unit_cell.as_ref() {
            let cell_params = CellParameters::builder()
                .lengths_angles(*cell)
                .build()
                .map_err(|err| format_err!(err))?;
            facade
                .set_unit_cell(&cell_params)
                .map_err(|err| format_err!(err))?;
        }
        facade
            .set_space_group(&params.symbol, params.unit_cell.as_ref())
            .map_err(|err| format_err!(err))?;
        facade.set_final_operations(None);

        let mut space_group = facade
            .space_group_info()
            .ok_or_else(|| format_err!("No space group has been generated."))?;
        let n_ops = facade.space_group_operation_count();
        if !params.normalise_operations {
            space_group.operations = (0..n_ops)
                .map(|i| {
                    facade
                        .space_group_xyz(i, false)
                        .map(str::to_string)
                        .ok_or_else(|| format_err!("Operation {i} cannot be retrieved."))
                })
                .collect::<Result<Vec<_>, _>>()?;
        }

        let seitz_matrices = if params.write_seitz_matrices {
            Some(
                (0..n_ops)
                    .map(|i| {
                        facade
                            .space_group_operation(i)
                            .map(|op| op.dump_seitz())
                            .ok_or_else(|| format_err!("Operation {i} cannot be retrieved."))
                    })
                    .collect::<Result<Vec<_>, _>>()?,
            )
        } else {
            None
        };

        let operation_descriptions = if params.describe_operations {
            if !facade.has_unit_cell() {
                xtalsym_warn!(
                    "No unit cell given. Operations are described in a cubic cell of unit length."
                );
                let cell_params = CellParameters::builder()
                    .lengths_angles(DEFAULT_CELL)
                    .build()
                    .map_err(|err| format_err!(err))?;
                facade
                    .set_unit_cell(&cell_params)
                    .map_err(|err| format_err!(err))?;
            }
            log_micsec_begin("Operation classification");
            let labels = (0..n_ops)
                .map(|i| match facade.symmetry_operation_description(i, None, None) {
                    Ok(desc) => desc.label,
                    Err(err) => {
                        log::warn!("Operation {} cannot be described: {err}", i + 1);
                        "?".to_string()
                    }
                })
                .collect_vec();
            xtalsym_output!(
                "{} of {n_ops} operation(s) classified.",
                labels.iter().filter(|label| *label != "?").count()
            );
            log_micsec_end("Operation classification");
            xtalsym_output!("");
            Some(labels)
        } else {
            None
        };

        let result = SpaceGroupGenerationResult::builder()
            .parameters(params.clone())
            .space_group(space_group)
            .seitz_matrices(seitz_matrices)
            .operation_descriptions(operation_descriptions)
            .build()
            .map_err(|err| format_err!(err))?;

        log_subtitle("Generated space group");
        xtalsym_output!("");
        result.log_output_display();
        xtalsym_output!("");

        if let Some(name) = params.result_save_name.as_ref() {
            write_xtalsym_binary(name, XtalSymFileType::Sgr, &result)?;
            xtalsym_output!(
                "Space-group generation results saved as {name}.{}.",
                XtalSymFileType::Sgr.ext()
            );
            xtalsym_output!("");
        }

        self.result = Some(result);
        Ok(())
    }
}

impl XtalSymDriver for SpaceGroupGenerationDriver<'_> {
    type Params = SpaceGroupGenerationParams;

    type Outcome = SpaceGroupGenerationResult;

    fn result(&self) -> Result<&Self::Outcome, anyhow::Error> {
        self.result
            .as_ref()
            .ok_or_else(|| format_err!("No space-group generation results found."))
    }

    fn run(&mut self) -> Result<(), anyhow::Error> {
        self.generate_space_group()
    }
}
