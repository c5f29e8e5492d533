//! YAML configuration input for the `xtalsym` binary.

use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::drivers::point_group_detection::{
    PointGroupDetectionDriver, PointGroupDetectionParams, PointGroupDetectionResult,
};
use crate::drivers::space_group_generation::{
    SpaceGroupGenerationDriver, SpaceGroupGenerationParams, SpaceGroupGenerationResult,
};
use crate::drivers::XtalSymDriver;
use crate::interfaces::InputHandle;
use crate::io::format::{
    log_macsec_begin, log_macsec_end, log_subtitle, xtalsym_error, xtalsym_output, xtalsym_warn,
    XtalSymOutput,
};
use crate::io::{read_xtalsym_binary, XtalSymFileType};


/// An enumerated type representing possible input kinds for space-group generation from a YAML
/// input file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SpaceGroupGenerationInputKind {
    /// Variant indicating that the parameters for the space-group generation driver will be
    /// specified.
    Parameters(SpaceGroupGenerationParams),

    /// Variant indicating that the space-group generation results will be read in from an
    /// [`XtalSymFileType::Sgr`] binary file. The associated string gives the name of the file
    /// without its `.xtalsym.sgr` extension.
    FromFile(String),
}

/// A structure pairing a molecular geometry with point-group detection parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointGroupDetectionInput {
    /// Path to an XYZ file containing the molecular geometry.
    pub xyz: PathBuf,

    /// Control parameters for point-group detection.
    pub parameters: PointGroupDetectionParams,
}

/// An enumerated type representing possible input kinds for point-group detection from a YAML
/// input file.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum PointGroupDetectionInputKind {
    /// Variant indicating that a geometry and the parameters for the point-group detection
    /// driver will be specified.
    Parameters(PointGroupDetectionInput),

    /// Variant indicating that the point-group detection results will be read in from an
    /// [`XtalSymFileType::Pgr`] binary file. The associated string gives the name of the file
    /// without its `.xtalsym.pgr` extension.
    FromFile(String),
}

/// A structure containing `xtalsym` input parameters which can be serialised into and
/// deserialised from a YAML input file.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Input {
    /// Specification for space-group generation. If `None`, no space group is generated.
    #[serde(default)]
    pub space_group_generation: Option<SpaceGroupGenerationInputKind>,

    /// Specification for point-group detection. If `None`, no point group is detected.
    #[serde(default)]
    pub point_group_detection: Option<PointGroupDetectionInputKind>,
}

impl Input {
    fn handle_space_group_generation(
        &self,
        sgg_inp: &SpaceGroupGenerationInputKind,
    ) -> Result<(), anyhow::Error> {
        match sgg_inp {
            SpaceGroupGenerationInputKind::Parameters(sgg_params) => {
                let mut sgg_driver = SpaceGroupGenerationDriver::builder()
                    .parameters(sgg_params)
                    .build()
                    .with_context(|| "Unable to construct a space-group generation driver")?;
                sgg_driver
                    .run()
                    .with_context(|| "Unable to execute the space-group generation driver")?;
            }
            SpaceGroupGenerationInputKind::FromFile(name) => {
                let sgg_res: SpaceGroupGenerationResult =
                    read_xtalsym_binary(name, XtalSymFileType::Sgr).with_context(|| {
                        format!(
                            "Unable to read space-group generation results from {name}.{}",
                            XtalSymFileType::Sgr.ext()
                        )
                    })?;
                log_subtitle(&format!(
                    "Space-group generation results read in from {name}.{}",
                    XtalSymFileType::Sgr.ext()
                ));
                xtalsym_output!("");
                sgg_res.log_output_display();
                xtalsym_output!("");
            }
        }
        Ok(())
    }

    fn handle_point_group_detection(
        &self,
        pgd_inp: &PointGroupDetectionInputKind,
    ) -> Result<(), anyhow::Error> {
        match pgd_inp {
            PointGroupDetectionInputKind::Parameters(pgd_input) => {
                let xyz = pgd_input.xyz.to_string_lossy().to_string();
                let mut pgd_driver = PointGroupDetectionDriver::builder()
                    .parameters(&pgd_input.parameters)
                    .xyz(Some(xyz))
                    .build()
                    .with_context(|| "Unable to construct a point-group detection driver")?;
                pgd_driver
                    .run()
                    .with_context(|| "Unable to execute the point-group detection driver")?;
            }
            PointGroupDetectionInputKind::FromFile(name) => {
                let pgd_res: PointGroupDetectionResult =
                    read_xtalsym_binary(name, XtalSymFileType::Pgr).with_context(|| {
                        format!(
                            "Unable to read point-group detection results from {name}.{}",
                            XtalSymFileType::Pgr.ext()
                        )
                    })?;
                log_subtitle(&format!(
                    "Point-group detection results read in from {name}.{}",
                    XtalSymFileType::Pgr.ext()
                ));
                xtalsym_output!("");
                pgd_res.log_output_display();
                xtalsym_output!("");
            }
        }
        Ok(())
    }
}

impl InputHandle for Input {
    fn handle(&self) -> Result<(), anyhow::Error> {
        if self.space_group_generation.is_none() && self.point_group_detection.is_none() {
            xtalsym_warn!("Nothing to do: neither space-group generation nor point-group detection is requested.");
            return Ok(());
        }
        if let Some(sgg_inp) = self.space_group_generation.as_ref() {
            log_macsec_begin("Space-group generation");
            xtalsym_output!("");
            self.handle_space_group_generation(sgg_inp).map_err(|err| {
                xtalsym_error!("Space-group generation failed: {err:#}");
                err
            })?;
            log_macsec_end("Space-group generation");
            xtalsym_output!("");
        }
        if let Some(pgd_inp) = self.point_group_detection.as_ref() {
            log_macsec_begin("Point-group detection");
            xtalsym_output!("");
            self.handle_point_group_detection(pgd_inp).map_err(|err| {
                xtalsym_error!("Point-group detection failed: {err:#}");
                err
            })?;
            log_macsec_end("Point-group detection");
            xtalsym_output!("");
        }
        Ok(())
    }
}
