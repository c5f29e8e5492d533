//! Reading and writing `xtalsym` result and configuration files.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{self, format_err};
use serde::{de::DeserializeOwned, Serialize};

pub(crate) mod format;


/// An enumerated type for `xtalsym` binary file types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum XtalSymFileType {
    /// Variant for binary files containing space-group generation results.
    Sgr,

    /// Variant for binary files containing point-group detection results.
    Pgr,
}

impl XtalSymFileType {
    /// Returns the extension of the file type.
    pub fn ext(&self) -> String {
        match self {
            XtalSymFileType::Sgr => "xtalsym.sgr".to_string(),
            XtalSymFileType::Pgr => "xtalsym.pgr".to_string(),
        }
    }
}

/// Reads an `xtalsym` binary file and deserialises it into an appropriate structure.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in (without `xtalsym`-specific extensions).
/// * `file_type` - The type of the `xtalsym` file to be read in.
///
/// # Returns
///
/// A `Result` containing the structure deserialised from the read-in file.
pub fn read_xtalsym_binary<T, P: AsRef<Path>>(
    name: P,
    file_type: XtalSymFileType,
) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let mut path = name.as_ref().to_path_buf();
    path.set_extension(file_type.ext());
    let mut reader = BufReader::new(File::open(path).map_err(|err| format_err!(err))?);
    bincode::deserialize_from(&mut reader).map_err(|err| format_err!(err))
}

/// Serialises a structure and writes into an `xtalsym` binary file.
///
/// # Arguments
///
/// * `name` - The name of the file to be written (without `xtalsym`-specific extensions).
/// * `file_type` - The type of the `xtalsym` file to be written.
/// * `value` - The structure to be written.
pub fn write_xtalsym_binary<T, P: AsRef<Path>>(
    name: P,
    file_type: XtalSymFileType,
    value: &T,
) -> Result<(), anyhow::Error>
where
    T: Serialize,
{
    let mut path = name.as_ref().to_path_buf();
    path.set_extension(file_type.ext());
    let mut writer = BufWriter::new(File::create(path)?);
    bincode::serialize_into(&mut writer, value).map_err(|err| format_err!(err))
}

/// Reads an `xtalsym` configuration YAML file and deserialises it into an appropriate
/// structure.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in (with its `.yml` or `.yaml` extension).
pub fn read_xtalsym_yaml<T, P: AsRef<Path>>(name: P) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(File::open(name).map_err(|err| format_err!(err))?);
    serde_yaml::from_reader(&mut reader).map_err(|err| format_err!(err))
}

/// Serialises a structure and writes into a YAML file.
///
/// # Arguments
///
/// * `name` - The name of the YAML file to be written (without extensions). The resulting file
/// will have the `.yml` extension.
pub fn write_xtalsym_yaml<T, P: AsRef<Path>>(name: P, value: &T) -> Result<(), anyhow::Error>
where
    T: Serialize,
{
    let mut path = name.as_ref().to_path_buf();
    path.set_extension("yml");
    let mut writer = BufWriter::new(File::create(path)?);
    serde_yaml::to_writer(&mut writer, value).map_err(|err| format_err!(err))
}
