//! # xtalsym: crystallographic and molecular symmetry
//!
//! `xtalsym` builds space groups and detects molecular point groups:
//! - parsing of Hall symbols into generator matrices and closure into full operation sets,
//! - resolution of Hermann–Mauguin symbols, International Tables numbers with setting
//!   extensions, Hall symbols and SHELX `LATT` codes against a catalog of 593 settings,
//! - parsing, formatting and geometric classification of Jones–Faithful operations,
//! - unit-cell geometry, including fractional/Cartesian conversion and displacement
//!   ellipsoids, and
//! - Schoenflies point-group detection for finite sets of atoms.
//!
//! The [`symmetry::symmetry_facade::SymmetryFacade`] composes these pieces for a single model.
//! The `xtalsym` binary runs the drivers in [`drivers`] from a YAML configuration file.
//!
//! ## Examples and usage
//!
//! For most items (structs, enums, functions, and traits), their usages are illustrated in test
//! functions.
//!
//! ## License
//!
//! GNU Lesser General Public License v3.0.

pub mod auxiliary;
pub mod drivers;
pub mod interfaces;
pub mod io;
pub mod symmetry;
