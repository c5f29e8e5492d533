//! Helper items to assist the working of `xtalsym`.

pub mod atom;
pub mod geometry;
pub(crate) mod misc;
pub mod molecule;
