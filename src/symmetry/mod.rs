//! Crystallographic and molecular symmetry.

pub mod hall_symbol;
pub mod point_group;
pub mod space_group;
pub mod space_group_catalog;
pub mod symmetry_error;
pub mod symmetry_facade;
pub mod symmetry_operation;
pub mod twelfths;
pub mod unit_cell;
