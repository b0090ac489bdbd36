// Common utilities shared by the derive macros
//
// This module contains:
// - parse_utils: keyword detection and list parsing helpers

mod parse_utils;

pub use parse_utils::*;
