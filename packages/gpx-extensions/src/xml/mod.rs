//! XML utilities for navigating `roxmltree` trees.

mod utils;

pub use utils::*;
