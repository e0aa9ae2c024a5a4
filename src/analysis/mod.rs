//! Analysis of assembled pictures

/// Pattern search and water roughness
pub mod monsters;
