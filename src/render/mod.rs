//! Terminal rendering for the prediction form
//!
//! Every function returns a `String` and never reads or changes form state.

pub mod grid;
pub mod result;

pub use grid::{
    banner, circuit_grid, driver_grid, driver_label, race_label, season_picker, step_header,
    teams_table,
};
pub use result::{
    classify_accuracy, compare, confidence_level, format_confidence, format_position,
    points_for_position, points_table, result_panel, status_panel, Accuracy, Comparison,
    ConfidenceLevel, POINTS_BY_POSITION,
};
