pub mod chart;
pub mod precursor;
pub mod summary;

pub use chart::RenkoChart;
pub use precursor::{
    calculate_precursors, calculate_precursors_with, PrecursorBrick, PrecursorConfig,
    PrecursorTracker, DEFAULT_SQUEEZE_WINDOW, DEFAULT_VOLUME_WINDOW,
};
pub use summary::BrickSummary;
