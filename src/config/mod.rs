//! Configuration and path management for BillTrack

pub mod paths;
pub mod settings;

pub use paths::BillTrackPaths;
pub use settings::Settings;
