mod engine;
mod format;
mod report;
mod types;
mod validate;

pub use engine::{EngineError, FutureValueEngine, ProjectionEngine};
pub use format::usd;
pub use report::{
    ProjectionReport, SUMMARY_DISCLAIMER, SUMMARY_TITLE, TrackStatus, classify_track, render,
};
pub use types::{Inputs, Projection};
pub use validate::{ValidationError, validate};
