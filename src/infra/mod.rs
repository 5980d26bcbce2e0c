//! I/O collaborators: dataset loading, history storage, exports.

pub mod dataset;
pub mod history;
pub mod report;
