//! Pattern handlers - each processes one macro marker.

pub mod sync;
