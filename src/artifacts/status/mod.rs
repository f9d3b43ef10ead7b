//! Working tree change detection
//!
//! Decides whether a commit is necessary by comparing the tracked files against
//! their copies in the most recent snapshot.
//!
//! - `change_detector`: Core logic for detecting changes

pub mod change_detector;
