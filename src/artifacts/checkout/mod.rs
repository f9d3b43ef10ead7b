//! Checkout operations
//!
//! Restoring a snapshot is planned before anything is written:
//! - every file stored in the snapshot becomes an action
//! - files present in the working root are overwritten with the stored bytes
//! - files missing from the working root are skipped, never created
//!
//! Files in the working root that the snapshot does not contain are left alone.

pub mod restore_plan;
