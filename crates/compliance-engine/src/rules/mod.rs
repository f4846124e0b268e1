//! Per-entity rule tables.
//!
//! Each module exposes one check over its entity's facts and returns the
//! findings it produced. Checks run independently; none of them see the
//! other entities.

pub mod borrower;
pub mod documentation;
pub mod program;
pub mod property;
pub mod seller;
