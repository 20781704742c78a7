//! # heriquiz Core
//!
//! Core data model for the heriquiz distractor engine.
//!
//! This crate provides the value types every other heriquiz crate consumes:
//!
//! - [`HeritageRecord`] - A heritage site with its UNESCO tag, regions and features
//! - [`UnescoTag`] - Cultural, natural or mixed classification
//! - [`RecordPool`] - Records loaded from JSON, indexed by [`RecordId`]
//!
//! ## Example
//!
//! ```rust
//! use heriquiz_core::{HeritageRecord, RecordId, RecordPool, UnescoTag};
//!
//! let pool = RecordPool::new(vec![
//!     HeritageRecord::new(1, "Angkor")
//!         .with_unesco(UnescoTag::Cultural)
//!         .with_regions(["Asia"]),
//!     HeritageRecord::new(2, "Borobudur")
//!         .with_unesco(UnescoTag::Cultural)
//!         .with_regions(["Asia"]),
//! ])
//! .unwrap();
//!
//! let (target, candidates) = pool.split_target(RecordId(1)).unwrap();
//! assert_eq!(target.title, "Angkor");
//! assert_eq!(candidates.len(), 1);
//! ```

pub mod error;
pub mod pool;
pub mod record;

pub use error::{Error, Result};
pub use pool::RecordPool;
pub use record::{HeritageRecord, RecordId, UnescoTag};
