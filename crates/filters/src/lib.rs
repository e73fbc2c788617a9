#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `filters` implements the single mask-matching semantic shared by the ferry
//! directory walker and transfer engine: case-insensitive glob patterns
//! matched against a **leaf name only**, never against a full path. Keeping
//! one compiler here prevents the two consumers from drifting into subtly
//! different wildcard dialects.
//!
//! # Semantics
//!
//! A [`MaskSet`] holds an include list and an exclude list, either of which
//! may be empty:
//!
//! - Empty include list: every name is included by default.
//! - Non-empty include list: a name is included only if it matches at least
//!   one include mask.
//! - A name matching any exclude mask is excluded, overriding inclusion.
//!
//! Matching is case-insensitive, and `*` matches across the whole name (`/`
//! has no special meaning because only leaf names are ever tested).
//!
//! # Examples
//!
//! ```
//! use filters::MaskSet;
//!
//! let set = MaskSet::new(["*.log"], ["debug.*"]).unwrap();
//! assert!(set.allows("server.LOG"));
//! assert!(!set.allows("notes.txt"));
//! assert!(!set.allows("debug.log"));
//! ```

mod error;
mod set;

pub use error::MaskError;
pub use set::MaskSet;
