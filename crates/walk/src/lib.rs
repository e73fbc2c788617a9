#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `walk` enumerates remote directories through an open
//! [`Session`](session::Session), producing a lazy sequence of
//! [`DirectoryEntry`] values. One listing call is issued per directory
//! visited, and only when the consumer actually advances into it, so
//! stopping early never triggers child listings that nobody will read.
//!
//! # Design
//!
//! - [`ListBuilder`] configures a traversal: root path, include/exclude
//!   masks (the shared [`MaskSet`](filters::MaskSet) semantics), kind
//!   filtering, and recursion.
//! - [`Listing`] implements [`Iterator`] over
//!   `Result<DirectoryEntry, ListingError>`, yielding entries in depth-first
//!   pre-order: a directory is followed immediately by its contents, then by
//!   its next sibling. The traversal stack is explicit, so tree depth bounds
//!   heap, not the call stack.
//! - Masks and kind filters decide what is *yielded*, not where the walker
//!   descends. Recursion enters every directory except hidden
//!   (dot-prefixed) ones, which are never descended into.
//!
//! # Invariants
//!
//! - Entries named `.` or `..` are never surfaced.
//! - Full paths are built from a base normalized to end in exactly one `/`.
//! - A failed listing terminates the sequence with a [`ListingError`];
//!   entries already yielded are not retracted, and the iterator is fused
//!   afterwards.

mod builder;
mod entry;
mod error;
mod walker;

pub use builder::ListBuilder;
pub use entry::DirectoryEntry;
pub use error::{ListingError, ListingErrorKind};
pub use walker::Listing;

#[cfg(test)]
mod tests;
