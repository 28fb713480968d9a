#![warn(
    clippy::pedantic,
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms
)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(rustdoc::broken_intra_doc_links)]

//! `kadsel` validates and decomposes JVM method descriptors such as
//! `spawnParticle(Lnet/minecraft/util/EnumParticleTypes;DDDDDD[I)V`, and provides
//! a hashable key that can be matched against method entries read from class files.
//!
//! ```
//! use kadsel::{jvm::method::MethodEntry, types::method_descriptor::MethodDescriptor};
//!
//! let descriptor = MethodDescriptor::parse_from_full_path("foo(I[J)V")?;
//! assert_eq!(descriptor.argument_list(), ["I", "[J"]);
//! assert!(descriptor.matches(&MethodEntry::new("foo", "(I[J)V")));
//! # Ok::<(), kadsel::types::method_descriptor::Error>(())
//! ```
//! ## Features
#![doc = document_features::document_features!()]

pub mod jvm;
pub(crate) mod macros;
pub mod types;

/// Test utilities
#[cfg(test)]
pub(crate) mod tests;
