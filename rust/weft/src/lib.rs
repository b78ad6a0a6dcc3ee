//! # Weft: extended collections
//!
//! Weft provides ordered lists and hash sets with a large functional
//! iteration API (select, reject, collect, detect, inject, partition,
//! grouping, zipping, sorting, batched parallel iteration) on top of plain
//! container semantics.
//!
//! ## Key Features
//!
//! * **Capability traits**: [`collections::ListIterable`] and
//!   [`collections::SetIterable`] carry the whole read API as default methods,
//!   so every container, view and decorator shares one implementation
//! * **Live sub-range views**: [`collections::SubList`] is a window onto a
//!   backing list; structural changes made through the view are applied to the
//!   backing list and the view keeps its own bounds in step
//! * **Decorators**: read-only ([`collections::UnmodifiableList`],
//!   [`collections::UnmodifiableSet`]) and mutual-exclusion
//!   ([`collections::SynchronizedList`], [`collections::SynchronizedSet`])
//!   wrappers that compose around any mutable container
//! * **Immutable snapshots**: cheaply cloneable, shareable
//!   [`collections::ImmutableList`] and [`collections::ImmutableSet`]
//!
//! ## Module Organization
//!
//! * [`collections`] - Containers, views, decorators and the iteration engine
//! * [`common`] - Error taxonomy and argument verification helpers

pub use weft_collections as collections;
pub use weft_common as common;

pub use weft_collections::{fast_list, prelude, unified_set};
