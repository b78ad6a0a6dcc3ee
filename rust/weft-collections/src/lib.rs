//! Extended collections: ordered lists and hash sets with a rich functional
//! iteration API, live sub-range views, and read-only and synchronized
//! decorators.
//!
//! The read API lives on two capability traits, [`ListIterable`] and
//! [`SetIterable`], whose default methods are shared by every container, view
//! and decorator. Mutation is layered on top through
//! [`OrderedMutableContainer`], [`MutableList`] and [`MutableSet`].

#[macro_use]
mod macros;

pub mod array_stack;
pub mod cursor;
pub mod fast_list;
pub mod hashing;
pub mod immutable_list;
pub mod immutable_set;
pub mod iterate;
pub mod list_iterable;
pub mod list_iterate;
pub mod multimap;
pub mod mutable_list;
pub mod parallel;
pub mod partition;
pub mod set_iterable;
pub mod sub_list;
pub mod synchronized;
pub mod unified_set;
pub mod unmodifiable_list;
pub mod unmodifiable_set;

pub use array_stack::ArrayStack;
pub use cursor::{BidirectionalCursor, ListCursor};
pub use fast_list::FastList;
pub use immutable_list::ImmutableList;
pub use immutable_set::ImmutableSet;
pub use list_iterable::{ListIter, ListIterable};
pub use multimap::{ListMultimap, Multimap, SetMultimap};
pub use mutable_list::{MutableList, OrderedMutableContainer};
pub use parallel::{ParallelListIterable, ParallelSetIterable};
pub use partition::{Partition, PartitionList, PartitionSet};
pub use set_iterable::{MutableSet, SetIterable};
pub use sub_list::{SubList, SubListCursor};
pub use synchronized::{SynchronizedList, SynchronizedSet};
pub use unified_set::UnifiedSet;
pub use unmodifiable_list::UnmodifiableList;
pub use unmodifiable_set::UnmodifiableSet;

/// The capability traits, for glob import.
pub mod prelude {
    pub use crate::cursor::BidirectionalCursor;
    pub use crate::list_iterable::ListIterable;
    pub use crate::mutable_list::{MutableList, OrderedMutableContainer};
    pub use crate::set_iterable::{MutableSet, SetIterable};
}

#[cfg(test)]
mod tests;
