use crate::{FastList, UnifiedSet};

/// The two halves of a partitioning operation, each in encounter order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition<C> {
    pub selected: C,
    pub rejected: C,
}

pub type PartitionList<T> = Partition<FastList<T>>;

pub type PartitionSet<T> = Partition<UnifiedSet<T>>;

impl<C> Partition<C> {
    pub fn selected(&self) -> &C {
        &self.selected
    }

    pub fn rejected(&self) -> &C {
        &self.rejected
    }

    pub fn into_parts(self) -> (C, C) {
        (self.selected, self.rejected)
    }
}
