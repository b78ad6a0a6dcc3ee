/// Builds a [`FastList`](crate::FastList) from its elements, like `vec!`.
///
/// ```
/// use weft_collections::{fast_list, prelude::*};
///
/// let list = fast_list![3, 1, 2];
/// assert_eq!(list.len(), 3);
/// ```
#[macro_export]
macro_rules! fast_list {
    () => {
        $crate::FastList::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::FastList::from_vec(vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::FastList::from_vec(vec![$($x),+])
    };
}

/// Element-wise equality between a list type and any other list, `Vec` or array
/// holding the same element type.
macro_rules! impl_list_eq {
    ([$($generics:tt)*] $ty:ty, $item:ty) => {
        impl<$($generics)*, Other> PartialEq<Other> for $ty
        where
            Other: $crate::list_iterable::ListIterable<Item = $item> + ?Sized,
            $item: PartialEq,
        {
            fn eq(&self, other: &Other) -> bool {
                $crate::list_iterate::equals(self, other)
            }
        }

        impl<$($generics)*> PartialEq<Vec<$item>> for $ty
        where
            $item: PartialEq,
        {
            fn eq(&self, other: &Vec<$item>) -> bool {
                use $crate::list_iterable::ListIterable;
                self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
            }
        }

        impl<$($generics)*, const N: usize> PartialEq<[$item; N]> for $ty
        where
            $item: PartialEq,
        {
            fn eq(&self, other: &[$item; N]) -> bool {
                use $crate::list_iterable::ListIterable;
                self.len() == N && self.iter().zip(other.iter()).all(|(a, b)| a == b)
            }
        }
    };
}

/// Set equality against any other set of the same element type.
macro_rules! impl_set_eq {
    ([$($generics:tt)*] $ty:ty, $item:ty) => {
        impl<$($generics)*, Other> PartialEq<Other> for $ty
        where
            Other: $crate::set_iterable::SetIterable<Item = $item> + ?Sized,
            $ty: $crate::set_iterable::SetIterable<Item = $item>,
        {
            fn eq(&self, other: &Other) -> bool {
                $crate::set_iterable::SetIterable::equals(self, other)
            }
        }
    };
}
