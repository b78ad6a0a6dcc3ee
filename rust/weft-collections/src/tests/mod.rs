mod list_iterate_tests;
#[cfg(feature = "serde")]
mod serde_tests;
mod set_tests;
mod sub_list_tests;
