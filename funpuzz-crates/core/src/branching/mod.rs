//! Contains the strategies which decide the order in which the search assigns variables and tries
//! values.
pub mod value_selection;
pub mod variable_selection;
