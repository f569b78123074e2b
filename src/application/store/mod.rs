//! State-update stage and selectors

pub mod reducer;
pub mod selectors;

pub use reducer::AppReducer;
pub use selectors::{select_email, select_password, select_pseudo};
