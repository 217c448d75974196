//! Traits shared by every stripe layout.

pub mod restore;
pub mod stripe;
