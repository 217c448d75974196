//! Retention layer: disks, failure sets, the array aggregate and its persisted form.

pub mod array;
pub mod disk;
pub mod document;
pub mod failure;
