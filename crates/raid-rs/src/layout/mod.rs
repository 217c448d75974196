//! Block placement and redundancy: field arithmetic, parity codecs and per-level stripe layouts.

pub mod block;
pub mod gf;
pub mod parity;
pub mod stripe;
