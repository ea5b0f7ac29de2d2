//! Output rendering

pub mod human;

pub use human::*;
