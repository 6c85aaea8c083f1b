//! Menu-driven course registration: people in three roles, capacity-bounded
//! courses, and the eligibility rules tying them together.

pub mod config;
pub mod display;
pub mod model;
pub mod shell;
