pub mod bisection;
pub mod common;
pub mod monitor;
pub mod newton;
