pub mod args;
pub mod batch;
pub mod compare;
pub mod solve;
