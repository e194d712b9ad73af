pub mod cli;
pub mod core;
pub mod numerical_methods;
