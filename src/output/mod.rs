pub mod batch;
pub mod dimacs;
