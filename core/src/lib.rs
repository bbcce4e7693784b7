pub mod algo;
pub mod data;
pub mod scoring;
pub mod solvers;
pub mod structs;
mod util;
