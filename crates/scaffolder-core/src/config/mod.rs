//! Generator configuration shared by products

pub mod generator;

pub use generator::ProjectGenerator;
