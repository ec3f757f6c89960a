//! Descriptor parsers for supported build systems

pub mod interpolate;
pub mod maven;

pub use maven::{MavenParser, POM_XML};
