// Domain layer: core models and the catalog port. No dependencies beyond
// std/serde/chrono.

pub mod model;
pub mod ports;
