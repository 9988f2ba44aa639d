// Domain layer: cycle models, phase arithmetic and the ports the data layer implements.

pub mod fertility;
pub mod model;
pub mod ports;
