// Domain layer: wire models, render instructions and ports (collaborator interfaces).

pub mod model;
pub mod ports;
pub mod render;
