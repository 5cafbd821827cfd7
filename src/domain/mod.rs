// Domain layer: feed models and ports (interfaces). No transport or runtime details.

pub mod model;
pub mod ports;
