// Domain layer: feed and post models plus the ports the publisher talks through.

pub mod model;
pub mod ports;
