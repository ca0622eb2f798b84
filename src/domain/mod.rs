// Domain layer: request/reply models and ports (transport, config). No dependencies on core/config/adapters; codec logic lives in core.

pub mod model;
pub mod ports;
