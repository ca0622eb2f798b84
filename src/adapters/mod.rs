// Adapters layer: concrete transports that deliver replies (console for now, webhook lives outside this crate).

pub mod console;
