//! Domain-level frontend features and their shared logic. Routes import these
//! modules to keep view code focused while request handling stays in the
//! feature area.

pub mod verification;
