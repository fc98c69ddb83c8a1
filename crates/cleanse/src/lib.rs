// Domain-driven module structure for the AP log cleanser.

// Core pipeline
pub mod classify;

// Domain modules
pub mod conf;
pub mod runtime;
