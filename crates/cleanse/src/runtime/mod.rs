//! Runtime module — process lifecycle: boot and the stdin line driver.

pub mod boot;
pub mod run;
