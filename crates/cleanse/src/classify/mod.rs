/// Per-line classification and extraction of AP session events
///
/// This module turns raw wireless-controller syslog lines into normalized,
/// tab-separated records for the seven recognized session-lifecycle events.
/// Lines carrying any other message code are discarded.
///
/// # Architecture
///
/// - `model.rs`: event kinds, captured fields, output records, errors
/// - `code.rs`: numeric message-code to event-kind routing table
/// - `pattern.rs`: one extraction pattern per event kind
/// - `date.rs`: month table and timestamp normalization
/// - `engine.rs`: the per-line classify-and-format orchestrator
///
/// # Guarantees
///
/// Classification is pure and stateless across invocations: the compiled
/// patterns and code/month tables are immutable, so one `Classifier` may be
/// shared across any number of concurrent callers with no coordination.

pub mod code;
pub mod date;
pub mod engine;
pub mod model;
pub mod pattern;

// Re-export commonly used types
pub use engine::Classifier;
pub use model::{ClassifyError, EventKind, NormalizedRecord};
