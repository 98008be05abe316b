//! Vendor-agnostic extraction metrics via a pluggable sink.
//!
//! The engine reports every extraction and every policy document it fails
//! to decode. Nothing is reported until a sink is installed:
//!
//! ```rust
//! use arnlink_core::metrics::{ExtractionStats, MetricsSink};
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU64, Ordering};
//!
//! struct LinkCounter {
//!     links: AtomicU64,
//! }
//!
//! impl MetricsSink for LinkCounter {
//!     fn on_extraction(&self, stats: &ExtractionStats) {
//!         self.links.fetch_add(stats.links as u64, Ordering::Relaxed);
//!     }
//! }
//!
//! arnlink_core::metrics::set_sink(Arc::new(LinkCounter { links: AtomicU64::new(0) }));
//! ```

use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use strum_macros::Display;
use tracing::warn;

/// Which entry point produced the links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
pub enum ExtractionKind {
    /// Principals and resources named in an identity policy.
    IdentityPolicy,
    /// Service principals granted access by a resource-based policy.
    ResourcePolicy,
    /// An asynchronous delivery destination.
    Destination,
}

/// Snapshot of a single extraction, passed to [`MetricsSink::on_extraction`].
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionStats {
    pub kind: ExtractionKind,
    /// Wall-clock time spent extracting
    pub duration: Duration,
    /// Number of statements walked, 0 for destinations
    pub statements: usize,
    /// Number of links produced
    pub links: usize,
}

/// A raw policy document that could not be decoded or parsed.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeFailureStats {
    pub error: String,
}

/// Consumer of extraction metrics.
///
/// Called synchronously on the extraction path from whichever thread is
/// extracting, so implementations must be cheap and thread-safe.
pub trait MetricsSink: Send + Sync {
    fn on_extraction(&self, stats: &ExtractionStats);

    fn on_decode_failure(&self, _stats: &DecodeFailureStats) {}
}

static SINK: OnceLock<Arc<dyn MetricsSink>> = OnceLock::new();

/// Install the global metrics sink.
///
/// The sink can be set once; call this at startup before the first
/// extraction. Later calls are ignored with a warning.
pub fn set_sink(sink: Arc<dyn MetricsSink>) {
    if SINK.set(sink).is_err() {
        warn!(
            "Metrics sink was already initialized. Ignoring subsequent set_sink call. Set the sink before the first extraction."
        );
    }
}

pub(crate) fn record_extraction(
    kind: ExtractionKind,
    duration: Duration,
    statements: usize,
    links: usize,
) {
    if let Some(sink) = SINK.get() {
        sink.on_extraction(&ExtractionStats {
            kind,
            duration,
            statements,
            links,
        });
    }
}

pub(crate) fn record_decode_failure(error: String) {
    if let Some(sink) = SINK.get() {
        sink.on_decode_failure(&DecodeFailureStats { error });
    }
}
