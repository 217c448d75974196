use std::sync::{Arc, OnceLock};

use crate::config::RaidLevel;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpType {
    Write,
    Fail,
    Recover,
}

/// ArrayOp describes one completed (or rejected) array operation.
#[derive(Copy, Clone, Debug)]
pub struct ArrayOp {
    pub op: OpType,
    pub level: RaidLevel,
    /// Symbols written, disks failed, or blocks rebuilt, depending on `op`.
    pub units: u64,
    pub latency_seconds: f64,
    pub error: bool,
}

pub trait MetricsSink: Send + Sync + 'static {
    fn record_array_op(&self, op: ArrayOp);
}

static METRICS_SINK: OnceLock<Arc<dyn MetricsSink>> = OnceLock::new();

pub fn install_metrics_sink(sink: Arc<dyn MetricsSink>) -> bool {
    METRICS_SINK.set(sink).is_ok()
}

pub fn is_enabled() -> bool {
    METRICS_SINK.get().is_some()
}

pub fn record_array_op(op: ArrayOp) {
    if let Some(sink) = METRICS_SINK.get() {
        sink.record_array_op(op);
    }
}
