use std::sync::Arc;

use raid_rs::metrics::{self, ArrayOp, MetricsSink};
use tracing::{info, warn};

struct TracingSink;

impl MetricsSink for TracingSink {
    fn record_array_op(&self, op: ArrayOp) {
        info!(
            op = ?op.op,
            level = %op.level,
            units = op.units,
            latency_seconds = op.latency_seconds,
            error = op.error,
            "array op"
        );
    }
}

pub fn install() {
    if !metrics::install_metrics_sink(Arc::new(TracingSink)) {
        warn!("metrics sink already installed");
    }
}
