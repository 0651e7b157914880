use std::io::Write;
use std::sync::Mutex;

use crate::metrics::snapshot::LfuMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for LFU metrics snapshots.
///
/// Writes in the Prometheus text exposition format so the output can be
/// scraped by Prometheus or forwarded to an OpenTelemetry collector.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send + Sync> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send + Sync> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn write_counter(&self, suffix: &str, value: u64) {
        self.write_metric("counter", suffix, value);
    }

    fn write_gauge(&self, suffix: &str, value: usize) {
        self.write_metric("gauge", suffix, value as u64);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write + Send + Sync> MetricsExporter<LfuMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &LfuMetricsSnapshot) {
        self.write_counter("access_calls_total", snapshot.access_calls);
        self.write_counter("access_hits_total", snapshot.access_hits);
        self.write_counter("access_misses_total", snapshot.access_misses);
        self.write_counter("insert_calls_total", snapshot.insert_calls);
        self.write_counter("insert_new_total", snapshot.insert_new);
        self.write_counter("insert_duplicates_total", snapshot.insert_duplicates);
        self.write_counter("evict_calls_total", snapshot.evict_calls);
        self.write_counter("evicted_entries_total", snapshot.evicted_entries);
        self.write_counter("pop_lfu_calls_total", snapshot.pop_lfu_calls);
        self.write_counter("pop_lfu_found_total", snapshot.pop_lfu_found);
        self.write_counter("remove_calls_total", snapshot.remove_calls);
        self.write_counter("remove_found_total", snapshot.remove_found);
        self.write_counter("candidate_calls_total", snapshot.candidate_calls);
        self.write_counter("candidate_found_total", snapshot.candidate_found);
        self.write_counter("frequency_calls_total", snapshot.frequency_calls);
        self.write_counter("frequency_found_total", snapshot.frequency_found);
        self.write_counter("clear_calls_total", snapshot.clear_calls);
        self.write_gauge("entries", snapshot.len);
        self.write_gauge("buckets", snapshot.bucket_count);
        self.write_gauge("capacity", snapshot.capacity);
    }
}
