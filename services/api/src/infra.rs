use ecoroute::config::NarrativeConfig;
use ecoroute::workflows::shipment::{OfflineNarrator, ShipmentOptimizationService};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Service wired with the offline narrator; every narrative field uses the
/// deterministic fallback text.
pub(crate) fn offline_service(
    narrative: NarrativeConfig,
) -> Arc<ShipmentOptimizationService<OfflineNarrator>> {
    Arc::new(ShipmentOptimizationService::new(
        Arc::new(OfflineNarrator),
        narrative,
    ))
}
