use std::collections::BTreeMap;

use crate::callbacks::{CallbackRegistry, InputId, InputSnapshot, OutputId};
use crate::color::ColorMap;
use crate::data::model::LaunchDataset;
use crate::data::options::{ALL_SITES_VALUE, SiteOption, site_options};
use crate::query::pie::success_pie;
use crate::query::scatter::payload_scatter;
use crate::query::spec::ChartSpec;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Payload slider bounds and step (kg), fixed regardless of the dataset.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// The full UI state, independent of rendering.
///
/// The dataset is read-only for the life of the process; the widgets own
/// the selection, and the chart specs are a cache refreshed through the
/// callback registry whenever a watched widget changes.
pub struct AppState {
    /// Dataset loaded once at startup.
    pub dataset: LaunchDataset,

    /// Dropdown entries derived from the dataset.
    pub site_options: Vec<SiteOption>,

    /// Current dropdown value (`ALL` sentinel or a site name).
    pub selected_site: String,

    /// Current payload slider value, `[lo, hi]` in kg.
    pub payload_range: [f64; 2],

    /// Colours for the booster version categories.
    pub color_map: ColorMap,

    /// Latest chart spec per render target.
    charts: BTreeMap<OutputId, ChartSpec>,

    /// Widget → handler wiring.
    registry: CallbackRegistry,

    /// Inputs as of the last dispatch, for change detection.
    last_inputs: InputSnapshot,
}

impl AppState {
    pub fn new(dataset: LaunchDataset) -> Self {
        let registry = build_registry();
        let site_options = site_options(&dataset);
        let color_map = ColorMap::new(&dataset.booster_categories);

        let snapshot = InputSnapshot {
            selected_site: ALL_SITES_VALUE.to_string(),
            payload_range: [dataset.min_payload, dataset.max_payload],
        };
        let charts = registry.dispatch_all(&dataset, &snapshot);

        AppState {
            site_options,
            selected_site: snapshot.selected_site.clone(),
            payload_range: snapshot.payload_range,
            color_map,
            charts,
            registry,
            last_inputs: snapshot,
            dataset,
        }
    }

    /// The current widget values as one atomic snapshot.
    pub fn snapshot(&self) -> InputSnapshot {
        InputSnapshot {
            selected_site: self.selected_site.clone(),
            payload_range: self.payload_range,
        }
    }

    /// Re-run the callbacks watching any input that changed since the last
    /// dispatch. Unchanged inputs leave their outputs untouched.
    pub fn sync_charts(&mut self) {
        let snapshot = self.snapshot();
        let changed = snapshot.changed_since(&self.last_inputs);
        if changed.is_empty() {
            return;
        }
        let updates = self.registry.dispatch(&self.dataset, &snapshot, &changed);
        self.charts.extend(updates);
        self.last_inputs = snapshot;
    }

    pub fn chart(&self, output: OutputId) -> Option<&ChartSpec> {
        self.charts.get(&output)
    }
}

/// The fixed widget → query wiring: the pie watches the dropdown, the
/// scatter watches the dropdown and the slider.
fn build_registry() -> CallbackRegistry {
    let mut registry = CallbackRegistry::new();
    registry.register(
        OutputId::SuccessPie,
        vec![InputId::SiteDropdown],
        Box::new(|dataset, snap| ChartSpec::Pie(success_pie(dataset, &snap.selected_site))),
    );
    registry.register(
        OutputId::PayloadScatter,
        vec![InputId::SiteDropdown, InputId::PayloadSlider],
        Box::new(|dataset, snap| {
            ChartSpec::Scatter(payload_scatter(
                dataset,
                &snap.selected_site,
                snap.payload_range,
            ))
        }),
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset() -> LaunchDataset {
        let rec = |site: &str, payload: f64, outcome: Outcome| LaunchRecord {
            site: site.to_string(),
            payload_mass_kg: payload,
            booster_category: "FT".to_string(),
            outcome,
        };
        LaunchDataset::from_records(vec![
            rec("A", 800.0, Outcome::Success),
            rec("B", 3200.0, Outcome::Failure),
            rec("A", 5600.0, Outcome::Success),
        ])
        .unwrap()
    }

    #[test]
    fn defaults_follow_the_dataset() {
        let state = AppState::new(dataset());
        assert_eq!(state.selected_site, "ALL");
        assert_eq!(state.payload_range, [800.0, 5600.0]);
        assert_eq!(state.site_options.len(), 3);
    }

    #[test]
    fn charts_are_populated_at_startup() {
        let state = AppState::new(dataset());
        assert!(matches!(
            state.chart(OutputId::SuccessPie),
            Some(ChartSpec::Pie(_))
        ));
        assert!(matches!(
            state.chart(OutputId::PayloadScatter),
            Some(ChartSpec::Scatter(_))
        ));
    }

    #[test]
    fn dropdown_change_refreshes_the_pie() {
        let mut state = AppState::new(dataset());
        state.selected_site = "A".to_string();
        state.sync_charts();

        match state.chart(OutputId::SuccessPie) {
            Some(ChartSpec::Pie(spec)) => {
                assert_eq!(spec.title, "Total Select Launches for Site A");
            }
            other => panic!("unexpected chart: {other:?}"),
        }
    }

    #[test]
    fn slider_change_leaves_the_pie_untouched() {
        let mut state = AppState::new(dataset());
        let pie_before = state.chart(OutputId::SuccessPie).cloned();

        state.payload_range = [0.0, 1000.0];
        state.sync_charts();

        assert_eq!(state.chart(OutputId::SuccessPie).cloned(), pie_before);
        match state.chart(OutputId::PayloadScatter) {
            Some(ChartSpec::Scatter(spec)) => assert_eq!(spec.point_count(), 1),
            other => panic!("unexpected chart: {other:?}"),
        }
    }

    #[test]
    fn sync_without_changes_is_a_no_op() {
        let mut state = AppState::new(dataset());
        let pie = state.chart(OutputId::SuccessPie).cloned();
        let scatter = state.chart(OutputId::PayloadScatter).cloned();

        state.sync_charts();

        assert_eq!(state.chart(OutputId::SuccessPie).cloned(), pie);
        assert_eq!(state.chart(OutputId::PayloadScatter).cloned(), scatter);
    }
}
