use std::collections::BTreeMap;

use crate::data::model::LaunchDataset;
use crate::query::spec::ChartSpec;

// ---------------------------------------------------------------------------
// Reactive dispatch: watched inputs → chart-producing handlers
// ---------------------------------------------------------------------------

/// A widget whose value can trigger callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum InputId {
    SiteDropdown,
    PayloadSlider,
}

/// A render target fed by exactly one callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum OutputId {
    SuccessPie,
    PayloadScatter,
}

/// The full widget state at one instant. Handlers always receive a complete
/// snapshot, never a partial delta.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSnapshot {
    /// Dropdown value: the `ALL` sentinel or a site name.
    pub selected_site: String,
    /// Payload slider value, `[lo, hi]` in kg.
    pub payload_range: [f64; 2],
}

impl InputSnapshot {
    /// Which inputs differ from `prev`.
    pub fn changed_since(&self, prev: &InputSnapshot) -> Vec<InputId> {
        let mut changed = Vec::new();
        if self.selected_site != prev.selected_site {
            changed.push(InputId::SiteDropdown);
        }
        if self.payload_range != prev.payload_range {
            changed.push(InputId::PayloadSlider);
        }
        changed
    }
}

type Handler = Box<dyn Fn(&LaunchDataset, &InputSnapshot) -> ChartSpec>;

struct Callback {
    output: OutputId,
    watches: Vec<InputId>,
    handler: Handler,
}

/// Registry of chart callbacks. Each entry declares the inputs it watches;
/// [`CallbackRegistry::dispatch`] runs every entry watching at least one of
/// the changed inputs, synchronously, in registration order. Outputs are
/// independent of each other, so no cross-output ordering is promised.
#[derive(Default)]
pub struct CallbackRegistry {
    callbacks: Vec<Callback>,
}

impl CallbackRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, output: OutputId, watches: Vec<InputId>, handler: Handler) {
        self.callbacks.push(Callback {
            output,
            watches,
            handler,
        });
    }

    /// Recompute the outputs whose watched inputs appear in `changed`.
    pub fn dispatch(
        &self,
        dataset: &LaunchDataset,
        snapshot: &InputSnapshot,
        changed: &[InputId],
    ) -> BTreeMap<OutputId, ChartSpec> {
        self.callbacks
            .iter()
            .filter(|cb| cb.watches.iter().any(|w| changed.contains(w)))
            .map(|cb| (cb.output, (cb.handler)(dataset, snapshot)))
            .collect()
    }

    /// Recompute every output (initial population at startup).
    pub fn dispatch_all(
        &self,
        dataset: &LaunchDataset,
        snapshot: &InputSnapshot,
    ) -> BTreeMap<OutputId, ChartSpec> {
        self.callbacks
            .iter()
            .map(|cb| (cb.output, (cb.handler)(dataset, snapshot)))
            .collect()
    }
}
