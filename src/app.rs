use eframe::egui;

use crate::callbacks::OutputId;
use crate::query::spec::ChartSpec;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDeckApp {
    pub state: AppState,
}

impl LaunchDeckApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for LaunchDeckApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: selection widgets ----
        egui::SidePanel::left("controls_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: matching launch records ----
        egui::TopBottomPanel::bottom("records_panel")
            .resizable(true)
            .default_height(170.0)
            .show(ctx, |ui| {
                egui::CollapsingHeader::new("Launch records")
                    .default_open(false)
                    .show(ui, |ui| {
                        panels::records_table(ui, &self.state);
                    });
            });

        // Widgets may have moved above; refresh dependent charts before
        // drawing them.
        self.state.sync_charts();

        // ---- Central panel: the two charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let chart_height = (ui.available_height() / 2.0 - 28.0).max(120.0);

            if let Some(ChartSpec::Pie(spec)) = self.state.chart(OutputId::SuccessPie) {
                plot::pie_chart(ui, spec, chart_height);
            }
            ui.separator();
            if let Some(ChartSpec::Scatter(spec)) = self.state.chart(OutputId::PayloadScatter) {
                plot::scatter_chart(ui, spec, &self.state.color_map, chart_height);
            }
        });
    }
}
