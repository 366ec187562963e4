//! Interactive preview of the composed demo road.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use eframe::egui::{self, DragValue};
use egui_plot::{Legend, Line, LineStyle, PlotPoints, Points};
use road_plan::{compose_path, demo_road, ComposerConfig};

fn main() -> Result<(), eframe::Error> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "RoadPlot",
        options,
        Box::new(|_cc| Box::<PlotRoad>::default()),
    )
}

struct PlotRoad {
    s_init: f64,
    plot_step: f64,
    show_markers: bool,
}

impl Default for PlotRoad {
    fn default() -> Self {
        Self {
            s_init: 1.0,
            plot_step: 1.0,
            show_markers: true,
        }
    }
}

impl eframe::App for PlotRoad {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        egui::SidePanel::left("options").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.add(
                    DragValue::new(&mut self.s_init)
                        .clamp_range(0.0..=100.0)
                        .speed(1.0),
                );
                ui.label("s_init")
                    .on_hover_text("length of the leading straight approach run");
            });

            ui.horizontal(|ui| {
                ui.add(
                    DragValue::new(&mut self.plot_step)
                        .clamp_range(0.1..=20.0)
                        .speed(0.1),
                );
                ui.label("plot_step")
                    .on_hover_text("arc-length sampling step for curved segments");
            });

            ui.checkbox(&mut self.show_markers, "Show samples");
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let config = ComposerConfig {
                s_init: self.s_init,
                plot_step: self.plot_step,
            };

            egui_plot::Plot::new("road")
                .data_aspect(1.0)
                .legend(Legend::default())
                .show(ui, |plot_ui| match compose_path(&demo_road(), &config) {
                    Ok(composed) => {
                        let xy: Vec<[f64; 2]> =
                            composed.samples.iter().map(|p| [p.x, p.y]).collect();
                        plot_ui.line(
                            Line::new(PlotPoints::new(xy.clone()))
                                .name("centerline")
                                .style(LineStyle::dashed_dense()),
                        );
                        if self.show_markers {
                            plot_ui.points(Points::new(xy).name("samples").radius(2.0));
                        }
                    }
                    Err(err) => {
                        log::error!("compose failed: {err}");
                    }
                });
        });
    }
}
