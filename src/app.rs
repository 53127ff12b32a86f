//! Application shell and eframe integration.
//!
//! Owns the loaded trajectories and the view state (rotation, zoom,
//! display toggles) and renders the settings panel plus the 3D view.

use eframe::egui;
use nalgebra::Matrix3;

use crate::drawing::{draw_3d_view, ViewOptions};
use crate::trajectory::Trajectory;

pub struct App {
    trajectories: Vec<Trajectory>,
    rotation: Matrix3<f64>,
    zoom: f64,
    show_axes: bool,
    line_width: f32,
    dark_mode: bool,
}

impl App {
    pub fn new(trajectories: Vec<Trajectory>) -> Self {
        Self {
            trajectories,
            rotation: Matrix3::identity(),
            zoom: 1.0,
            show_axes: true,
            line_width: 1.5,
            dark_mode: true,
        }
    }

    fn show_settings(&mut self, ui: &mut egui::Ui) {
        ui.checkbox(&mut self.dark_mode, "Dark mode");
        ui.checkbox(&mut self.show_axes, "Show axes");

        ui.horizontal(|ui| {
            ui.label("Zoom:");
            ui.add(egui::Slider::new(&mut self.zoom, 0.2..=10.0).logarithmic(true));
        });

        ui.horizontal(|ui| {
            ui.label("Line width:");
            ui.add(egui::Slider::new(&mut self.line_width, 0.5..=5.0));
        });

        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui.button("x/y view").clicked() {
                self.rotation = Matrix3::identity();
            }
            if ui.button("x/z view").clicked() {
                self.rotation = Matrix3::new(
                    1.0, 0.0, 0.0,
                    0.0, 0.0, 1.0,
                    0.0, -1.0, 0.0,
                );
            }
        });

        if ui.button("Reset view").clicked() {
            self.rotation = Matrix3::identity();
            self.zoom = 1.0;
        }

        ui.add_space(10.0);
        ui.separator();
        ui.label(format!("{} trajectories", self.trajectories.len()));
        for traj in &self.trajectories {
            ui.label(format!("{}: {} samples", traj.label, traj.len()));
        }
        ui.add_space(5.0);
        ui.label("Drag the view to rotate");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::SidePanel::left("view_controls").show(ctx, |ui| {
            ui.heading("Display Settings");
            ui.separator();
            self.show_settings(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let opts = ViewOptions {
                show_axes: self.show_axes,
                line_width: self.line_width,
            };
            let (rot, zoom) = draw_3d_view(
                ui,
                "trajectories",
                &self.trajectories,
                self.rotation,
                self.zoom,
                available.x,
                available.y,
                &opts,
            );
            self.rotation = rot;
            self.zoom = zoom;
        });
    }
}
