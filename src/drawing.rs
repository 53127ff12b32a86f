//! 3D trajectory rendering.
//!
//! One egui_plot Plot hosts every curve. Points are rotated in data space
//! through the view matrix and projected flat onto the plot plane; the
//! plot bounds stay pinned to the axis bound divided by zoom, so the data
//! range never rescales the view.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoint, PlotPoints, Text};
use nalgebra::Matrix3;

use crate::math::{rotate_point, rotation_from_drag};
use crate::trajectory::Trajectory;

/// Symmetric axis bound in meters: every axis spans [-1e7, 1e7]
/// regardless of the data range.
pub const AXIS_BOUND_M: f64 = 1.0e7;

const CURVE_COLORS: [egui::Color32; 8] = [
    egui::Color32::from_rgb(255, 99, 99),
    egui::Color32::from_rgb(99, 200, 99),
    egui::Color32::from_rgb(99, 150, 255),
    egui::Color32::from_rgb(255, 200, 60),
    egui::Color32::from_rgb(200, 99, 255),
    egui::Color32::from_rgb(60, 220, 220),
    egui::Color32::from_rgb(255, 150, 60),
    egui::Color32::from_rgb(160, 120, 255),
];

pub fn curve_color(i: usize) -> egui::Color32 {
    CURVE_COLORS[i % CURVE_COLORS.len()]
}

pub struct ViewOptions {
    pub show_axes: bool,
    pub line_width: f32,
}

/// Projects a trajectory into the plot plane under the view rotation.
pub fn project_curve(traj: &Trajectory, rot: &Matrix3<f64>) -> Vec<[f64; 2]> {
    traj.x
        .iter()
        .zip(&traj.y)
        .zip(&traj.z)
        .map(|((&x, &y), &z)| {
            let (rx, ry, _) = rotate_point(x, y, z, rot);
            [rx, ry]
        })
        .collect()
}

pub fn draw_3d_view(
    ui: &mut egui::Ui,
    id: &str,
    trajectories: &[Trajectory],
    mut rotation: Matrix3<f64>,
    mut zoom: f64,
    width: f32,
    height: f32,
    opts: &ViewOptions,
) -> (Matrix3<f64>, f64) {
    let margin = AXIS_BOUND_M / zoom;

    let plot = Plot::new(id)
        .data_aspect(1.0)
        .width(width)
        .height(height)
        .show_axes(false)
        .show_grid(true)
        .show_x(false)
        .show_y(false)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .cursor_color(egui::Color32::TRANSPARENT);

    let response = plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [-margin, -margin],
            [margin, margin],
        ));

        if opts.show_axes {
            let axes: [([f64; 3], &str, egui::Color32); 3] = [
                ([AXIS_BOUND_M, 0.0, 0.0], "x", egui::Color32::from_rgb(255, 100, 100)),
                ([0.0, AXIS_BOUND_M, 0.0], "y", egui::Color32::from_rgb(100, 220, 100)),
                ([0.0, 0.0, AXIS_BOUND_M], "z", egui::Color32::from_rgb(100, 100, 255)),
            ];
            for ([ax, ay, az], label, color) in axes {
                let (px, py, _) = rotate_point(ax, ay, az, &rotation);
                let (nx, ny, _) = rotate_point(-ax, -ay, -az, &rotation);
                plot_ui.line(
                    Line::new("", PlotPoints::new(vec![[nx, ny], [px, py]]))
                        .color(color)
                        .width(1.5),
                );
                let (lx, ly, _) = rotate_point(ax * 1.08, ay * 1.08, az * 1.08, &rotation);
                plot_ui.text(
                    Text::new("", PlotPoint::new(lx, ly), label).color(color),
                );
            }
        }

        for (i, traj) in trajectories.iter().enumerate() {
            plot_ui.line(
                Line::new(traj.label.clone(), PlotPoints::new(project_curve(traj, &rotation)))
                    .color(curve_color(i))
                    .width(opts.line_width),
            );
        }
    });

    if response.response.dragged() && !response.response.drag_started() {
        let drag = response.response.drag_delta();
        let delta_rot = rotation_from_drag(drag.x as f64 * 0.01, drag.y as f64 * 0.01);
        rotation = delta_rot * rotation;
    }

    if response.response.hovered() {
        let scroll = ui.input(|i| i.raw_scroll_delta.y);
        if scroll != 0.0 {
            let factor = 1.0 + scroll as f64 * 0.001;
            zoom = (zoom * factor).clamp(0.2, 10.0);
        }
        if let Some(touch) = ui.input(|i| i.multi_touch()) {
            zoom = (zoom * touch.zoom_delta as f64).clamp(0.2, 10.0);
        }
    }

    (rotation, zoom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_trajectory() -> Trajectory {
        Trajectory {
            label: "sat0".to_string(),
            x: vec![1.0, 4.0],
            y: vec![2.0, 5.0],
            z: vec![3.0, 6.0],
        }
    }

    #[test]
    fn axis_bound_is_ten_thousand_km() {
        assert_eq!(AXIS_BOUND_M, 1.0e7);
    }

    #[test]
    fn identity_projection_drops_z() {
        let pts = project_curve(&sample_trajectory(), &Matrix3::identity());
        assert_eq!(pts, vec![[1.0, 2.0], [4.0, 5.0]]);
    }

    #[test]
    fn projection_preserves_sample_order() {
        let rot = rotation_from_drag(0.4, 0.9);
        let traj = sample_trajectory();
        let pts = project_curve(&traj, &rot);
        assert_eq!(pts.len(), traj.len());
        let (rx, ry, _) = rotate_point(traj.x[1], traj.y[1], traj.z[1], &rot);
        assert_relative_eq!(pts[1][0], rx);
        assert_relative_eq!(pts[1][1], ry);
    }

    #[test]
    fn colors_cycle_past_the_palette() {
        assert_eq!(curve_color(0), curve_color(CURVE_COLORS.len()));
        assert_ne!(curve_color(0), curve_color(1));
    }
}
