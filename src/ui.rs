// src/ui.rs
use egui;

use sight_and_light::VisibilityMesh;

pub fn build_ui(ctx: &egui::Context, mesh: &VisibilityMesh) {
    egui::Window::new("Light")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .resizable(false)
        .show(ctx, |ui| {
            ui.vertical(|ui| {
                let center = mesh.center();
                ui.label(format!("Light: ({:.3}, {:.3})", center.x, center.y));
                ui.label(format!("Rays: {}", mesh.ray_count()));
                ui.label(format!("Triangles: {}", mesh.triangle_count()));
                ui.label(format!("Lit area: {:.3}", mesh.area()));
                ui.separator();
                ui.label("Mouse: Move light");
                ui.label("Escape: Quit");
            });
        });
}
