use egui::Ui;

pub fn show(ui: &mut Ui, text: &str) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.add(egui::Label::new(text).wrap());
        });
}
