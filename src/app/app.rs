use eframe::{App as EguiApp, Frame};
use eframe::egui::{CentralPanel, Context, TextEdit, Ui, ViewportCommand};
use log::{error, info};
use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::fs;
use std::io;
use std::path::Path;
use crate::app::copy_dialog::*;
use crate::color::{display_text, Rgb};
use crate::constants::*;

pub struct App {
    selected_color: Option<Rgb>,
    picker_color: [u8; 3],
    output: String,
    copy_dialog: Option<CopyDialog>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            selected_color: None,
            picker_color: [255, 255, 255],
            output: String::new(),
            copy_dialog: None,
        }
    }
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        CentralPanel::default().show(ctx, |ui| {
            self.panel_content(ui);
        });

        self.copy_dialog_content(ctx);
    }
}

impl App {
    /// Overwrites the selected color and re-renders the display with all
    /// three representations of it.
    pub fn update_color_output(&mut self, color: Rgb) {
        self.selected_color = Some(color);
        self.output = display_text(color);
    }

    pub fn save_color_code(&self, path: &Path) -> io::Result<()> {
        fs::write(path, &self.output)
    }

    pub fn load_color_code(&mut self, path: &Path) -> io::Result<()> {
        // Read fully before touching the display so a failed load leaves
        // the previous content in place.
        let content = fs::read_to_string(path)?;
        self.output = content;
        Ok(())
    }

    /// The string a confirmed copy places on the clipboard, or `None`
    /// while no color has been picked yet.
    pub fn clipboard_text(&self, format: CopyFormat) -> Option<String> {
        self.selected_color.map(|color| format.code(color))
    }

    pub fn panel_content(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.heading("Color Code Converter");
        });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Choose color:");
            if ui.color_edit_button_srgb(&mut self.picker_color).changed() {
                let color = Rgb::from(self.picker_color);
                info!("picked {:?}", color);
                self.update_color_output(color);
            }
        });

        ui.add(
            TextEdit::multiline(&mut self.output)
                .desired_rows(GUI_OUTPUT_ROWS)
                .desired_width(f32::INFINITY),
        );

        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.output.clear();
            }
            if ui.button("Copy").clicked() && self.selected_color.is_some() {
                self.copy_dialog = Some(CopyDialog::default());
            }
            if ui.button("Load").clicked() {
                self.on_load();
            }
            if ui.button("Save").clicked() {
                self.on_save();
            }
            if ui.button("Exit").clicked() {
                ui.ctx().send_viewport_cmd(ViewportCommand::Close);
            }
        });
    }

    fn copy_dialog_content(&mut self, ctx: &Context) {
        let Some(data) = &mut self.copy_dialog else {
            return;
        };

        match copy_dialog(ctx, data) {
            CopyDialogOutcome::Open => {}
            CopyDialogOutcome::Cancelled | CopyDialogOutcome::Confirmed(None) => {
                self.copy_dialog = None;
            }
            CopyDialogOutcome::Confirmed(Some(format)) => {
                if let Some(text) = self.clipboard_text(format) {
                    ctx.copy_text(text);
                    info!("copied {} code to clipboard", format.label());
                    MessageDialog::new()
                        .set_level(MessageLevel::Info)
                        .set_title("Copied")
                        .set_description(&format!("{} code copied to clipboard.", format.label()))
                        .show();
                }
                self.copy_dialog = None;
            }
        }
    }

    fn on_load(&mut self) {
        if let Some(path) = FileDialog::new()
            .add_filter("Text Files", &["txt"])
            .pick_file()
        {
            if let Err(e) = self.load_color_code(&path) {
                error!("failed to load {}: {}", path.display(), e);
                MessageDialog::new()
                    .set_level(MessageLevel::Error)
                    .set_title("Load Error")
                    .set_description(&format!("Error loading the color code: {}", e))
                    .show();
            }
        }
    }

    fn on_save(&mut self) {
        if let Some(path) = FileDialog::new()
            .add_filter("Text Files", &["txt"])
            .set_file_name("color_code.txt")
            .save_file()
        {
            if let Err(e) = self.save_color_code(&path) {
                error!("failed to save {}: {}", path.display(), e);
                MessageDialog::new()
                    .set_level(MessageLevel::Error)
                    .set_title("Save Error")
                    .set_description(&format!("Error saving the color code: {}", e))
                    .show();
            }
        }
    }
}
