use eframe::egui::{Align2, Context, Vec2, Window};

use crate::color::{cmyk_code, hex_code, rgb_code, Rgb};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyFormat {
    Hex,
    Rgb,
    Cmyk,
}

impl CopyFormat {
    pub fn label(&self) -> &'static str {
        match self {
            CopyFormat::Hex => "HEX",
            CopyFormat::Rgb => "RGB",
            CopyFormat::Cmyk => "CMYK",
        }
    }

    /// The bare code string placed on the clipboard, without the display
    /// label.
    pub fn code(&self, color: Rgb) -> String {
        match self {
            CopyFormat::Hex => hex_code(color),
            CopyFormat::Rgb => rgb_code(color),
            CopyFormat::Cmyk => cmyk_code(color),
        }
    }
}

/// State of the open copy-choice window. `None` on the shell means idle.
#[derive(Default)]
pub struct CopyDialog {
    pub choice: Option<CopyFormat>,
}

pub enum CopyDialogOutcome {
    Open,
    Cancelled,
    Confirmed(Option<CopyFormat>),
}

pub fn copy_dialog(ctx: &Context, data: &mut CopyDialog) -> CopyDialogOutcome {
    let mut outcome = CopyDialogOutcome::Open;

    Window::new("Copy Color Code")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.radio_value(&mut data.choice, Some(CopyFormat::Hex), "HEX");
            ui.radio_value(&mut data.choice, Some(CopyFormat::Rgb), "RGB");
            ui.radio_value(&mut data.choice, Some(CopyFormat::Cmyk), "CMYK");

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Copy").clicked() {
                    outcome = CopyDialogOutcome::Confirmed(data.choice);
                }
                if ui.button("Cancel").clicked() {
                    outcome = CopyDialogOutcome::Cancelled;
                }
            });
        });

    outcome
}
