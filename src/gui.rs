use crate::libshindan::hantei::Verdict;
use crate::libshindan::session::QuizSession;
use crate::Error;
use eframe::egui;
use eframe::egui::Color32;
use eframe::egui::ProgressBar;
use eframe::egui::RichText;
use eframe::egui::Ui;
use log::{debug, warn};

const PINK: Color32 = Color32::from_rgb(0xff, 0x6b, 0x9d);
const GREEN: Color32 = Color32::from_rgb(0x64, 0xc8, 0x96);

struct GuiState {
    session: QuizSession,
}

impl GuiState {
    fn draw_question_frame(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("💔 Is He Cheating?").size(32.0).color(PINK).strong());
        ui.label("Answer honestly...");
        ui.add_space(16.0);

        ui.add(ProgressBar::new(self.session.progress_fraction()).show_percentage());
        ui.label(format!(
            "Question {} of {}",
            self.session.question_number(),
            self.session.bank().count()
        ));
        ui.add_space(16.0);

        let Some(text) = self.session.current_question().map(|q| q.text) else {
            return;
        };
        ui.label(RichText::new(text).size(18.0));
        ui.add_space(24.0);

        let mut answer = None;
        ui.horizontal(|ui| {
            if ui.button(RichText::new("😭 Yes").size(16.0).color(PINK)).clicked() {
                answer = Some(true);
            }
            if ui.button(RichText::new("💚 No").size(16.0).color(GREEN)).clicked() {
                answer = Some(false);
            }
        });

        if let Some(value) = answer {
            debug!("[GUI] Answered {}", value);
            if let Err(err) = self.session.submit_answer(value) {
                warn!("[GUI] {}", err);
            }
        }
    }

    fn draw_result_frame(&mut self, ui: &mut Ui, verdict: Verdict) {
        let info = verdict.info();
        let (r, g, b) = info.accent;
        let headline_colour = if info.alarming { PINK } else { GREEN };

        ui.label(RichText::new(info.emoji).size(60.0));
        ui.label(RichText::new(info.message).size(28.0).color(headline_colour).strong());
        ui.add_space(16.0);
        ui.label("Suspicion Score");
        ui.label(
            RichText::new(format!("{}%", verdict.score))
                .size(48.0)
                .color(Color32::from_rgb(r, g, b))
                .strong(),
        );
        ui.add_space(16.0);
        ui.label(info.advice);
        ui.add_space(24.0);

        if ui.button(RichText::new("🔄 Start Over").size(16.0)).clicked() {
            debug!("[GUI] Starting over");
            self.session.reset();
        }
    }
}

impl eframe::App for GuiState {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| match self.session.verdict() {
                Some(verdict) => self.draw_result_frame(ui, verdict),
                None => self.draw_question_frame(ui),
            });
        });
    }
}

pub fn init_gui(session: QuizSession) -> Result<(), Error> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 420.0])
            .with_min_inner_size([320.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "浮気診断",
        native_options,
        Box::new(move |_cc| Ok(Box::new(GuiState { session }))),
    )?;

    Ok(())
}
