mod app;
mod export;
mod upload;
mod utils;

use app::ExamUploader;
use eframe::CreationContext;
use upload::GraderConfig;

fn main() -> Result<(), eframe::Error> {
    let config = GraderConfig::from_env();

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([700.0, 640.0])
            .with_min_inner_size([500.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Exam Sheet Uploader",
        options,
        Box::new(|cc: &CreationContext| Box::new(ExamUploader::new(cc, config))),
    )
}
