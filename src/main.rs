use classifier_app::main::ClassifierApp;
use config::Config;
use eframe::egui;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;

mod classifier_app;
mod config;
mod device_camera;
mod image_classifier;
mod library;
mod startup;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let image_classifier = match startup::load_image_classifier(&config, logger.clone()) {
        Ok(image_classifier) => image_classifier,
        Err(e) => {
            let _ = logger.error(&format!(
                "❌ Gagal memuat model. Pastikan file `{}` ada. ({})",
                config.model.model_path.display(),
                e
            ));
            return Err(e.into());
        }
    };

    let device_camera = startup::device_camera(logger.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };

    let title = config.window_title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Box::new(ClassifierApp::new(
                config,
                logger,
                image_classifier,
                device_camera,
            ))
        }),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
