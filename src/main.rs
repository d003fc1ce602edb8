use care_quiz::QuizApp;
use care_quiz::config::AppConfig;

fn main() -> eframe::Result<()> {
    pretty_env_logger::init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("{e}; using default settings");
        AppConfig::default()
    });
    log::info!("starting with language {:?}", config.language);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_title("Pflege Quiz"),
        ..Default::default()
    };
    eframe::run_native(
        "Pflege Quiz",
        options,
        Box::new(move |cc| Ok(Box::new(QuizApp::from_creation_context(cc, config)))),
    )
}
