//! Demix Studio - dynamic mix creation GUI

use demix_studio::ui::DemixApp;

fn title(_app: &DemixApp) -> String {
    String::from("demix-studio - Dynamic Mixes")
}

fn main() -> iced::Result {
    // Initialize logger - set RUST_LOG=debug for verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    log::info!("demix-studio starting up");

    iced::application(DemixApp::new, DemixApp::update, DemixApp::view)
        .title(title)
        .window_size(iced::Size::new(900.0, 640.0))
        .theme(DemixApp::theme)
        .run()
}
