use folio::config::config;

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    let level = config().log_level;
    if let Err(err) = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
    {
        eprintln!("failed to install log subscriber: {}", err);
    }
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    if let Err(err) = dioxus::logger::init(config().log_level) {
        web_sys::console::error_1(&format!("failed to install logger: {}", err).into());
    }
}

fn main() {
    load_dotenv();
    init_logging();
    tracing::info!(base_path = %config().base_path, "starting folio");
    dioxus::launch(folio::ui::App);
}
