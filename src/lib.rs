pub mod app;
pub mod code_utils;
pub mod data;
pub mod i18n;
pub mod model;
pub mod ui;
pub mod view_models;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub use app::LearnApp;

/// Entrada web: monta la app sobre el canvas `the_canvas_id` con `localStorage`.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Info).ok();

    let content = data::ContentStore::embedded()
        .map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))?;
    let app = LearnApp::new(content, Box::new(app::progress::LocalStorage::new()));

    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("the_canvas_id"))
        .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        .ok_or_else(|| wasm_bindgen::JsValue::from_str("canvas the_canvas_id not found"))?;

    wasm_bindgen_futures::spawn_local(async move {
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::new(app))),
            )
            .await;
        if let Err(err) = result {
            log::error!("failed to start web app: {err:?}");
        }
    });
    Ok(())
}
