use ddd_conferences_app::App;
use leptos::*;
use wasm_bindgen::JsCast;

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    let Some(app_container) = document()
        .get_element_by_id("app")
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
    else {
        log::error!("Missing app container element");
        return;
    };
    mount_to(app_container, || view! { <App /> });
}
