#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = broadcast_truth::start() {
        web_sys::console::error_1(&format!("share widget: {err}").into());
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("broadcast_truth_app runs in the browser; build it for wasm32-unknown-unknown.");
}
