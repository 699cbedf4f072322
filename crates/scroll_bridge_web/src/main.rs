// Trunk builds this binary for the page. On native targets there is nothing
// to run.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    scroll_bridge_web::start();
}
