//! WASM entry point for Leptos CSR app

use leptos::mount::mount_to_body;
use tmdb_films_web::App;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();

    mount_to_body(App);
}
