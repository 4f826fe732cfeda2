#[cfg(target_arch = "wasm32")]
fn main() {
    workforce_frontend::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("workforce-frontend runs in the browser; build it for wasm32 with trunk");
}
