//! Binary entrypoint for the browser-hosted showcase.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    bootstrap_showcase::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "The showcase runs in the browser. Build `bootstrap_showcase_app` for wasm32 with the `csr` feature, or render it with the `ssr` feature."
    );
}
