#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]

mod accessibility;
mod config;
mod content;
mod interactions;
mod logging;
mod navigation;
mod particles;
mod reveal;
mod scroll_top;
mod typing;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frontend;
#[cfg(target_arch = "wasm32")]
mod widgets;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");
}

#[cfg(target_arch = "wasm32")]
fn main() {
    frontend::run();
}
