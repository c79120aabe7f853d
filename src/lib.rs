pub mod accordion;
pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod context;
pub mod diagnostics;
pub mod motion;
pub mod overlay;
pub mod relay;
pub mod reveal;
pub mod section;
pub mod telemetry;
pub mod visibility;

#[cfg(target_arch = "wasm32")]
mod browser;
#[cfg(target_arch = "wasm32")]
pub mod frontend;

#[cfg(not(target_arch = "wasm32"))]
pub mod server;
