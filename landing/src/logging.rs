//! Browser console logging through `tracing`.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

/// DEBUG in debug builds, INFO in release builds.
pub fn max_level() -> Level {
    if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    }
}

/// Install panic hook + console subscriber. Call once, before mounting.
pub fn init() {
    console_error_panic_hook::set_once();
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(max_level())
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}
