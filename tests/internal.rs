//! Tests for printlog's own diagnostic channel.

use printlog::{FileConfig, internal};

#[test]
fn silent_until_initialized_then_stays_initialized() {
    assert!(!internal::is_initialized());
    internal::warning("dropped before init");

    let file = FileConfig::from_toml_str("[terminal]\ncolors = false\n").unwrap();
    internal::init_with_config(&file);
    assert!(internal::is_initialized());

    // A second init is a no-op
    internal::init();
    assert!(internal::is_initialized());
    internal::debug("ready");
}
