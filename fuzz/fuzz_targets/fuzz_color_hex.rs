#![no_main]
use libfuzzer_sys::fuzz_target;
use printlog::sink::Color;

fuzz_target!(|data: &str| {
    // Palette entries come straight from user config
    if let Some(color) = Color::from_hex(data) {
        assert_eq!(Color::from_hex(&color.to_string()), Some(color));
    }
});
