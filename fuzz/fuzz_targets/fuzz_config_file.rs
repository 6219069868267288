#![no_main]
use libfuzzer_sys::fuzz_target;
use printlog::FileConfig;

fuzz_target!(|data: &str| {
    // Must not panic on any config text
    if let Ok(file) = FileConfig::from_toml_str(data) {
        let _ = file.settings();
    }
});
