#![no_main]
use libfuzzer_sys::fuzz_target;
use printlog::TimestampFormat;

fuzz_target!(|data: &str| {
    // Any pattern must translate and format without panicking; unsupported ones render None
    let format = TimestampFormat::new(data);
    let rendered = format.format(&format.now());
    assert_eq!(rendered.is_some(), format.is_renderable());
});
