#![no_main]
use libfuzzer_sys::fuzz_target;
use printlog::Category;

fuzz_target!(|data: &str| {
    if let Ok(category) = data.parse::<Category>() {
        assert_eq!(category.key().parse::<Category>().ok(), Some(category));
        assert!(!category.label().is_empty());
    }
});
