#![no_main]

use libfuzzer_sys::fuzz_target;
use logfilter::config::Setting;
use logfilter::list;

fuzz_target!(|data: &[u8]| {
    // Convert arbitrary bytes to UTF-8 string
    if let Ok(raw) = std::str::from_utf8(data) {
        // Tokenizing must never panic, whatever the list looks like
        for setting in Setting::ALL {
            let _ = list::tokenize(setting, raw);
        }
    }
});
