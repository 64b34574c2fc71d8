#![no_main]

use libfuzzer_sys::fuzz_target;
use shiki_setup::shiki_setup;

fuzz_target!(|data: &[u8]| {
    let Ok(html) = std::str::from_utf8(data) else {
        return;
    };

    let config = shiki_setup();
    let once = config.postprocess(html);

    // The rewrite only ever inserts; it never drops input bytes.
    assert!(once.len() >= html.len());

    // Idempotence: rewritten attributes no longer match.
    let twice = config.postprocess(&once);
    assert_eq!(twice, once);

    // Inputs without the container attribute pass through untouched.
    if !html.contains(r#"class="shiki""#) {
        assert_eq!(once, html);
    }
});
