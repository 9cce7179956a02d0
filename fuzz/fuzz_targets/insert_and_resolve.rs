#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<String>, String)| {
    let mut router = beckon::Router::new("fuzz");

    for route in data.0 {
        if router.insert(&route).is_err() {
            return;
        }
    }

    let _ = router.resolve(&data.1);
});
