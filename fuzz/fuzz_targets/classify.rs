#![no_main]

use libfuzzer_sys::fuzz_target;

use eqrec::classify::classify_line;

fuzz_target!(|line: &[u8]| {
    let _ = classify_line(line);
});
