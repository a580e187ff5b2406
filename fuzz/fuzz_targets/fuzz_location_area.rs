#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = pokedex_cli::domain::location::LocationArea::decode(data);
});
