#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(pokemon) = pokedex_cli::domain::pokemon::Pokemon::decode(data) {
        let _ = pokemon.summary();
    }
});
