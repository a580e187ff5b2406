#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(envelope) = pokedex_cli::domain::location::ListingEnvelope::decode(data) {
        // Empty links must never survive decoding
        assert!(envelope.next.as_deref() != Some(""));
        assert!(envelope.previous.as_deref() != Some(""));
    }
});
