#![cfg(all(not(feature = "hydrate"), not(target_arch = "wasm32")))]

use super::*;

#[test]
fn native_fallback_reads_host_time() {
    assert!(BrowserClock.now_millis() > 1_577_836_800_000);
}

#[test]
fn ids_from_browser_clock_are_decimal_millis() {
    let id = content::clock::next_id(&BrowserClock);
    assert!(!id.is_empty());
    assert!(id.chars().all(|c| c.is_ascii_digit()));
}
