//! `Date.now()` clock for minting record ids in the browser.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use content::Clock;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> u64 {
        #[cfg(feature = "hydrate")]
        {
            date_now()
        }
        #[cfg(all(not(feature = "hydrate"), not(target_arch = "wasm32")))]
        {
            content::clock::SystemClock.now_millis()
        }
        // A wasm32 build without `hydrate` has no time source; ids are only
        // minted after hydration.
        #[cfg(all(not(feature = "hydrate"), target_arch = "wasm32"))]
        {
            0
        }
    }
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn date_now() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}
