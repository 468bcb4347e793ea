//! System clipboard access via the async Clipboard API.
//!
//! Writes are fire-and-forget from the UI's perspective: on success the
//! caller flips its "copied" feedback flag, on failure it logs and moves
//! on. Requires a browser environment; the SSR build returns an error.

#![allow(clippy::unused_async)]

/// How long the "Copied! ✓" button label stays up, in milliseconds.
pub const COPIED_RESET_MS: u32 = 2_000;

/// Await the copied-feedback delay (browser timer; immediate under SSR).
pub async fn copied_reset_delay() {
    #[cfg(feature = "hydrate")]
    gloo_timers::future::TimeoutFuture::new(COPIED_RESET_MS).await;
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns a description of the failure if the browser rejects the write
/// (no window, permission denied) or when called during SSR.
pub async fn write_text(text: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window().ok_or_else(|| "no window".to_owned())?;
        let clipboard = window.navigator().clipboard();
        wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
            .await
            .map_err(|e| format!("{e:?}"))?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        Err("not available on the server".to_owned())
    }
}
