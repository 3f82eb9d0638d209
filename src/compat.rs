//! Platform share hand-off, implemented per target.

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

use thiserror::Error;

/// Ways handing text to the platform can fail.
#[derive(Debug, Error)]
pub enum ShareError {
    #[error("no share target available: {0}")]
    Unavailable(String),
    #[error("clipboard rejected the text: {0}")]
    Clipboard(String),
}

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::Navigator;
    use web_sys::ShareData;
    use web_sys::Window;

    use super::ShareError;

    fn supports_web_share(navigator: &Navigator) -> bool {
        // Older browsers have no `navigator.share`; calling the missing
        // method through the binding would throw, so probe for it first.
        js_sys::Reflect::has(navigator.as_ref(), &JsValue::from_str("share")).unwrap_or(false)
    }

    /// Offers `text` through the browser's share sheet where the Web Share
    /// API exists, and through the async clipboard everywhere else. A share
    /// sheet the user dismisses also falls through to the clipboard.
    pub async fn share_text(text: String) -> Result<(), ShareError> {
        let window: Window = web_sys::window()
            .ok_or_else(|| ShareError::Unavailable("no window".to_string()))?;
        let navigator = window.navigator();

        if supports_web_share(&navigator) {
            let data = ShareData::new();
            data.set_text(&text);
            if JsFuture::from(navigator.share_with_data(&data)).await.is_ok() {
                return Ok(());
            }
        }

        let promise = navigator.clipboard().write_text(&text);
        JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ShareError::Clipboard(format!("{:?}", e)))
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use super::ShareError;

    /// Native builds have no share sheet; the text goes to the system
    /// clipboard instead.
    pub async fn share_text(text: String) -> Result<(), ShareError> {
        let mut clipboard =
            arboard::Clipboard::new().map_err(|e| ShareError::Unavailable(e.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|e| ShareError::Clipboard(e.to_string()))
    }
}
