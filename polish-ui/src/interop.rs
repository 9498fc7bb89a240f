use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

fn clipboard_script(text: &str) -> Result<String, String> {
    let payload =
        serde_json::to_string(text).map_err(|e| format!("Failed to encode clipboard text: {e}"))?;
    Ok(format!(
        "(navigator && navigator.clipboard) \
         ? navigator.clipboard.writeText({payload}) \
         : Promise.reject(new Error('clipboard unavailable'))"
    ))
}

/// Write `text` to the system clipboard and wait for the browser to confirm.
pub async fn copy_text_to_clipboard(text: &str) -> Result<(), String> {
    let js = clipboard_script(text)?;
    let promise = js_sys::eval(&js)
        .map_err(|e| format!("Clipboard call failed: {e:?}"))?
        .dyn_into::<js_sys::Promise>()
        .map_err(|_| "Clipboard call did not return a promise".to_string())?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write rejected: {e:?}"))
}
