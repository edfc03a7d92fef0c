use crate::error::RenderResult;

/// Source of text resources (model files, shader sources).
///
/// Browser fetches are async and not `Send`, so the futures returned here are
/// driven on the page's event loop.
#[allow(async_fn_in_trait)]
pub trait FileSource {
    async fn load_text(&self, path: &str) -> RenderResult<String>;
}

/// Joins a path onto an optional base URL.
pub fn resolve_url(base_url: &str, path: &str) -> String {
    if base_url.is_empty() {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Fetches files over HTTP relative to the page (or `base_url`).
#[cfg(target_arch = "wasm32")]
pub struct HttpFileSource {
    base_url: String,
}

#[cfg(target_arch = "wasm32")]
impl HttpFileSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl FileSource for HttpFileSource {
    async fn load_text(&self, path: &str) -> RenderResult<String> {
        use crate::error::RenderError;
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;

        let url = resolve_url(&self.base_url, path);
        let js_err = |e: wasm_bindgen::JsValue| RenderError::load(path, format!("{:?}", e));

        let window = web_sys::window().ok_or_else(|| RenderError::load(path, "no window"))?;
        let resp_val = JsFuture::from(window.fetch_with_str(&url))
            .await
            .map_err(js_err)?;
        let resp: web_sys::Response = resp_val.dyn_into().map_err(js_err)?;

        if !resp.ok() {
            return Err(RenderError::load(
                path,
                format!("HTTP {} {}", resp.status(), resp.status_text()),
            ));
        }

        let text_val = JsFuture::from(resp.text().map_err(js_err)?)
            .await
            .map_err(js_err)?;
        text_val
            .as_string()
            .ok_or_else(|| RenderError::load(path, "response body was not text"))
    }
}
