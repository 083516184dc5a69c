//! LIFF Bindings
//!
//! Raw bindings to the LIFF SDK loaded from `index.html`, plus
//! [`IdentityClient`], which owns the once-only initialization and token
//! retrieval. Login state and the redirect flow stay inside the SDK.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = liff, js_name = init)]
    fn liff_init(config: &JsValue) -> js_sys::Promise;

    #[wasm_bindgen(js_namespace = liff, js_name = isLoggedIn)]
    fn liff_is_logged_in() -> bool;

    #[wasm_bindgen(js_namespace = liff, js_name = login)]
    fn liff_login();

    #[wasm_bindgen(js_namespace = liff, js_name = getIDToken)]
    fn liff_get_id_token() -> Option<String>;
}

/// Identity client for authenticated API access.
///
/// Clones share the init flag, so the SDK is initialized at most once no
/// matter which copy touches it first.
#[derive(Clone)]
pub struct IdentityClient {
    app_id: String,
    ready: Rc<Cell<bool>>,
}

impl IdentityClient {
    pub fn new(app_id: String) -> Self {
        Self {
            app_id,
            ready: Rc::new(Cell::new(false)),
        }
    }

    /// Initialize the SDK if it hasn't been yet.
    pub async fn ensure_ready(&self) -> Result<(), String> {
        if self.ready.get() {
            return Ok(());
        }

        let config = js_sys::Object::new();
        js_sys::Reflect::set(
            &config,
            &JsValue::from_str("liffId"),
            &JsValue::from_str(&self.app_id),
        )
        .map_err(|e| format!("Login SDK config error: {:?}", e))?;

        JsFuture::from(liff_init(&config.into()))
            .await
            .map_err(|e| format!("Login SDK init failed: {:?}", e))?;

        self.ready.set(true);
        Ok(())
    }

    /// Whether the user has an active login session.
    pub fn logged_in(&self) -> bool {
        liff_is_logged_in()
    }

    /// Redirect to the platform's login page.
    pub fn redirect_login(&self) {
        liff_login();
    }

    /// Fetch the bearer ID token, initializing the SDK first if needed.
    ///
    /// Logged-out users are sent through the login redirect; the in-flight
    /// call fails since the page is about to navigate away.
    pub async fn id_token(&self) -> Result<String, String> {
        self.ensure_ready().await?;

        if !self.logged_in() {
            self.redirect_login();
            return Err("Not logged in, redirecting".to_string());
        }

        liff_get_id_token().ok_or_else(|| "No ID token available".to_string())
    }
}
