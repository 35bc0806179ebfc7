//! Identity-provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel never holds credentials. It asks an [`AuthProvider`] whether a
//! session exists, who the user is, and for a fresh bearer token right before
//! each backend call. In the browser the provider is an
//! `@auth0/auth0-spa-js` client handed in by the host page.

use async_trait::async_trait;

use super::types::User;
use crate::error::PanelError;

/// Options for silent token retrieval.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenOptions {
    pub audience: Option<String>,
}

#[async_trait(?Send)]
pub trait AuthProvider {
    /// Whether the provider currently holds a valid session.
    async fn is_authenticated(&self) -> Result<bool, PanelError>;

    /// Profile of the signed-in user, if any.
    async fn user(&self) -> Result<Option<User>, PanelError>;

    /// Start interactive login in a popup window.
    async fn login_with_popup(&self) -> Result<(), PanelError>;

    /// End the session.
    async fn logout(&self) -> Result<(), PanelError>;

    /// Fetch a bearer token without user interaction.
    async fn access_token(&self, options: &TokenOptions) -> Result<String, PanelError>;
}

#[cfg(feature = "csr")]
pub use browser::{Auth0Client, Auth0Provider};

#[cfg(feature = "csr")]
mod browser {
    use async_trait::async_trait;
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::prelude::*;

    use super::{AuthProvider, TokenOptions};
    use crate::error::PanelError;
    use crate::net::types::User;

    #[wasm_bindgen]
    extern "C" {
        /// Initialized `Auth0Client` from `@auth0/auth0-spa-js`.
        pub type Auth0Client;

        #[wasm_bindgen(method, catch, js_name = isAuthenticated)]
        async fn js_is_authenticated(this: &Auth0Client) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = getUser)]
        async fn js_get_user(this: &Auth0Client) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = loginWithPopup)]
        async fn js_login_with_popup(this: &Auth0Client) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = logout)]
        async fn js_logout(this: &Auth0Client) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(method, catch, js_name = getTokenSilently)]
        async fn js_get_token_silently(this: &Auth0Client, options: &JsValue) -> Result<JsValue, JsValue>;
    }

    pub struct Auth0Provider {
        client: Auth0Client,
    }

    impl Auth0Provider {
        #[must_use]
        pub fn new(client: Auth0Client) -> Self {
            Self { client }
        }
    }

    #[async_trait(?Send)]
    impl AuthProvider for Auth0Provider {
        async fn is_authenticated(&self) -> Result<bool, PanelError> {
            let value = self.client.js_is_authenticated().await.map_err(auth_error)?;
            Ok(value.as_bool().unwrap_or(false))
        }

        async fn user(&self) -> Result<Option<User>, PanelError> {
            let value = self.client.js_get_user().await.map_err(auth_error)?;
            if value.is_undefined() || value.is_null() {
                return Ok(None);
            }
            let email = string_field(&value, "email");
            let name = string_field(&value, "name")
                .or_else(|| email.clone())
                .unwrap_or_else(|| "user".to_owned());
            Ok(Some(User { name, email, picture: string_field(&value, "picture") }))
        }

        async fn login_with_popup(&self) -> Result<(), PanelError> {
            self.client.js_login_with_popup().await.map_err(auth_error)?;
            Ok(())
        }

        async fn logout(&self) -> Result<(), PanelError> {
            self.client.js_logout().await.map_err(auth_error)?;
            Ok(())
        }

        async fn access_token(&self, options: &TokenOptions) -> Result<String, PanelError> {
            let value = self
                .client
                .js_get_token_silently(&token_options_object(options))
                .await
                .map_err(auth_error)?;
            value
                .as_string()
                .ok_or_else(|| PanelError::Auth("token response was not a string".to_owned()))
        }
    }

    /// `{ authorizationParams: { audience } }`
    fn token_options_object(options: &TokenOptions) -> JsValue {
        let outer = js_sys::Object::new();
        if let Some(audience) = &options.audience {
            let params = js_sys::Object::new();
            let _ = js_sys::Reflect::set(&params, &"audience".into(), &audience.into());
            let _ = js_sys::Reflect::set(&outer, &"authorizationParams".into(), &params);
        }
        outer.into()
    }

    fn string_field(value: &JsValue, key: &str) -> Option<String> {
        js_sys::Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
    }

    fn auth_error(err: JsValue) -> PanelError {
        let message = err
            .dyn_ref::<js_sys::Error>()
            .map(|e| String::from(e.message()))
            .or_else(|| err.as_string())
            .unwrap_or_else(|| "identity provider error".to_owned());
        PanelError::Auth(message)
    }
}
