//! Editor host capability.
//!
//! DESIGN
//! ======
//! The editor's document-management object is shared by every card but owned
//! by the host page. Cards receive it explicitly as a [`HostHandle`] instead
//! of reaching for a global, which keeps the panel testable with a fake host.

use std::rc::Rc;

use leptos::prelude::{LocalStorage, StoredValue};

use crate::net::types::DesignId;

/// Operations the panel may invoke on the editor.
pub trait DesignHost {
    /// Replace the editor's open document with the design `id`.
    fn load_by_id(&self, id: &DesignId);

    /// Duplicate the document currently open in the editor.
    fn duplicate(&self);

    /// Bearer token the editor context already holds, if any.
    fn current_auth_token(&self) -> Option<String>;
}

/// Arena handle to the shared host, `Copy` so it can move into view closures.
pub type HostHandle = StoredValue<Rc<dyn DesignHost>, LocalStorage>;

#[cfg(feature = "csr")]
pub use browser::{JsProject, JsProjectHost};

#[cfg(feature = "csr")]
mod browser {
    use wasm_bindgen::prelude::*;

    use super::DesignHost;
    use crate::net::types::DesignId;

    #[wasm_bindgen]
    extern "C" {
        /// The editor's `project` object.
        pub type JsProject;

        #[wasm_bindgen(method, js_name = loadById)]
        fn load_by_id(this: &JsProject, id: &str);

        #[wasm_bindgen(method)]
        fn duplicate(this: &JsProject);

        #[wasm_bindgen(method, getter, js_name = authToken)]
        fn auth_token(this: &JsProject) -> Option<String>;
    }

    pub struct JsProjectHost {
        project: JsProject,
    }

    impl JsProjectHost {
        #[must_use]
        pub fn new(project: JsProject) -> Self {
            Self { project }
        }
    }

    impl DesignHost for JsProjectHost {
        fn load_by_id(&self, id: &DesignId) {
            self.project.load_by_id(id.as_str());
        }

        fn duplicate(&self) {
            self.project.duplicate();
        }

        fn current_auth_token(&self) -> Option<String> {
            self.project.auth_token().filter(|t| !t.is_empty())
        }
    }
}
