//! In-memory collaborators for service and state tests.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::error::PanelError;
use crate::host::DesignHost;
use crate::net::api::DesignsApi;
use crate::net::auth::{AuthProvider, TokenOptions};
use crate::net::types::{Design, DesignId, User};

pub fn design(id: &str) -> Design {
    Design { design_id: DesignId::new(id), name: format!("Design {id}"), preview: format!("https://cdn/{id}.png") }
}

pub struct FakeAuth {
    pub authenticated: Result<bool, PanelError>,
    pub user: Result<Option<User>, PanelError>,
    pub token: Result<String, PanelError>,
    pub login: Result<(), PanelError>,
    pub logout: Result<(), PanelError>,
    /// `access_token` never resolves.
    pub token_hangs: bool,
    pub token_requests: RefCell<Vec<TokenOptions>>,
    pub login_calls: Cell<usize>,
    pub logout_calls: Cell<usize>,
}

impl FakeAuth {
    pub fn signed_in(name: &str) -> Self {
        Self {
            authenticated: Ok(true),
            user: Ok(Some(User { name: name.to_owned(), email: None, picture: None })),
            token: Ok("provider-token".to_owned()),
            login: Ok(()),
            logout: Ok(()),
            token_hangs: false,
            token_requests: RefCell::new(Vec::new()),
            login_calls: Cell::new(0),
            logout_calls: Cell::new(0),
        }
    }

    pub fn signed_out() -> Self {
        Self { authenticated: Ok(false), user: Ok(None), ..Self::signed_in("") }
    }

    pub fn token_calls(&self) -> usize {
        self.token_requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl AuthProvider for FakeAuth {
    async fn is_authenticated(&self) -> Result<bool, PanelError> {
        self.authenticated.clone()
    }

    async fn user(&self) -> Result<Option<User>, PanelError> {
        self.user.clone()
    }

    async fn login_with_popup(&self) -> Result<(), PanelError> {
        self.login_calls.set(self.login_calls.get() + 1);
        self.login.clone()
    }

    async fn logout(&self) -> Result<(), PanelError> {
        self.logout_calls.set(self.logout_calls.get() + 1);
        self.logout.clone()
    }

    async fn access_token(&self, options: &TokenOptions) -> Result<String, PanelError> {
        self.token_requests.borrow_mut().push(options.clone());
        if self.token_hangs {
            futures::future::pending::<()>().await;
        }
        self.token.clone()
    }
}

pub struct FakeApi {
    pub list: Result<Vec<Design>, PanelError>,
    pub delete: Result<(), PanelError>,
    pub list_tokens: RefCell<Vec<String>>,
    pub deletes: RefCell<Vec<(DesignId, String)>>,
}

impl FakeApi {
    pub fn with_designs(ids: &[&str]) -> Self {
        Self {
            list: Ok(ids.iter().map(|id| design(id)).collect()),
            delete: Ok(()),
            list_tokens: RefCell::new(Vec::new()),
            deletes: RefCell::new(Vec::new()),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_tokens.borrow().len()
    }
}

#[async_trait(?Send)]
impl DesignsApi for FakeApi {
    async fn list_designs(&self, token: &str) -> Result<Vec<Design>, PanelError> {
        self.list_tokens.borrow_mut().push(token.to_owned());
        self.list.clone()
    }

    async fn delete_design(&self, id: &DesignId, token: &str) -> Result<(), PanelError> {
        self.deletes.borrow_mut().push((id.clone(), token.to_owned()));
        self.delete.clone()
    }
}

#[derive(Default)]
pub struct FakeHost {
    pub token: Option<String>,
    pub opened: RefCell<Vec<DesignId>>,
    pub duplicates: Cell<usize>,
}

impl DesignHost for FakeHost {
    fn load_by_id(&self, id: &DesignId) {
        self.opened.borrow_mut().push(id.clone());
    }

    fn duplicate(&self) {
        self.duplicates.set(self.duplicates.get() + 1);
    }

    fn current_auth_token(&self) -> Option<String> {
        self.token.clone()
    }
}
