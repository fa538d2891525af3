//! User service business logic.
//!
//! Methods marked with `apigen:api` are exposed over HTTP by the generated
//! code included at the bottom of this file.

use apigen::prelude::*;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stored user record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub full_name: String,
    pub status: String,
    pub age: i32,
}

/// Result of a successful create
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub id: u64,
}

#[derive(Debug, Default, Validate)]
pub struct ProfileParams {
    #[apivalidator = "required"]
    pub login: String,
}

#[derive(Debug, Default, Validate)]
pub struct CreateParams {
    #[apivalidator = "required,min=10"]
    pub login: String,
    #[apivalidator = "paramname=full_name"]
    pub name: String,
    #[apivalidator = "enum=user|moderator|admin,default=user"]
    pub status: String,
    #[apivalidator = "min=0,max=128"]
    pub age: i32,
}

/// User directory behind `/user/profile` and `/user/create`
pub struct MyApi {
    users: Mutex<HashMap<String, User>>,
    next_id: AtomicU64,
}

impl MyApi {
    /// Create a directory seeded with one user, `rvasily`
    pub fn new() -> Self {
        let seed = User {
            id: 42,
            login: "rvasily".to_string(),
            full_name: "Vasily Romanov".to_string(),
            status: "admin".to_string(),
            age: 0,
        };
        Self {
            users: Mutex::new(HashMap::from([(seed.login.clone(), seed)])),
            next_id: AtomicU64::new(43),
        }
    }

    /// apigen:api {"url": "/user/profile", "auth": false}
    pub fn profile(&self, _ctx: &RequestContext, params: ProfileParams) -> anyhow::Result<User> {
        if params.login == "bad_user" {
            anyhow::bail!("bad user");
        }

        let users = self
            .users
            .lock()
            .map_err(|_| anyhow::anyhow!("user store lock poisoned"))?;
        users
            .get(&params.login)
            .cloned()
            .ok_or_else(|| ApiError::not_found("user not exist").into())
    }

    /// Registers a new user.
    ///
    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(&self, ctx: &RequestContext, params: CreateParams) -> anyhow::Result<NewUser> {
        if params.login == "bad_username" {
            anyhow::bail!("bad user");
        }

        let mut users = self
            .users
            .lock()
            .map_err(|_| anyhow::anyhow!("user store lock poisoned"))?;
        if users.contains_key(&params.login) {
            return Err(ApiError::new(
                StatusCode::CONFLICT,
                format!("user {} exist", params.login),
            )
            .into());
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        tracing::info!(id, login = %params.login, request_id = ?ctx.request_id, "user created");
        users.insert(
            params.login.clone(),
            User {
                id,
                login: params.login,
                full_name: params.name,
                status: params.status,
                age: params.age,
            },
        );

        Ok(NewUser { id })
    }
}

impl Default for MyApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Character record returned by `OtherApi::create`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherUser {
    pub id: u64,
    pub login: String,
    pub full_name: String,
    pub level: u8,
}

#[derive(Debug, Default, Validate)]
pub struct OtherCreateParams {
    #[apivalidator = "required,min=3"]
    pub username: String,
    #[apivalidator = "paramname=account_name"]
    pub name: String,
    #[apivalidator = "enum=warrior|sorcerer|rouge,default=warrior"]
    pub class: String,
    #[apivalidator = "min=1,max=50"]
    pub level: u8,
}

#[derive(Debug, Default, Validate)]
pub struct SearchParams {
    #[apivalidator = "required,paramname=user_login"]
    pub login: String,
    #[apivalidator = "min=0,max=150"]
    pub age: i64,
    /// Not read from the request
    pub note: String,
}

/// Echo of the decoded search parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub login: String,
    pub age: i64,
    pub note: String,
}

#[derive(Debug, Default, Validate)]
pub struct GreetParams {
    #[apivalidator = "required,default=guest,paramname=who"]
    pub name: String,
    #[apivalidator = "default=7,required,min=5"]
    pub level: i32,
}

/// Greeting built from [`GreetParams`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub name: String,
    pub level: i32,
}

/// Second receiver sharing the `/user/create` path with [`MyApi`]
#[derive(Debug, Default)]
pub struct OtherApi;

impl OtherApi {
    /// apigen:api {"url": "/user/create", "auth": true, "method": "POST"}
    pub fn create(
        &self,
        _ctx: &RequestContext,
        params: OtherCreateParams,
    ) -> anyhow::Result<OtherUser> {
        Ok(OtherUser {
            id: 12,
            login: params.username,
            full_name: params.name,
            level: params.level,
        })
    }

    /// apigen:api {"url": "/user/search", "method": "GET"}
    pub fn search(&self, _ctx: &RequestContext, params: SearchParams) -> anyhow::Result<SearchResult> {
        Ok(SearchResult {
            login: params.login,
            age: params.age,
            note: params.note,
        })
    }

    /// apigen:api {"url": "/user/greet", "method": "GET"}
    pub fn greet(&self, _ctx: &RequestContext, params: GreetParams) -> anyhow::Result<Greeting> {
        Ok(Greeting {
            name: params.name,
            level: params.level,
        })
    }
}

mod generated {
    include!(concat!(env!("OUT_DIR"), "/api_gen.rs"));
}
