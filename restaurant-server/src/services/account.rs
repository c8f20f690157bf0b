//! 用户账户服务 (注册 / 登录 / 查询)

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use shared::Page;
use shared::client::{LoginRequest, LoginResponse, SignUpRequest, UserView};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::auth::password::{hash_password, verify_password};
use crate::db::models::User;
use crate::db::object_id;
use crate::db::repository::{PageRequest, UserRepository};
use crate::security_log;
use crate::utils::{AppError, AppResult};

/// Fixed delay for login attempts to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

const USER_ITEMS_KEY: &str = "user_items";

#[derive(Clone)]
pub struct AccountService {
    users: UserRepository,
    jwt: Arc<JwtService>,
}

impl AccountService {
    pub fn new(db: Surreal<Db>, jwt: Arc<JwtService>) -> Self {
        Self {
            users: UserRepository::new(db),
            jwt,
        }
    }

    /// Register a new user and return its natural key
    ///
    /// Tokens are issued up front and stored with the user. Duplicate email
    /// or phone is reported by the unique indexes as a conflict.
    pub async fn sign_up(&self, req: SignUpRequest) -> AppResult<String> {
        let password = hash_password(&req.password)?;
        let user_id = object_id::new_key();
        let tokens =
            self.jwt
                .issue_tokens(&req.email, &req.first_name, &req.last_name, &user_id)?;

        let now = Utc::now();
        let user = User {
            id: None,
            user_id: user_id.clone(),
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            phone: req.phone,
            password,
            avatar: req.avatar,
            token: Some(tokens.token),
            refresh_token: Some(tokens.refresh_token),
            created_at: now,
            updated_at: now,
        };

        match self.users.create(user).await {
            Ok(user) => {
                security_log!("INFO", "user_signup", user_id = user.user_id.clone());
                tracing::info!(user_id = %user.user_id, "User created");
                Ok(user.user_id)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Sign-up rejected");
                Err(e.into())
            }
        }
    }

    /// Authenticate by email + password and rotate the stored tokens
    pub async fn login(&self, req: LoginRequest) -> AppResult<LoginResponse> {
        let found = self.users.find_by_email(&req.email).await;

        // Same wait for unknown user and wrong password
        tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

        let user = match found? {
            Some(user) => user,
            None => {
                security_log!("WARN", "login_failed", reason = "user_not_found");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !verify_password(&user.password, &req.password)? {
            security_log!(
                "WARN",
                "login_failed",
                reason = "invalid_password",
                user_id = user.user_id.clone()
            );
            return Err(AppError::InvalidCredentials);
        }

        let tokens = self.jwt.issue_tokens(
            &user.email,
            &user.first_name,
            &user.last_name,
            &user.user_id,
        )?;
        self.users
            .update_tokens(&user.user_id, &tokens.token, &tokens.refresh_token)
            .await?;

        security_log!("INFO", "login_success", user_id = user.user_id.clone());
        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginResponse {
            user: UserView::from(user),
            token: tokens.token,
            refresh_token: tokens.refresh_token,
        })
    }

    /// One page of users, password hashes and tokens stripped
    pub async fn list(&self, page: PageRequest) -> AppResult<Page<UserView>> {
        let (total, users) = self.users.list(page).await?;
        Ok(Page::new(USER_ITEMS_KEY, total, users).map(UserView::from))
    }

    pub async fn get(&self, user_id: &str) -> AppResult<UserView> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserView::from)
            .ok_or_else(|| AppError::not_found(format!("user {user_id} not found")))
    }
}
