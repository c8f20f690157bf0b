//! User Repository

use super::{BaseRepository, PageRequest, Patch, RepoError, RepoResult};
use crate::db::models::User;
use crate::db::tables;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db, tables::USER),
        }
    }

    pub async fn list(&self, page: PageRequest) -> RepoResult<(u64, Vec<User>)> {
        self.base.paginate(page).await
    }

    pub async fn find_by_id(&self, user_id: &str) -> RepoResult<Option<User>> {
        self.base.find(user_id).await
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM type::table($tb) WHERE email = $email LIMIT 1")
            .bind(("tb", tables::USER))
            .bind(("email", email.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Insert a fully built user
    ///
    /// Email/phone uniqueness is left to the unique indexes; a violation
    /// comes back as `Duplicate` naming the offending field.
    pub async fn create(&self, user: User) -> RepoResult<User> {
        let key = user.user_id.clone();
        self.base.insert(&key, user).await.map_err(|e| match e {
            RepoError::Duplicate(msg) if msg.contains("user_phone") => {
                RepoError::Duplicate("this phone number already exists".into())
            }
            RepoError::Duplicate(_) => RepoError::Duplicate("this email already exists".into()),
            other => other,
        })
    }

    /// Overwrite both tokens
    pub async fn update_tokens(
        &self,
        user_id: &str,
        token: &str,
        refresh_token: &str,
    ) -> RepoResult<()> {
        let mut patch = Patch::new();
        patch.set("token", Some(token))?;
        patch.set("refresh_token", Some(refresh_token))?;
        self.base.merge(user_id, patch).await
    }
}
