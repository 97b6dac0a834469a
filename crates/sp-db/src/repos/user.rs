//! User repository.
//!
//! Users are keyed by email: signing in again with the same address updates
//! the stored profile and token instead of creating a second row. The role is
//! only written on first insert and through [`PlannerService::update_user`].

use sp_core::entities::{NewUser, User};

use crate::error::DatabaseError;
use crate::helpers::{get_opt_string, parse_datetime, parse_enum};
use crate::service::PlannerService;

const SELECT_COLS: &str = "id, name, email, role, oauth_provider, github_username, \
                           access_token, avatar_url, created_at";

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<i64>(0)?,
        name: row.get::<String>(1)?,
        email: row.get::<String>(2)?,
        role: parse_enum(&row.get::<String>(3)?)?,
        oauth_provider: parse_enum(&row.get::<String>(4)?)?,
        external_username: get_opt_string(row, 5)?,
        access_token: get_opt_string(row, 6)?,
        avatar_url: get_opt_string(row, 7)?,
        created_at: parse_datetime(&row.get::<String>(8)?)?,
    })
}

impl PlannerService {
    /// Insert a user, or refresh the profile of the existing user with the same email.
    ///
    /// An existing row keeps its `role` and `created_at`. Its `oauth_provider`
    /// follows the provider that issued the new token.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the upsert fails.
    pub async fn upsert_user(&self, user: &NewUser) -> Result<User, DatabaseError> {
        let now = chrono::Utc::now();
        let sql = format!(
            "INSERT INTO users (name, email, role, oauth_provider, github_username, access_token, avatar_url, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(email) DO UPDATE SET
                name = excluded.name,
                oauth_provider = excluded.oauth_provider,
                github_username = excluded.github_username,
                access_token = excluded.access_token,
                avatar_url = excluded.avatar_url
             RETURNING {SELECT_COLS}"
        );
        let mut rows = self
            .db()
            .conn()
            .query(
                &sql,
                libsql::params![
                    user.name.as_str(),
                    user.email.as_str(),
                    user.role.as_str(),
                    user.oauth_provider.as_str(),
                    user.external_username.as_deref(),
                    user.access_token.as_deref(),
                    user.avatar_url.as_deref(),
                    now.to_rfc3339(),
                ],
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        let stored = row_to_user(&row)?;
        tracing::debug!(user_id = stored.id, email = %stored.email, "user upserted");
        Ok(stored)
    }

    /// Get a user by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no user has this id.
    pub async fn get_user(&self, id: i64) -> Result<User, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM users WHERE id = ?1");
        let mut rows = self.db().conn().query(&sql, [id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// Look up a user by email.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM users WHERE email = ?1");
        let mut rows = self.db().conn().query(&sql, [email]).await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    /// List all users in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_users(&self) -> Result<Vec<User>, DatabaseError> {
        let sql = format!("SELECT {SELECT_COLS} FROM users ORDER BY id");
        let mut rows = self.db().conn().query(&sql, ()).await?;
        let mut users = Vec::new();
        while let Some(row) = rows.next().await? {
            users.push(row_to_user(&row)?);
        }
        Ok(users)
    }

    /// Overwrite the mutable profile fields of an existing user.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the user does not exist.
    pub async fn update_user(&self, user: &User) -> Result<User, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE users SET name = ?1, role = ?2, github_username = ?3,
                    access_token = ?4, avatar_url = ?5
                 WHERE id = ?6",
                libsql::params![
                    user.name.as_str(),
                    user.role.as_str(),
                    user.external_username.as_deref(),
                    user.access_token.as_deref(),
                    user.avatar_url.as_deref(),
                    user.id,
                ],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        self.get_user(user.id).await
    }
}
