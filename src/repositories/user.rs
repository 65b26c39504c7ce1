use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use crate::entity::user::{self, ActiveModel, Column, Entity as UserEntity};
use crate::error::{AppError, AppResult};
use crate::models::{CreateUser, User};
use crate::repositories::is_unique_violation;

/// User repository for database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user. A duplicate email surfaces as `Conflict`.
    pub async fn create<C: ConnectionTrait>(
        conn: &C,
        input: &CreateUser,
        password_hash: &str,
    ) -> AppResult<User> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name.clone()),
            surname: Set(input.surname.clone()),
            email: Set(input.email.clone()),
            password_hash: Set(password_hash.to_string()),
            role: Set(input.role),
            created_at: Set(time::OffsetDateTime::now_utc()),
        };

        let result = model.insert(conn).await.map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Email already registered".to_string())
            } else {
                AppError::Database(e.to_string())
            }
        })?;

        Ok(result.into())
    }

    pub async fn find_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<Option<User>> {
        let model = UserEntity::find_by_id(id).one(conn).await?;
        Ok(model.map(Into::into))
    }

    /// Find user by email (for login)
    pub async fn find_by_email<C: ConnectionTrait>(
        conn: &C,
        email: &str,
    ) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(Column::Email.eq(email))
            .one(conn)
            .await?;

        Ok(model.map(Into::into))
    }

    /// Check if email exists
    pub async fn email_exists<C: ConnectionTrait>(conn: &C, email: &str) -> AppResult<bool> {
        let count = UserEntity::find()
            .filter(Column::Email.eq(email))
            .count(conn)
            .await?;

        Ok(count > 0)
    }
}

// Conversion from SeaORM model to our domain model
impl From<user::Model> for User {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            surname: m.surname,
            email: m.email,
            password_hash: m.password_hash,
            role: m.role,
            created_at: m.created_at,
        }
    }
}
