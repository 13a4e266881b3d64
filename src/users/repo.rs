use serde::Serialize;
use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub photo: String,
}

impl User {
    /// All users, newest first. The table is small by assumption; there is
    /// no pagination.
    pub async fn list_all(db: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, photo
            FROM users
            ORDER BY id DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(users)
    }

    pub async fn insert(
        db: &PgPool,
        name: &str,
        email: &str,
        photo: &str,
    ) -> Result<User, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, photo)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, photo
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(photo)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}
