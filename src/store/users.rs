use sqlx::MySqlPool;

use crate::error::StoreError;
use crate::model::user::User;

/// All users ordered by name; id breaks ties between equal names.
pub async fn list_users(pool: &MySqlPool) -> Result<Vec<User>, StoreError> {
    let mut conn = pool.acquire().await?;

    let users = sqlx::query_as::<_, User>("SELECT id, name FROM users ORDER BY name, id")
        .fetch_all(&mut *conn)
        .await?;

    Ok(users)
}

/// Inserts a user and commits. Names are not checked for duplicates.
pub async fn insert_user(pool: &MySqlPool, name: &str) -> Result<User, StoreError> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query("INSERT INTO users (name) VALUES (?)")
        .bind(name)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    Ok(User {
        id: result.last_insert_id(),
        name: name.to_string(),
    })
}
