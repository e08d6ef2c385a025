use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    SqlErr,
};
use tracing::instrument;

use crate::{
    entity,
    error::{UserError, UserResult},
    models::{NewUser, User, UserChanges, UserList},
    repository::UserRepository,
};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        let exists = entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await?
            .is_some();

        Ok(exists)
    }
}

/// The email pre-check can race with a concurrent insert; the unique
/// constraint catches what it misses.
fn insert_error(err: DbErr) -> UserError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => UserError::AlreadyExists,
        _ => UserError::Database(err),
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self, user))]
    async fn create(&self, user: NewUser) -> UserResult<User> {
        if self.exists_by_email(&user.email).await? {
            return Err(UserError::AlreadyExists);
        }

        let active_model = entity::ActiveModel {
            id: NotSet,
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password),
        };

        let model = active_model.insert(&self.db).await.map_err(insert_error)?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    #[instrument(skip(self, changes), fields(user_id = changes.id))]
    async fn update(&self, changes: UserChanges) -> UserResult<User> {
        let result = entity::Entity::update_many()
            .col_expr(entity::Column::Name, Expr::value(changes.name))
            .col_expr(entity::Column::Password, Expr::value(changes.password))
            .filter(entity::Column::Id.eq(changes.id))
            .exec(&self.db)
            .await?;

        if result.rows_affected != 1 {
            return Err(UserError::UnexpectedRowsAffected(result.rows_affected));
        }

        tracing::info!(user_id = changes.id, "Updated user");
        self.get_by_id(changes.id).await
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i32) -> UserResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(UserError::NotFound);
        }

        tracing::info!(user_id = id, "Deleted user");
        Ok(())
    }

    async fn get_by_id(&self, id: i32) -> UserResult<User> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(User::from)
            .ok_or(UserError::NotFound)
    }

    async fn get_all_users(&self) -> UserResult<UserList> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
