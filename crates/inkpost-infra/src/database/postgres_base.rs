use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};
use uuid::Uuid;

use inkpost_core::error::RepoError;
use inkpost_core::ports::BaseRepository;

use super::entity::{category, permission, post, user};

/// Entities with a UUID key and a `deleted_at` tombstone column.
pub trait SoftDeleteEntity: EntityTrait {
    fn id_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
}

macro_rules! soft_delete_entity {
    ($($module:ident),+) => {
        $(
            impl SoftDeleteEntity for $module::Entity {
                fn id_column() -> Self::Column {
                    $module::Column::Id
                }

                fn deleted_at_column() -> Self::Column {
                    $module::Column::DeletedAt
                }
            }
        )+
    };
}

soft_delete_entity!(category, permission, post, user);

/// Map a SeaORM error onto the repository error taxonomy.
pub(crate) fn map_db_err(e: DbErr) -> RepoError {
    match e {
        DbErr::RecordNotUpdated | DbErr::RecordNotFound(_) => RepoError::NotFound,
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(e.to_string()),
        _ => {
            let err_str = e.to_string();
            if err_str.contains("duplicate") || err_str.contains("unique") {
                RepoError::Constraint("Entity already exists".to_string())
            } else if err_str.contains("foreign key") {
                RepoError::Constraint("Referenced entity does not exist".to_string())
            } else {
                RepoError::Query(err_str)
            }
        }
    }
}

/// Generic PostgreSQL repository implementation.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: SoftDeleteEntity,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Set the tombstone column of one row; `None` restores it.
    async fn set_deleted_at(
        &self,
        id: Uuid,
        at: Option<chrono::DateTime<chrono::FixedOffset>>,
    ) -> Result<(), RepoError> {
        let result = E::update_many()
            .col_expr(E::deleted_at_column(), Expr::value(at))
            .filter(E::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl<E, T> BaseRepository<T, Uuid> for PostgresBaseRepository<E>
where
    E: SoftDeleteEntity,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, RepoError> {
        let result = E::find()
            .filter(E::id_column().eq(id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn create(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn update(&self, entity: T) -> Result<T, RepoError> {
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.update(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn trash(&self, id: Uuid) -> Result<(), RepoError> {
        self.set_deleted_at(id, Some(Utc::now().fixed_offset())).await
    }

    async fn restore(&self, id: Uuid) -> Result<(), RepoError> {
        self.set_deleted_at(id, None).await
    }
}
