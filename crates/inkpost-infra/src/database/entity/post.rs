//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use inkpost_core::domain::{Attachment, PostStatus};

/// Stored form of the publishing status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Status {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "reviewing")]
    Reviewing,
    #[sea_orm(string_value = "published")]
    Published,
}

impl From<PostStatus> for Status {
    fn from(status: PostStatus) -> Self {
        match status {
            PostStatus::Draft => Status::Draft,
            PostStatus::Reviewing => Status::Reviewing,
            PostStatus::Published => Status::Published,
        }
    }
}

impl From<Status> for PostStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Draft => PostStatus::Draft,
            Status::Reviewing => PostStatus::Reviewing,
            Status::Published => PostStatus::Published,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category_id: Uuid,
    pub author_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// JSON array of tag strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub tags: Json,
    /// JSON array of stored paths, in display order.
    #[sea_orm(column_type = "JsonBinary")]
    pub attachments: Json,
    /// JSON object mapping stored path to original filename.
    #[sea_orm(column_type = "JsonBinary")]
    pub attachment_file_names: Json,
    pub status: Status,
    pub published_at: Option<Date>,
    pub bring_to_light: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Author,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

fn strings(value: Json) -> Vec<String> {
    serde_json::from_value(value).unwrap_or_default()
}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for inkpost_core::domain::Post {
    fn from(model: Model) -> Self {
        let names = model.attachment_file_names;
        let attachments = strings(model.attachments)
            .into_iter()
            .map(|path| Attachment {
                original_name: names
                    .get(&path)
                    .and_then(Json::as_str)
                    .unwrap_or(&path)
                    .to_string(),
                path,
            })
            .collect();

        Self {
            id: model.id,
            title: model.title,
            slug: model.slug,
            category_id: model.category_id,
            author_id: model.author_id,
            content: model.content,
            tags: strings(model.tags),
            attachments,
            status: model.status.into(),
            published_at: model.published_at,
            bring_to_light: model.bring_to_light,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            deleted_at: model.deleted_at.map(Into::into),
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<inkpost_core::domain::Post> for ActiveModel {
    fn from(post: inkpost_core::domain::Post) -> Self {
        let paths: Vec<String> = post.attachments.iter().map(|a| a.path.clone()).collect();
        let names: serde_json::Map<String, Json> = post
            .attachments
            .into_iter()
            .map(|a| (a.path, Json::String(a.original_name)))
            .collect();

        Self {
            id: Set(post.id),
            title: Set(post.title),
            slug: Set(post.slug),
            category_id: Set(post.category_id),
            author_id: Set(post.author_id),
            content: Set(post.content),
            tags: Set(Json::from(post.tags)),
            attachments: Set(Json::from(paths)),
            attachment_file_names: Set(Json::Object(names)),
            status: Set(post.status.into()),
            published_at: Set(post.published_at),
            bring_to_light: Set(post.bring_to_light),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
            deleted_at: Set(post.deleted_at.map(Into::into)),
        }
    }
}
