//! Post and category form data, visibility rules and validation.

use std::time::Instant;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::reactive::{LIVE_DEBOUNCE, SlugMode, SlugSync};
use super::upload::UploadRules;
use crate::domain::{Attachment, Category, Post, PostStatus};
use crate::error::FieldErrors;
use crate::slug::slugify;

/// Post form as submitted (or as held in progress by the editor).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PostForm {
    #[validate(
        required(message = "The title field is required."),
        length(max = 255, message = "The title field must not be greater than 255 characters.")
    )]
    pub title: Option<String>,

    #[validate(
        required(message = "The slug field is required."),
        length(max = 255, message = "The slug field must not be greater than 255 characters.")
    )]
    pub slug: Option<String>,

    #[validate(required(message = "The category field is required."))]
    pub category_id: Option<Uuid>,

    #[validate(required(message = "The author field is required."))]
    pub author_id: Option<Uuid>,

    #[validate(required(message = "The content field is required."))]
    pub content: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub attachments: Vec<Attachment>,

    #[serde(default)]
    pub status: PostStatus,

    pub published_at: Option<NaiveDate>,

    #[serde(default)]
    pub bring_to_light: bool,
}

/// Form fields whose visibility depends on the in-progress state.
pub const PUBLISHING_FIELDS: [&str; 2] = ["published_at", "bring_to_light"];

impl PostForm {
    /// Prefill the edit form from a stored post.
    pub fn from_post(post: &Post) -> Self {
        Self {
            title: Some(post.title.clone()),
            slug: Some(post.slug.clone()),
            category_id: Some(post.category_id),
            author_id: Some(post.author_id),
            content: Some(post.content.clone()),
            tags: post.tags.clone(),
            attachments: post.attachments.clone(),
            status: post.status,
            published_at: post.published_at,
            bring_to_light: post.bring_to_light,
        }
    }

    /// Whether `field` is rendered for the current state. Hidden fields keep
    /// their values.
    pub fn is_visible(&self, field: &str) -> bool {
        if PUBLISHING_FIELDS.contains(&field) {
            self.status == PostStatus::Published
        } else {
            true
        }
    }

    /// Blank strings count as missing; tags are split on `,` and trimmed.
    /// A missing slug defaults to the slugified title.
    pub fn normalized(mut self) -> Self {
        self.title = non_blank(self.title);
        self.slug = non_blank(self.slug);
        self.content = non_blank(self.content);
        self.tags = split_tags(&self.tags);
        if self.slug.is_none() {
            self.slug = self.title.as_deref().map(slugify).and_then(|s| non_blank(Some(s)));
        }
        self
    }

    /// Validate the submitted values. Errors are keyed by field name.
    pub fn validate_input(self) -> Result<PostInput, FieldErrors> {
        let form = self.normalized();

        let mut errors = FieldErrors::new();
        if let Err(e) = form.validate() {
            errors.merge(e.into());
        }
        if let Err(e) = UploadRules::post_images().check_count(form.attachments.len()) {
            errors.merge(e);
        }
        errors.into_result()?;

        match (form.title, form.slug, form.category_id, form.author_id, form.content) {
            (Some(title), Some(slug), Some(category_id), Some(author_id), Some(content)) => {
                Ok(PostInput {
                    title,
                    slug,
                    category_id,
                    author_id,
                    content,
                    tags: form.tags,
                    attachments: form.attachments,
                    status: form.status,
                    published_at: form.published_at,
                    bring_to_light: form.bring_to_light,
                })
            }
            _ => Err(incomplete()),
        }
    }
}

/// A validated post form.
///
/// `published_at` is kept whatever the status; no rule ties the two.
#[derive(Debug, Clone, PartialEq)]
pub struct PostInput {
    pub title: String,
    pub slug: String,
    pub category_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub tags: Vec<String>,
    pub attachments: Vec<Attachment>,
    pub status: PostStatus,
    pub published_at: Option<NaiveDate>,
    pub bring_to_light: bool,
}

impl PostInput {
    pub fn into_post(self) -> Post {
        let mut post = Post::new(
            self.title.clone(),
            self.slug.clone(),
            self.category_id,
            self.author_id,
            self.content.clone(),
        );
        self.apply_to(&mut post);
        post
    }

    pub fn apply_to(self, post: &mut Post) {
        post.title = self.title;
        post.slug = self.slug;
        post.category_id = self.category_id;
        post.author_id = self.author_id;
        post.content = self.content;
        post.tags = self.tags;
        post.attachments = self.attachments;
        post.status = self.status;
        post.published_at = self.published_at;
        post.bring_to_light = self.bring_to_light;
        post.touch();
    }
}

/// Category form, also used inline from the post form's category select.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct CategoryForm {
    #[validate(
        required(message = "The name field is required."),
        length(max = 255, message = "The name field must not be greater than 255 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "The slug field is required."),
        length(max = 255, message = "The slug field must not be greater than 255 characters.")
    )]
    pub slug: Option<String>,
}

impl CategoryForm {
    pub fn validate_input(self) -> Result<(String, String), FieldErrors> {
        let name = non_blank(self.name);
        let slug = non_blank(self.slug)
            .or_else(|| non_blank(name.as_deref().map(slugify)));
        let form = CategoryForm { name, slug };

        form.validate().map_err(FieldErrors::from)?;
        match (form.name, form.slug) {
            (Some(name), Some(slug)) => Ok((name, slug)),
            _ => Err(incomplete()),
        }
    }

    pub fn apply_to(name: String, slug: String, category: &mut Category) {
        category.name = name;
        category.slug = slug;
        category.updated_at = chrono::Utc::now();
    }
}

/// User account form. The password is only required when creating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserForm {
    #[validate(
        required(message = "The name field is required."),
        length(max = 255, message = "The name field must not be greater than 255 characters.")
    )]
    pub name: Option<String>,

    #[validate(
        required(message = "The email field is required."),
        email(message = "The email field must be a valid email address.")
    )]
    pub email: Option<String>,

    #[validate(length(min = 8, message = "The password field must be at least 8 characters."))]
    pub password: Option<String>,
}

/// A validated user form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub password: Option<String>,
}

impl UserForm {
    pub fn validate_input(self, creating: bool) -> Result<UserInput, FieldErrors> {
        let form = UserForm {
            name: non_blank(self.name),
            email: non_blank(self.email).map(|e| e.trim().to_lowercase()),
            password: non_blank(self.password),
        };

        let mut errors = FieldErrors::new();
        if let Err(e) = form.validate() {
            errors.merge(e.into());
        }
        if creating && form.password.is_none() {
            errors.add("password", "The password field is required.");
        }
        errors.into_result()?;

        match (form.name, form.email) {
            (Some(name), Some(email)) => Ok(UserInput {
                name,
                email,
                password: form.password,
            }),
            _ => Err(incomplete()),
        }
    }
}

/// Permission catalog form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PermissionForm {
    #[validate(
        required(message = "The name field is required."),
        length(max = 255, message = "The name field must not be greater than 255 characters.")
    )]
    pub name: Option<String>,
}

impl PermissionForm {
    pub fn validate_input(self) -> Result<String, FieldErrors> {
        let form = PermissionForm {
            name: non_blank(self.name).map(|n| n.trim().to_string()),
        };
        form.validate().map_err(FieldErrors::from)?;
        form.name.ok_or_else(incomplete)
    }
}

/// Result of evaluating the in-progress form after a field change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormEvaluation {
    pub state: PostForm,
    pub hidden: Vec<String>,
}

/// Slug for `source` once its quiet period is over.
///
/// The client owns the quiet period: it only asks for a form state after
/// `LIVE_DEBOUNCE` passed without further input, so the sync is fed the
/// change and polled at its deadline in one go. Only the mode and the manual
/// override decide the outcome here.
fn settled_slug(source: Option<&str>, mode: SlugMode, slug_overridden: bool) -> Option<String> {
    let now = Instant::now();
    let mut sync = SlugSync::new(mode);
    if slug_overridden {
        sync.slug_edited();
    }
    sync.source_changed(source.unwrap_or_default(), now);
    sync.poll(now + LIVE_DEBOUNCE)
}

/// Recompute derived fields after `changed` was edited and its quiet period
/// elapsed, then report which fields are hidden.
///
/// `slug_overridden` tells whether the user has edited the slug by hand.
pub fn evaluate(
    mut state: PostForm,
    changed: &str,
    mode: SlugMode,
    slug_overridden: bool,
) -> FormEvaluation {
    if changed == "title"
        && let Some(slug) = settled_slug(state.title.as_deref(), mode, slug_overridden)
    {
        state.slug = Some(slug);
    }

    let hidden = PUBLISHING_FIELDS
        .iter()
        .filter(|field| !state.is_visible(field))
        .map(|field| field.to_string())
        .collect();

    FormEvaluation { state, hidden }
}

/// Inline category form: `name` drives `slug` the same way `title` does on
/// the post form. The category form has no conditional fields.
pub fn evaluate_category(
    mut state: CategoryForm,
    changed: &str,
    mode: SlugMode,
    slug_overridden: bool,
) -> CategoryForm {
    if changed == "name"
        && let Some(slug) = settled_slug(state.name.as_deref(), mode, slug_overridden)
    {
        state.slug = Some(slug);
    }
    state
}

fn incomplete() -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.add("form", "The form is incomplete.");
    errors
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn split_tags(tags: &[String]) -> Vec<String> {
    tags.iter()
        .flat_map(|tag| tag.split(','))
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}
