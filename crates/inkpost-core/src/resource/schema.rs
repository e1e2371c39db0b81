//! Declarative form and table layout of the post resource, served to the
//! admin UI as JSON.

use serde::Serialize;

use super::reactive::LIVE_DEBOUNCE;
use super::upload::UploadRules;
use crate::domain::PostStatus;

#[derive(Debug, Clone, Serialize)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
}

fn status_options() -> Vec<SelectOption> {
    PostStatus::ALL
        .iter()
        .map(|s| SelectOption {
            value: s.as_str(),
            label: s.label(),
        })
        .collect()
}

/// Input widget of a form field.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Widget {
    TextInput,
    Select {
        options: Vec<SelectOption>,
    },
    Relationship {
        relationship: &'static str,
        title_attribute: &'static str,
        searchable: bool,
        preload: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        create_form: Option<Vec<Field>>,
    },
    MarkdownEditor,
    TagsInput {
        separator: char,
    },
    FileUpload(UploadRules),
    DatePicker {
        display_format: &'static str,
        max_date_today: bool,
    },
    Checkbox,
}

/// Client-side reactive behaviour of a field.
#[derive(Debug, Clone, Serialize)]
pub struct Live {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debounce_ms: Option<u64>,
    /// Field recomputed as the slug of this field's value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug_target: Option<&'static str>,
}

/// Rendering condition over the in-progress form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "when", rename_all = "snake_case")]
pub enum VisibleWhen {
    StatusIs { status: PostStatus },
}

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub widget: Widget,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live: Option<Live>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_when: Option<VisibleWhen>,
    pub full_width: bool,
}

impl Field {
    fn new(name: &'static str, widget: Widget) -> Self {
        Self {
            name,
            widget,
            required: false,
            max_length: None,
            live: None,
            visible_when: None,
            full_width: false,
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    fn live(mut self) -> Self {
        self.live = Some(Live {
            debounce_ms: None,
            slug_target: None,
        });
        self
    }

    fn slug_source(mut self, target: &'static str) -> Self {
        self.live = Some(Live {
            debounce_ms: Some(LIVE_DEBOUNCE.as_millis() as u64),
            slug_target: Some(target),
        });
        self
    }

    fn visible_when_published(mut self) -> Self {
        self.visible_when = Some(VisibleWhen::StatusIs {
            status: PostStatus::Published,
        });
        self
    }

    fn full_width(mut self) -> Self {
        self.full_width = true;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    pub collapsible: bool,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub sections: Vec<Section>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.sections
            .iter()
            .flat_map(|s| s.fields.iter())
            .find(|f| f.name == name)
    }
}

/// Inline form to create a category from the category select.
pub fn category_form_fields() -> Vec<Field> {
    vec![
        Field::new("name", Widget::TextInput)
            .required()
            .max_length(255)
            .slug_source("slug"),
        Field::new("slug", Widget::TextInput)
            .required()
            .max_length(255),
    ]
}

/// Form of the post create and edit pages.
pub fn post_form() -> FormSchema {
    FormSchema {
        sections: vec![
            Section {
                heading: None,
                description: None,
                collapsible: false,
                fields: vec![
                    Field::new("title", Widget::TextInput)
                        .required()
                        .max_length(255)
                        .slug_source("slug"),
                    Field::new("slug", Widget::TextInput)
                        .required()
                        .max_length(255),
                    Field::new(
                        "category_id",
                        Widget::Relationship {
                            relationship: "category",
                            title_attribute: "name",
                            searchable: true,
                            preload: true,
                            create_form: Some(category_form_fields()),
                        },
                    )
                    .required(),
                    Field::new(
                        "author_id",
                        Widget::Relationship {
                            relationship: "author",
                            title_attribute: "name",
                            searchable: true,
                            preload: true,
                            create_form: None,
                        },
                    )
                    .required(),
                    Field::new("content", Widget::MarkdownEditor)
                        .required()
                        .full_width(),
                    Field::new("tags", Widget::TagsInput { separator: ',' }),
                ],
            },
            Section {
                heading: Some("Image"),
                description: None,
                collapsible: true,
                fields: vec![Field::new(
                    "attachments",
                    Widget::FileUpload(UploadRules::post_images()),
                )],
            },
            Section {
                heading: Some("Publishing"),
                description: Some("Settings for publishing this post."),
                collapsible: true,
                fields: vec![
                    Field::new(
                        "status",
                        Widget::Select {
                            options: status_options(),
                        },
                    )
                    .live(),
                    Field::new(
                        "published_at",
                        Widget::DatePicker {
                            display_format: "d/m/Y",
                            max_date_today: true,
                        },
                    )
                    .visible_when_published(),
                    Field::new("bring_to_light", Widget::Checkbox)
                        .live()
                        .visible_when_published(),
                ],
            },
        ],
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Image,
    Text,
    /// Editable in place from the table.
    Toggle,
}

#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Filter {
    Relationship {
        name: &'static str,
        relationship: &'static str,
        title_attribute: &'static str,
    },
    Select {
        name: &'static str,
        options: Vec<SelectOption>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSchema {
    pub columns: Vec<Column>,
    pub filters: Vec<Filter>,
    pub actions: Vec<&'static str>,
    pub bulk_actions: Vec<&'static str>,
}

/// Table of the post list page.
pub fn post_table() -> TableSchema {
    let column = |name, kind| Column { name, kind };
    TableSchema {
        columns: vec![
            column("attachments", ColumnKind::Image),
            column("title", ColumnKind::Text),
            column("slug", ColumnKind::Text),
            column("category.name", ColumnKind::Text),
            column("tags", ColumnKind::Text),
            column("status", ColumnKind::Text),
            column("published_at", ColumnKind::Text),
            column("bring_to_light", ColumnKind::Toggle),
        ],
        filters: vec![
            Filter::Relationship {
                name: "author",
                relationship: "author",
                title_attribute: "name",
            },
            Filter::Relationship {
                name: "category",
                relationship: "category",
                title_attribute: "name",
            },
            Filter::Select {
                name: "status",
                options: status_options(),
            },
        ],
        actions: vec!["edit"],
        bulk_actions: vec!["delete"],
    }
}
