//! Dashboard widgets.

mod blog_post_overview;

use serde::{Deserialize, Serialize};

pub use blog_post_overview::BlogPostOverview;

/// Display color of a statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatColor {
    Gray,
    Info,
    Success,
}

/// One labelled number of a stats widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: u64,
    pub description: String,
    pub color: StatColor,
}
