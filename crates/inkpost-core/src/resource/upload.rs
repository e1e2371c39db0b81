//! Attachment upload constraints.

use serde::{Deserialize, Serialize};

use crate::error::FieldErrors;

const FIELD: &str = "attachments";

/// A file offered for upload, before it is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCandidate {
    pub file_name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

/// Constraints and processing targets of the post image upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadRules {
    pub disk: &'static str,
    pub directory: &'static str,
    pub max_files: usize,
    /// Kilobytes.
    pub min_size: u64,
    /// Kilobytes.
    pub max_size: u64,
    pub accepted_mime_types: &'static [&'static str],
    pub crop_aspect_ratio: (u32, u32),
    pub target_width: u32,
    pub target_height: u32,
    pub reorderable: bool,
    pub append_files: bool,
}

impl UploadRules {
    /// Post attachments: up to two images cropped to 16:9 at 1920×1080.
    pub const fn post_images() -> Self {
        Self {
            disk: "public",
            directory: "post",
            max_files: 2,
            min_size: 10,
            max_size: 512,
            accepted_mime_types: &["image/png", "image/jpeg", "image/gif", "image/webp"],
            crop_aspect_ratio: (16, 9),
            target_width: 1920,
            target_height: 1080,
            reorderable: true,
            append_files: true,
        }
    }

    pub fn accepts_mime(&self, mime: &str) -> bool {
        self.accepted_mime_types.contains(&mime)
    }

    /// Check one file against type and size bounds.
    pub fn check_file(&self, file: &UploadCandidate) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();

        if !self.accepts_mime(&file.mime_type) {
            errors.merge(Self::not_an_image(&file.file_name));
        }

        let kilobytes = file.size_bytes as f64 / 1024.0;
        if kilobytes < self.min_size as f64 {
            errors.add(
                FIELD,
                format!(
                    "The file {} must be at least {} kilobytes.",
                    file.file_name, self.min_size
                ),
            );
        } else if kilobytes > self.max_size as f64 {
            errors.add(
                FIELD,
                format!(
                    "The file {} must not be greater than {} kilobytes.",
                    file.file_name, self.max_size
                ),
            );
        }

        errors.into_result()
    }

    /// Rejection of a file that is not a usable image, whatever its name claims.
    pub fn not_an_image(file_name: &str) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.add(FIELD, format!("The file {file_name} must be an image."));
        errors
    }

    /// Check the file count.
    pub fn check_count(&self, count: usize) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if count > self.max_files {
            errors.add(
                FIELD,
                format!(
                    "The attachments field must not have more than {} items.",
                    self.max_files
                ),
            );
        }
        errors.into_result()
    }

    /// Check files appended to `existing` already attached files.
    pub fn check_batch(
        &self,
        existing: usize,
        files: &[UploadCandidate],
    ) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        if let Err(e) = self.check_count(existing + files.len()) {
            errors.merge(e);
        }
        for file in files {
            if let Err(e) = self.check_file(file) {
                errors.merge(e);
            }
        }
        errors.into_result()
    }
}

impl Default for UploadRules {
    fn default() -> Self {
        Self::post_images()
    }
}
