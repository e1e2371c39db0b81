use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageOutputFormat};

use inkpost_core::error::StorageError;

const JPEG_QUALITY: u8 = 85;

/// Re-encoded image bytes plus the extension they should be stored under.
#[derive(Debug, Clone)]
pub struct PreparedImage {
    pub bytes: Vec<u8>,
    pub extension: &'static str,
}

fn mime_of(format: ImageFormat) -> Option<&'static str> {
    match format {
        ImageFormat::Png => Some("image/png"),
        ImageFormat::Jpeg => Some("image/jpeg"),
        ImageFormat::Gif => Some("image/gif"),
        ImageFormat::WebP => Some("image/webp"),
        _ => None,
    }
}

/// MIME type of an uploaded file.
///
/// Magic bytes win; the file name is only consulted when the content is not a
/// recognised image, so a renamed text file is never reported as an image.
pub fn detect_mime(file_name: &str, bytes: &[u8]) -> String {
    if let Some(mime) = image::guess_format(bytes).ok().and_then(mime_of) {
        return mime.to_string();
    }

    let guessed = mime_guess::from_path(file_name).first_or_octet_stream();
    if guessed.type_() == mime_guess::mime::IMAGE {
        // claims to be an image but the content says otherwise
        return mime_guess::mime::APPLICATION_OCTET_STREAM.to_string();
    }
    guessed.essence_str().to_string()
}

/// Cover-resize to exactly `width`×`height`, cropping the overflow around the centre.
///
/// JPEG input stays JPEG; everything else is written as PNG.
pub fn prepare_cover(bytes: &[u8], width: u32, height: u32) -> Result<PreparedImage, StorageError> {
    let format = image::guess_format(bytes)
        .map_err(|e| StorageError::Unsupported(e.to_string()))?;
    if mime_of(format).is_none() {
        return Err(StorageError::Unsupported(format!("{format:?}")));
    }

    let decoded = image::load_from_memory_with_format(bytes, format)
        .map_err(|e| StorageError::Undecodable(e.to_string()))?;
    let resized = decoded.resize_to_fill(width, height, FilterType::Lanczos3);

    // the JPEG encoder does not take an alpha channel
    let (resized, output, extension) = match format {
        ImageFormat::Jpeg => (
            DynamicImage::ImageRgb8(resized.to_rgb8()),
            ImageOutputFormat::Jpeg(JPEG_QUALITY),
            "jpg",
        ),
        _ => (resized, ImageOutputFormat::Png, "png"),
    };

    let mut encoded = Cursor::new(Vec::new());
    resized
        .write_to(&mut encoded, output)
        .map_err(|e| StorageError::Image(e.to_string()))?;

    tracing::debug!(
        ?format,
        width,
        height,
        bytes = encoded.get_ref().len(),
        "Prepared cover image"
    );

    Ok(PreparedImage {
        bytes: encoded.into_inner(),
        extension,
    })
}
