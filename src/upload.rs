//! Multipart image intake for the gallery routes.
//!
//! Text parts are collected by name; the single `image` part is checked
//! against the allowed extensions and the configured size limit, then kept
//! in memory until it is encoded as a `data:` URL.

use axum::{body::Bytes, extract::Multipart};
use base64::{Engine, engine::general_purpose::STANDARD};
use std::{collections::HashMap, path::Path};

use crate::error::{AppError, AppResult};

pub const IMAGE_FIELD: &str = "image";
pub const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl ImageUpload {
    /// `data:<mime>;base64,<payload>`
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, STANDARD.encode(&self.bytes))
    }
}

#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    pub image: Option<ImageUpload>,
}

impl MultipartForm {
    /// Takes a text field, treating blank values as absent.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name).filter(|value| !value.trim().is_empty())
    }
}

fn has_allowed_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            ALLOWED_EXTENSIONS
                .iter()
                .any(|allowed| ext.eq_ignore_ascii_case(allowed))
        })
}

/// MIME type from the part header, falling back to a guess from the name.
fn resolve_content_type(declared: Option<&str>, file_name: &str) -> String {
    declared
        .filter(|ct| ct.starts_with("image/"))
        .map(str::to_string)
        .unwrap_or_else(|| {
            mime_guess::from_path(file_name)
                .first_or_octet_stream()
                .essence_str()
                .to_string()
        })
}

fn check_image(file_name: &str, size: usize, max_bytes: usize) -> AppResult<()> {
    if !has_allowed_extension(file_name) {
        return Err(AppError::BadRequest(format!(
            "Only image files are allowed ({})",
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }
    if size > max_bytes {
        return Err(AppError::BadRequest(format!(
            "Image must not be larger than {} bytes",
            max_bytes
        )));
    }
    Ok(())
}

/// read_form
///
/// Drains the multipart stream. Unknown file parts are ignored; a second
/// `image` part replaces the first.
pub async fn read_form(mut multipart: Multipart, max_image_bytes: usize) -> AppResult<MultipartForm> {
    let mut form = MultipartForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if name == IMAGE_FIELD {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let content_type = resolve_content_type(field.content_type(), &file_name);
            let bytes = field.bytes().await?;
            check_image(&file_name, bytes.len(), max_image_bytes)?;
            tracing::debug!(file = %file_name, size = bytes.len(), "image received");
            form.image = Some(ImageUpload {
                file_name,
                content_type,
                bytes,
            });
        } else if field.file_name().is_none() {
            let value = field.text().await?;
            form.fields.insert(name, value);
        }
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_case_insensitive() {
        assert!(has_allowed_extension("photo.JPG"));
        assert!(has_allowed_extension("banner.png"));
        assert!(!has_allowed_extension("notes.pdf"));
        assert!(!has_allowed_extension("no-extension"));
    }

    #[test]
    fn oversized_images_are_rejected() {
        assert!(check_image("a.gif", 10, 10).is_ok());
        assert!(matches!(check_image("a.gif", 11, 10), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn content_type_falls_back_to_extension() {
        assert_eq!(resolve_content_type(Some("image/webp"), "x.png"), "image/webp");
        assert_eq!(
            resolve_content_type(Some("application/octet-stream"), "x.png"),
            "image/png"
        );
        assert_eq!(resolve_content_type(None, "x.jpeg"), "image/jpeg");
    }

    #[test]
    fn data_url_encodes_bytes() {
        let image = ImageUpload {
            file_name: "dot.gif".to_string(),
            content_type: "image/gif".to_string(),
            bytes: Bytes::from_static(b"GIF89a"),
        };
        assert_eq!(image.data_url(), "data:image/gif;base64,R0lGODlh");
    }
}
