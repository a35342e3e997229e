//! Buffers a `multipart/form-data` body into text fields and at most one file.
//!
//! The file is expected in the part named `file`; every other named part is
//! read as UTF-8 text. A blank file input arrives as a `file` part with an
//! empty filename and no content, which is treated as "no file".

use crate::error::{AppError, Result};
use crate::store::files::Upload;
use actix_multipart::Multipart;
use futures_util::StreamExt;
use std::collections::HashMap;

const FILE_FIELD: &str = "file";
const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;

#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<Upload>,
}

impl MultipartForm {
    pub async fn read(mut payload: Multipart, max_upload_bytes: usize) -> Result<Self> {
        let mut form = Self::default();

        while let Some(item) = payload.next().await {
            let mut field = item?;
            let name = field
                .content_disposition()
                .and_then(|cd| cd.get_name().map(|n| n.to_string()));

            match name.as_deref() {
                Some(FILE_FIELD) => {
                    let filename = field
                        .content_disposition()
                        .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
                        .unwrap_or_default();

                    let mut bytes = Vec::new();
                    while let Some(chunk) = field.next().await {
                        let chunk = chunk?;
                        if bytes.len() + chunk.len() > max_upload_bytes {
                            return Err(AppError::PayloadTooLarge(max_upload_bytes));
                        }
                        bytes.extend_from_slice(&chunk);
                    }

                    if filename.is_empty() {
                        if bytes.is_empty() {
                            continue;
                        }
                        return Err(AppError::validation("uploaded file has no filename"));
                    }
                    form.file = Some(Upload { filename, bytes });
                }

                Some(other) => {
                    let other = other.to_string();
                    let mut bytes = Vec::new();
                    while let Some(chunk) = field.next().await {
                        let chunk = chunk?;
                        if bytes.len() + chunk.len() > MAX_TEXT_FIELD_BYTES {
                            return Err(AppError::PayloadTooLarge(MAX_TEXT_FIELD_BYTES));
                        }
                        bytes.extend_from_slice(&chunk);
                    }
                    let value = String::from_utf8(bytes).map_err(|_| {
                        AppError::validation(format!("field `{}` is not valid UTF-8", other))
                    })?;
                    form.fields.insert(other, value);
                }

                None => {}
            }
        }

        Ok(form)
    }

    /// Value of a text field that must be present and non-blank.
    pub fn required(&self, name: &str) -> Result<String> {
        self.optional(name)
            .ok_or_else(|| AppError::validation(format!("field `{}` is required", name)))
    }

    /// Value of a text field, `None` when absent or blank.
    pub fn optional(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }

    /// Like `optional`, parsed as an integer.
    pub fn optional_i64(&self, name: &str) -> Result<Option<i64>> {
        self.optional(name)
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|_| {
                    AppError::validation(format!("field `{}` must be an integer", name))
                })
            })
            .transpose()
    }

    pub fn required_i64(&self, name: &str) -> Result<i64> {
        self.optional_i64(name)?
            .ok_or_else(|| AppError::validation(format!("field `{}` is required", name)))
    }

    pub fn take_file(&mut self) -> Option<Upload> {
        self.file.take()
    }

    pub fn require_file(&mut self) -> Result<Upload> {
        self.take_file()
            .ok_or_else(|| AppError::validation(format!("field `{}` is required", FILE_FIELD)))
    }
}
