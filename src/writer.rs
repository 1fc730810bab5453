use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose, Engine as _};

use crate::{
    error::{GeminiError, Result},
    models::ImagePayload,
};

/// Decodes the inline payload and writes `<output_dir>/<name>.<ext>`,
/// overwriting any existing file. The extension is `png` when the MIME type
/// mentions png and `jpg` otherwise; other image subtypes land as `.jpg`.
pub fn save_image(output_dir: &Path, name: &str, payload: &ImagePayload) -> Result<PathBuf> {
    let ext = if payload.mime_type.contains("png") {
        "png"
    } else {
        "jpg"
    };
    let path = output_dir.join(format!("{}.{}", name, ext));

    let image_bytes = general_purpose::STANDARD
        .decode(&payload.data)
        .map_err(|e| GeminiError::ResponseError(format!("invalid base64 image data: {}", e)))?;

    fs::write(&path, image_bytes)?;

    log::info!("💾 Saved: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_output_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gemgen-writer-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn png_payload_gets_png_extension_and_exact_bytes() {
        let dir = temp_output_dir();
        let raw = b"not really a png, but the bytes must round-trip";
        let payload = ImagePayload {
            mime_type: "image/png".into(),
            data: general_purpose::STANDARD.encode(raw),
        };

        let path = save_image(&dir, "hero-bg", &payload).unwrap();
        assert_eq!(path, dir.join("hero-bg.png"));
        assert_eq!(fs::read(&path).unwrap(), raw);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn non_png_mime_defaults_to_jpg() {
        let dir = temp_output_dir();
        let payload = ImagePayload {
            mime_type: "image/jpeg".into(),
            data: general_purpose::STANDARD.encode(b"jpeg bytes"),
        };

        let path = save_image(&dir, "product-pet", &payload).unwrap();
        assert_eq!(path, dir.join("product-pet.jpg"));

        // The heuristic treats any other subtype as jpeg too.
        let webp = ImagePayload {
            mime_type: "image/webp".into(),
            data: general_purpose::STANDARD.encode(b"webp bytes"),
        };
        let path = save_image(&dir, "product-webp", &webp).unwrap();
        assert_eq!(path, dir.join("product-webp.jpg"));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn existing_file_is_overwritten() {
        let dir = temp_output_dir();
        let first = ImagePayload {
            mime_type: "image/png".into(),
            data: general_purpose::STANDARD.encode(b"first"),
        };
        let second = ImagePayload {
            mime_type: "image/png".into(),
            data: general_purpose::STANDARD.encode(b"second"),
        };

        save_image(&dir, "modular-plant-1", &first).unwrap();
        let path = save_image(&dir, "modular-plant-1", &second).unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn invalid_base64_is_a_response_error() {
        let dir = temp_output_dir();
        let payload = ImagePayload {
            mime_type: "image/png".into(),
            data: "%%% not base64 %%%".into(),
        };

        let err = save_image(&dir, "broken", &payload).unwrap_err();
        assert!(matches!(err, GeminiError::ResponseError(_)));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = std::env::temp_dir().join(format!("gemgen-missing-{}", Uuid::new_v4()));
        let payload = ImagePayload {
            mime_type: "image/png".into(),
            data: general_purpose::STANDARD.encode(b"bytes"),
        };

        let err = save_image(&dir, "orphan", &payload).unwrap_err();
        assert!(matches!(err, GeminiError::IoError(_)));
    }
}
