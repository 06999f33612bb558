use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::io::Cursor;
use std::path::Path;

use crate::element::ImagePayload;
use crate::error::ImageIntakeError;

/// Picks up files dropped onto the window and turns images into payloads
/// ready for `add_image_object`.
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect newly dropped files from the UI context.
    /// Returns true if any new files arrived.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if i.raw.dropped_files.is_empty() {
                false
            } else {
                self.dropped_files = i.raw.dropped_files.clone();
                true
            }
        })
    }

    /// Decode the pending dropped files; anything that isn't a readable
    /// image is logged and skipped
    pub fn take_image_payloads(&mut self) -> Vec<ImagePayload> {
        let mut payloads = Vec::new();

        for file in self.dropped_files.drain(..) {
            let file_name = if let Some(path) = &file.path {
                path.display().to_string()
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };

            if !is_image_file(&file) {
                log::warn!("Dropped file is not a supported type: {}", file_name);
                continue;
            }

            let result = if let Some(bytes) = &file.bytes {
                image_payload_from_bytes(bytes)
            } else if let Some(path) = &file.path {
                load_image_payload(path)
            } else {
                log::warn!("Dropped file has no accessible data: {}", file_name);
                continue;
            };

            match result {
                Ok(payload) => {
                    log::info!(
                        "Accepted image {} ({}x{})",
                        file_name,
                        payload.natural_width,
                        payload.natural_height
                    );
                    payloads.push(payload);
                }
                Err(err) => log::error!("Failed to load image {}: {}", file_name, err),
            }
        }

        payloads
    }
}

/// Check if a file is an image based on MIME type or extension
fn is_image_file(file: &egui::DroppedFile) -> bool {
    if !file.mime.is_empty() {
        file.mime.starts_with("image/")
    } else if let Some(ext) = file.path.as_ref().and_then(|path| path.extension()) {
        let ext = ext.to_string_lossy().to_lowercase();
        matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp")
    } else {
        false
    }
}

pub fn load_image_payload(path: &Path) -> Result<ImagePayload, ImageIntakeError> {
    let bytes = std::fs::read(path)?;
    image_payload_from_bytes(&bytes)
}

/// Read the image header for its size and embed the bytes as a data URL
pub fn image_payload_from_bytes(bytes: &[u8]) -> Result<ImagePayload, ImageIntakeError> {
    let format = image::guess_format(bytes)?;
    let (natural_width, natural_height) =
        image::ImageReader::with_format(Cursor::new(bytes), format).into_dimensions()?;

    Ok(ImagePayload {
        src: format!(
            "data:{};base64,{}",
            format.to_mime_type(),
            STANDARD.encode(bytes)
        ),
        natural_width,
        natural_height,
    })
}

/// Raw bytes behind a `data:<mime>;base64,<payload>` URL
pub fn decode_data_url(src: &str) -> Result<Vec<u8>, ImageIntakeError> {
    let encoded = src
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .map(|(_, payload)| payload)
        .ok_or_else(|| ImageIntakeError::NotDataUrl(src.chars().take(32).collect()))?;
    Ok(STANDARD.decode(encoded)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let image = image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, image::ImageFormat::Png)
            .expect("encode png");
        bytes.into_inner()
    }

    #[test]
    fn payload_carries_natural_size_and_data_url() {
        let png = tiny_png();
        let payload = image_payload_from_bytes(&png).expect("payload");
        assert_eq!((payload.natural_width, payload.natural_height), (4, 2));
        assert!(payload.src.starts_with("data:image/png;base64,"));
        assert_eq!(decode_data_url(&payload.src).expect("decode"), png);
    }

    #[test]
    fn size_comes_from_the_header() {
        let image = image::RgbaImage::from_pixel(64, 48, image::Rgba([0, 128, 255, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        image
            .write_to(&mut bytes, image::ImageFormat::Png)
            .expect("encode png");
        let mut png = bytes.into_inner();
        // Drop the trailer and the tail of the pixel data
        png.truncate(png.len() - 20);

        let payload = image_payload_from_bytes(&png).expect("payload");
        assert_eq!((payload.natural_width, payload.natural_height), (64, 48));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(image_payload_from_bytes(b"definitely not an image").is_err());
        assert!(matches!(
            decode_data_url("https://example.com/cat.png"),
            Err(ImageIntakeError::NotDataUrl(_))
        ));
    }
}
