//! Frame decoding
//!
//! Turns a file path or an in-memory encoded image into a [`GrayFrame`].
//! The container format is guessed from the content, so any format the
//! `image` crate was built with is accepted. Color images are reduced to
//! grayscale with BT.601 luma weights; single-channel images keep their
//! intensities as-is.

use crate::errors::TamperError;
use crate::frame::GrayFrame;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Where an encoded frame comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl FrameSource {
    pub fn describe(&self) -> String {
        match self {
            FrameSource::Path(path) => path.display().to_string(),
            FrameSource::Bytes(bytes) => format!("<{} byte buffer>", bytes.len()),
        }
    }
}

impl From<PathBuf> for FrameSource {
    fn from(path: PathBuf) -> Self {
        FrameSource::Path(path)
    }
}

impl From<&Path> for FrameSource {
    fn from(path: &Path) -> Self {
        FrameSource::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for FrameSource {
    fn from(bytes: Vec<u8>) -> Self {
        FrameSource::Bytes(bytes)
    }
}

impl From<&[u8]> for FrameSource {
    fn from(bytes: &[u8]) -> Self {
        FrameSource::Bytes(bytes.to_vec())
    }
}

/// Decode `source` into a grayscale frame.
pub fn decode_frame(source: &FrameSource) -> Result<GrayFrame, TamperError> {
    let image = match source {
        FrameSource::Path(path) => decode_path(path)?,
        FrameSource::Bytes(bytes) => decode_bytes(bytes)?,
    };
    to_gray(image)
}

fn decode_path(path: &Path) -> Result<DynamicImage, TamperError> {
    if !path.is_file() {
        return Err(TamperError::invalid_argument(format!(
            "not a readable image file: {}",
            path.display()
        )));
    }

    let reader = ImageReader::open(path)
        .map_err(|e| {
            TamperError::invalid_argument(format!("failed to open {}: {}", path.display(), e))
        })?
        .with_guessed_format()
        .map_err(|e| {
            TamperError::decode_failure(format!("failed to read {}: {}", path.display(), e))
        })?;

    reader.decode().map_err(|e| {
        TamperError::decode_failure(format!("failed to decode {}: {}", path.display(), e))
    })
}

fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, TamperError> {
    if bytes.is_empty() {
        return Err(TamperError::decode_failure("empty input buffer"));
    }

    ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| TamperError::decode_failure(format!("failed to read buffer: {}", e)))?
        .decode()
        .map_err(|e| TamperError::decode_failure(format!("failed to decode buffer: {}", e)))
}

fn to_gray(image: DynamicImage) -> Result<GrayFrame, TamperError> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(TamperError::decode_failure(format!(
            "image decoded to an empty buffer ({}x{})",
            width, height
        )));
    }

    log::debug!(
        "Decoded {}x{} image ({:?})",
        width,
        height,
        image.color()
    );

    if image.color().has_color() {
        let rgb = image.to_rgb8();
        GrayFrame::from_rgb(rgb.as_raw(), width, height)
    } else {
        let luma = image.to_luma8();
        GrayFrame::new(luma.into_raw(), width, height)
    }
}
