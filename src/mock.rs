//! Mock image fixtures for exercising the pipeline without a device.
//!
//! Golden and candidate trees are normally populated by hardware and
//! emulator runs; this module generates small solid-color PNGs so the
//! walk/compare/report path can be driven locally and in tests.

use image::{ImageBuffer, Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;

use crate::compare::{GateError, GateResult};

/// A solid-color RGB image fixture
#[derive(Debug, Clone)]
pub struct MockImage {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Fill color
    pub color: [u8; 3],
}

impl MockImage {
    pub fn new(width: u32, height: u32, color: [u8; 3]) -> Self {
        Self {
            width,
            height,
            color,
        }
    }

    /// Encode the fixture as PNG bytes.
    pub fn to_png(&self) -> GateResult<Vec<u8>> {
        let img: RgbImage =
            ImageBuffer::from_pixel(self.width, self.height, Rgb(self.color));
        let mut png_data = Vec::new();
        img.write_to(&mut Cursor::new(&mut png_data), image::ImageFormat::Png)
            .map_err(|e| GateError::Io(std::io::Error::other(e.to_string())))?;
        Ok(png_data)
    }

    /// Write the fixture to disk, creating parent directories as needed.
    pub fn write(&self, path: &Path) -> GateResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_png()?)?;
        Ok(())
    }
}

/// Parse a hex color string (e.g., "ff0000") into RGB bytes.
pub fn parse_hex_color(hex: &str) -> GateResult<[u8; 3]> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 {
        return Err(GateError::Io(std::io::Error::other(
            "Color must be 6 hex digits (e.g., 'ff0000')",
        )));
    }
    let parse = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|e| GateError::Io(std::io::Error::other(e.to_string())))
    };
    Ok([parse(0..2)?, parse(2..4)?, parse(4..6)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_png_round_trip() {
        let fixture = MockImage::new(16, 8, [10, 20, 30]);
        let png = fixture.to_png().expect("encode");
        let decoded = image::load_from_memory(&png).expect("decode").to_rgb8();
        assert_eq!(decoded.width(), 16);
        assert_eq!(decoded.height(), 8);
        assert_eq!(decoded.get_pixel(5, 5).0, [10, 20, 30]);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("suite/a.png");
        MockImage::new(4, 4, [0, 0, 0]).write(&path).expect("write");
        assert!(path.exists());
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("ff0000").unwrap(), [255, 0, 0]);
        assert_eq!(parse_hex_color("#00ff7f").unwrap(), [0, 255, 127]);
        assert!(parse_hex_color("xyz").is_err());
        assert!(parse_hex_color("fff").is_err());
    }
}
