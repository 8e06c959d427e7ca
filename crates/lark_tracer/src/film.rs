//! Film: the linear color buffer a render writes into, plus image output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::bucket::BucketResult;
use crate::Color;
use lark_math::Interval;
use thiserror::Error;

/// Errors that can occur while writing an image.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported output format '{0}' (expected .ppm or .png)")]
    UnsupportedFormat(String),
}

/// Result type for output operations.
pub type OutputResult<T> = Result<T, OutputError>;

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f32) -> f32 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit RGB.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let quantize = |c: f32| (255.0 * Interval::UNIT.clamp(linear_to_gamma(c))).round() as u8;
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Linear, unclamped image buffer.
pub struct Film {
    pub width: u32,
    pub height: u32,
    pixels: Vec<Color>,
}

impl Film {
    /// Create a new film filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Copy a rendered bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        let bucket = &result.bucket;
        for (i, color) in result.pixels.iter().enumerate() {
            let x = bucket.x + i as u32 % bucket.width;
            let y = bucket.y + i as u32 / bucket.width;
            self.set(x, y, *color);
        }
    }

    /// Convert to gamma-corrected RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }

    /// Write an ASCII PPM (P3).
    pub fn write_ppm<W: Write>(&self, writer: &mut W) -> OutputResult<()> {
        writeln!(writer, "P3")?;
        writeln!(writer, "{} {}", self.width, self.height)?;
        writeln!(writer, "255")?;

        for color in &self.pixels {
            let [r, g, b] = color_to_rgb(*color);
            writeln!(writer, "{} {} {}", r, g, b)?;
        }

        Ok(())
    }

    /// Save as an ASCII PPM file.
    pub fn save_ppm<P: AsRef<Path>>(&self, path: P) -> OutputResult<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Save as a PNG file.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> OutputResult<()> {
        image::save_buffer(
            path,
            &self.to_rgb8(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )?;
        Ok(())
    }

    /// Save in the format implied by the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> OutputResult<()> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "ppm" => self.save_ppm(path),
            "png" => self.save_png(path),
            _ => Err(OutputError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::Bucket;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0), 0.0);
        assert_eq!(linear_to_gamma(-1.0), 0.0);
        assert!((linear_to_gamma(1.0) - 1.0).abs() < 0.0001);
        assert!((linear_to_gamma(0.25) - 0.5).abs() < 0.0001);
    }

    #[test]
    fn test_color_to_rgb_clamps_over_bright() {
        assert_eq!(color_to_rgb(Color::new(0.0, 0.25, 7.0)), [0, 128, 255]);
        assert_eq!(color_to_rgb(Color::new(-2.0, 1.0, f32::NAN)), [0, 255, 0]);
    }

    #[test]
    fn test_set_get() {
        let mut film = Film::new(4, 3);
        film.set(3, 2, Color::new(1.0, 2.0, 3.0));
        assert_eq!(film.get(3, 2), Color::new(1.0, 2.0, 3.0));
        assert_eq!(film.get(0, 0), Color::ZERO);
        assert_eq!(film.pixels().len(), 12);
    }

    #[test]
    fn test_write_bucket() {
        let mut film = Film::new(4, 4);
        let bucket = Bucket::new(2, 1, 2, 2, 0);
        let pixels = vec![
            Color::splat(1.0),
            Color::splat(2.0),
            Color::splat(3.0),
            Color::splat(4.0),
        ];
        film.write_bucket(&BucketResult::new(bucket, pixels));

        assert_eq!(film.get(2, 1), Color::splat(1.0));
        assert_eq!(film.get(3, 1), Color::splat(2.0));
        assert_eq!(film.get(2, 2), Color::splat(3.0));
        assert_eq!(film.get(3, 2), Color::splat(4.0));
        assert_eq!(film.get(1, 1), Color::ZERO);
    }

    #[test]
    fn test_ppm_layout() {
        let mut film = Film::new(2, 1);
        film.set(0, 0, Color::ONE);

        let mut out = Vec::new();
        film.write_ppm(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "P3\n2 1\n255\n255 255 255\n0 0 0\n");
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let film = Film::new(1, 1);
        assert!(matches!(
            film.save("render.tiff"),
            Err(OutputError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_save_ppm_and_png() {
        let dir = std::env::temp_dir().join(format!("lark_film_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut film = Film::new(3, 2);
        film.set(1, 1, Color::new(0.5, 0.25, 1.0));

        let ppm = dir.join("out.ppm");
        let png = dir.join("out.png");
        film.save(&ppm).unwrap();
        film.save(&png).unwrap();

        assert!(std::fs::read_to_string(&ppm).unwrap().starts_with("P3\n3 2\n"));
        let decoded = image::open(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(1, 1).0, color_to_rgb(film.get(1, 1)));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
