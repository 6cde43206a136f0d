//! Brand mark.
//!
//! The logo is looked up in the asset directory by trying [`LOGO_CANDIDATES`]
//! in order. PNGs are decoded and drawn with half-block cells (two pixels
//! per cell), `.txt` files are used as ASCII art. When nothing loads the
//! built-in glyph is used, so resolving never fails.

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{Rgba, RgbaImage};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use thiserror::Error;
use unicode_width::UnicodeWidthStr;

use super::theme::COLOR_HEADER;

/// File names tried in the asset directory, first match wins.
pub const LOGO_CANDIDATES: [&str; 4] = ["logo.png", "logo@2x.png", "brand.png", "logo.txt"];

/// Largest logo drawn, in terminal cells.
pub const MAX_LOGO_WIDTH: u32 = 32;
pub const MAX_LOGO_HEIGHT: u32 = 8;

/// Pixels below this alpha are drawn as background.
const ALPHA_CUTOFF: u8 = 128;

const BUILTIN_GLYPH: [&str; 4] = [
    "  ▄▄▄▄▄▄▄▄▄  ",
    " █▀▀▀▀▀▀▀▀▀█ ",
    " █ ▀▀▀ ▀▀▀ █ ",
    " ▀▀▀▀▀▀▀▀▀▀▀ ",
];

#[derive(Debug, Error)]
enum LogoError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to decode image: {0}")]
    Image(#[from] image::ImageError),
    #[error("file is empty")]
    Empty,
    #[error("unsupported logo format")]
    Unsupported,
}

/// Where the logo came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogoSource {
    File(PathBuf),
    Builtin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Logo {
    source: LogoSource,
    lines: Vec<Line<'static>>,
}

impl Logo {
    /// Resolve the logo from `dir`, falling back to the built-in glyph.
    pub fn resolve(dir: &Path) -> Self {
        for candidate in LOGO_CANDIDATES {
            let path = dir.join(candidate);
            if !path.is_file() {
                continue;
            }
            match Self::load(&path) {
                Ok(lines) => {
                    tracing::debug!(path = %path.display(), "loaded logo");
                    return Self {
                        source: LogoSource::File(path),
                        lines,
                    };
                }
                Err(e) => tracing::warn!(path = %path.display(), "skipping logo: {}", e),
            }
        }
        Self::builtin()
    }

    pub fn builtin() -> Self {
        let style = Style::default().fg(COLOR_HEADER);
        Self {
            source: LogoSource::Builtin,
            lines: BUILTIN_GLYPH
                .iter()
                .map(|row| Line::from(Span::styled(*row, style)))
                .collect(),
        }
    }

    fn load(path: &Path) -> Result<Vec<Line<'static>>, LogoError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("png") => {
                let image = image::open(path)?.to_rgba8();
                if image.width() == 0 || image.height() == 0 {
                    return Err(LogoError::Empty);
                }
                Ok(half_blocks(&fit(image)))
            }
            Some("txt") => {
                let text = std::fs::read_to_string(path).map_err(|source| LogoError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                ascii_art(&text)
            }
            _ => Err(LogoError::Unsupported),
        }
    }

    pub fn source(&self) -> &LogoSource {
        &self.source
    }

    pub fn is_builtin(&self) -> bool {
        self.source == LogoSource::Builtin
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    /// Width in terminal columns.
    pub fn width(&self) -> u16 {
        self.lines.iter().map(Line::width).max().unwrap_or(0) as u16
    }

    /// Height in terminal rows.
    pub fn height(&self) -> u16 {
        self.lines.len() as u16
    }
}

impl Default for Logo {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Scale `image` down to fit the logo box, keeping its aspect ratio.
fn fit(image: RgbaImage) -> RgbaImage {
    let (w, h) = image.dimensions();
    let max_w = MAX_LOGO_WIDTH;
    let max_h = MAX_LOGO_HEIGHT * 2;
    if w <= max_w && h <= max_h {
        return image;
    }
    let scale = f64::min(max_w as f64 / w as f64, max_h as f64 / h as f64);
    let new_w = ((w as f64 * scale).round() as u32).max(1);
    let new_h = ((h as f64 * scale).round() as u32).max(1);
    image::imageops::resize(&image, new_w, new_h, FilterType::Triangle)
}

fn pixel_color(pixel: &Rgba<u8>) -> Option<Color> {
    let [r, g, b, a] = pixel.0;
    (a >= ALPHA_CUTOFF).then_some(Color::Rgb(r, g, b))
}

/// One line per pair of pixel rows: `▀` with the top pixel as foreground
/// and the bottom pixel as background.
fn half_blocks(image: &RgbaImage) -> Vec<Line<'static>> {
    let (w, h) = image.dimensions();
    (0..h)
        .step_by(2)
        .map(|y| {
            let spans: Vec<Span<'static>> = (0..w)
                .map(|x| {
                    let top = pixel_color(image.get_pixel(x, y));
                    let bottom = if y + 1 < h {
                        pixel_color(image.get_pixel(x, y + 1))
                    } else {
                        None
                    };
                    match (top, bottom) {
                        (None, None) => Span::raw(" "),
                        (Some(top), bottom) => Span::styled(
                            "▀",
                            Style::default().fg(top).bg(bottom.unwrap_or(Color::Reset)),
                        ),
                        (None, Some(bottom)) => {
                            Span::styled("▄", Style::default().fg(bottom))
                        }
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn ascii_art(text: &str) -> Result<Vec<Line<'static>>, LogoError> {
    let rows: Vec<&str> = text
        .lines()
        .map(str::trim_end)
        .take(MAX_LOGO_HEIGHT as usize)
        .collect();
    if rows.iter().all(|r| r.trim().is_empty()) {
        return Err(LogoError::Empty);
    }
    let style = Style::default().fg(COLOR_HEADER);
    Ok(rows
        .into_iter()
        .map(|row| {
            let row = if row.width() > MAX_LOGO_WIDTH as usize {
                super::helpers::truncate_to_width(row, MAX_LOGO_WIDTH as usize)
            } else {
                row.to_string()
            };
            Line::from(Span::styled(row, style))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, w: u32, h: u32, pixel: [u8; 4]) {
        RgbaImage::from_pixel(w, h, Rgba(pixel))
            .save(dir.join(name))
            .unwrap();
    }

    #[test]
    fn test_empty_dir_uses_builtin() {
        let dir = TempDir::new().unwrap();
        let logo = Logo::resolve(dir.path());
        assert!(logo.is_builtin());
        assert_eq!(logo.height(), BUILTIN_GLYPH.len() as u16);
    }

    #[test]
    fn test_missing_dir_uses_builtin() {
        let logo = Logo::resolve(Path::new("/nonexistent/stockdeck/assets"));
        assert!(logo.is_builtin());
    }

    #[test]
    fn test_png_rendered_as_half_blocks() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "logo.png", 4, 4, [255, 0, 0, 255]);

        let logo = Logo::resolve(dir.path());
        assert_eq!(logo.source(), &LogoSource::File(dir.path().join("logo.png")));
        assert_eq!(logo.height(), 2);
        assert_eq!(logo.width(), 4);

        let span = &logo.lines()[0].spans[0];
        assert_eq!(span.content, "▀");
        assert_eq!(span.style.fg, Some(Color::Rgb(255, 0, 0)));
        assert_eq!(span.style.bg, Some(Color::Rgb(255, 0, 0)));
    }

    #[test]
    fn test_transparent_pixels_are_blank() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "logo.png", 2, 2, [0, 0, 0, 0]);

        let logo = Logo::resolve(dir.path());
        assert!(logo.lines()[0].spans.iter().all(|s| s.content == " "));
    }

    #[test]
    fn test_large_png_scaled_to_fit() {
        let dir = TempDir::new().unwrap();
        write_png(dir.path(), "brand.png", 128, 64, [0, 128, 255, 255]);

        let logo = Logo::resolve(dir.path());
        assert!(logo.width() as u32 <= MAX_LOGO_WIDTH);
        assert!(logo.height() as u32 <= MAX_LOGO_HEIGHT);
    }

    #[test]
    fn test_candidates_tried_in_order() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logo.txt"), "SD\n").unwrap();
        write_png(dir.path(), "brand.png", 2, 2, [0, 0, 0, 255]);

        let logo = Logo::resolve(dir.path());
        assert_eq!(logo.source(), &LogoSource::File(dir.path().join("brand.png")));
    }

    #[test]
    fn test_corrupt_png_falls_through_to_next_candidate() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logo.png"), b"not a png").unwrap();
        std::fs::write(dir.path().join("logo.txt"), " /\\\n/__\\\n").unwrap();

        let logo = Logo::resolve(dir.path());
        assert_eq!(logo.source(), &LogoSource::File(dir.path().join("logo.txt")));
        assert_eq!(logo.height(), 2);
    }

    #[test]
    fn test_blank_text_logo_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logo.txt"), "  \n\n").unwrap();
        assert!(Logo::resolve(dir.path()).is_builtin());
    }
}
