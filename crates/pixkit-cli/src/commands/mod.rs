//! CLI command implementations

pub mod complex;
pub mod fill;
pub mod pipeline;

use std::fmt::Display;

use anyhow::{Result, bail};
use pixkit_core::{Element, Image, Masked, TypedImage};

/// Renders an image as a grid of right-aligned cells, one row per line.
pub fn format_grid<T: Element + Display>(image: &TypedImage<T>) -> String {
    let cells: Vec<String> = image.data().iter().map(|v| v.to_string()).collect();
    let width = cells.iter().map(String::len).max().unwrap_or(1);
    let mut out = String::new();
    for row in cells.chunks(image.width().max(1) as usize) {
        let line: Vec<String> = row.iter().map(|c| format!("{:>width$}", c)).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Renders a masked image as a grid, with masked pixels shown as `*`.
fn format_masked(
    width: i32,
    height: i32,
    masked: &dyn Masked,
    cell: impl Fn(i32, i32) -> String,
) -> String {
    let mut out = String::new();
    for row in 0..height {
        let line: Vec<String> = (0..width)
            .map(|col| {
                if masked.is_masked(row, col) {
                    "*".to_string()
                } else {
                    cell(row, col)
                }
            })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Renders any image the demo commands produce.
pub fn format_image(image: &Image) -> Result<String> {
    let text = match image {
        Image::Gray8(img) => format_grid(img),
        Image::Gray16(img) => format_grid(img),
        Image::Gray32(img) => format_grid(img),
        Image::Rgb(img) => format_grid(img),
        Image::OffsetGray32(img) => format_grid(img.image()),
        Image::OffsetRgb(img) => format_grid(img.image()),
        Image::MaskedGray8(img) => format_masked(img.width(), img.height(), img, |r, c| {
            img.image().pixel(r, c).to_string()
        }),
        Image::MaskedGray32(img) => format_masked(img.width(), img.height(), img, |r, c| {
            img.image().pixel(r, c).to_string()
        }),
        Image::MaskedRgb(img) => format_masked(img.width(), img.height(), img, |r, c| {
            img.color(r, c).to_string()
        }),
        other => bail!("cannot print {} images", other.format()),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixkit_core::{Complex32Image, Gray8Image, MaskedGray8Image};

    #[test]
    fn test_format_grid() {
        let mut img = Gray8Image::filled(3, 2, 5).unwrap();
        img.set_pixel(1, 2, -10);
        assert_eq!(format_grid(&img), "  5   5   5\n  5   5 -10\n");
    }

    #[test]
    fn test_format_masked() {
        let mut img = MaskedGray8Image::unmasked(Gray8Image::filled(2, 1, 3).unwrap());
        img.set_mask(0, 1);
        assert_eq!(format_image(&img.into()).unwrap(), "3 *\n");
    }

    #[test]
    fn test_format_complex_unsupported() {
        let img: Image = Complex32Image::new(1, 1).unwrap().into();
        assert!(format_image(&img).is_err());
    }
}
