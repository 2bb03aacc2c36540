use std::path::Path;
use image::{DynamicImage, Rgb, RgbImage};
use crate::{ColorSample, Grid, PaletteError};

impl From<&RgbImage> for Grid<ColorSample> {
    fn from(image: &RgbImage) -> Self {
        Grid::from_fn(image.height() as usize, image.width() as usize, |row, col| {
            let Rgb(channels) = *image.get_pixel(col as u32, row as u32);
            ColorSample::from(channels)
        })
    }
}

/// Converts a grid back into an RGB image of the same dimensions.
pub fn grid_to_rgb_image(grid: &Grid<ColorSample>) -> Result<RgbImage, PaletteError> {
    let (height, width) = match (u32::try_from(grid.height()), u32::try_from(grid.width())) {
        (Ok(height), Ok(width)) => (height, width),
        _ => {
            return Err(PaletteError::InvalidDimensions(format!(
                "{}x{} grid is too large for an image",
                grid.height(),
                grid.width()
            )))
        }
    };
    Ok(RgbImage::from_fn(width, height, |x, y| {
        Rgb(grid[(y as usize, x as usize)].channels())
    }))
}

/// Decodes an image file into a grid of colours. Images with an alpha channel lose it and
/// greyscale images repeat their luma value across all three channels.
pub fn open_grid<P: AsRef<Path>>(path: P) -> Result<Grid<ColorSample>, PaletteError> {
    let image = image::open(path.as_ref()).map_err(|err| {
        PaletteError::Image(format!("{}: {err}", path.as_ref().display()))
    })?;
    Ok(Grid::from(&to_rgb(image)))
}

/// Encodes a grid into an image file, the format chosen by the file extension.
pub fn save_grid<P: AsRef<Path>>(grid: &Grid<ColorSample>, path: P) -> Result<(), PaletteError> {
    grid_to_rgb_image(grid)?
        .save(path.as_ref())
        .map_err(|err| PaletteError::Image(format!("{}: {err}", path.as_ref().display())))
}

fn to_rgb(image: DynamicImage) -> RgbImage {
    match image {
        DynamicImage::ImageRgb8(rgb) => rgb,
        other => other.to_rgb8(),
    }
}
