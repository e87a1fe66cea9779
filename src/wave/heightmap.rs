//! Grayscale snapshot of the height field.

use std::path::Path;

use image::{GrayImage, Luma};

use super::WaveSurfaceState;
use crate::error::{ensure_positive, Result, SceneError};

/// Sample a square `extent_m` wide, centred on the origin, into a
/// `size_px`×`size_px` image. Mid gray is zero height; black and white are
/// `-amplitude` and `+amplitude`.
pub fn heightmap_image(
    state: &WaveSurfaceState,
    extent_m: f32,
    size_px: u32,
) -> Result<GrayImage> {
    let extent_m = ensure_positive("extent_m", extent_m)?;
    if size_px == 0 {
        return Err(SceneError::invalid("size_px", 0.0, "must be at least 1"));
    }
    let amplitude = state.amplitude();
    let step = extent_m / size_px as f32;
    let half = extent_m / 2.0;

    let mut img = GrayImage::new(size_px, size_px);
    for (px, pz, pixel) in img.enumerate_pixels_mut() {
        // Sample at pixel centres
        let x = (px as f32 + 0.5) * step - half;
        let z = (pz as f32 + 0.5) * step - half;
        let normalized = if amplitude > 0.0 {
            state.height_at(x, z) / amplitude
        } else {
            0.0
        };
        // Map [-1, 1] to grayscale [0, 255]
        let gray = ((normalized + 1.0) * 127.5).round().clamp(0.0, 255.0) as u8;
        *pixel = Luma([gray]);
    }
    Ok(img)
}

/// Write [`heightmap_image`] to a PNG file
pub fn save_heightmap(
    path: impl AsRef<Path>,
    state: &WaveSurfaceState,
    extent_m: f32,
    size_px: u32,
) -> Result<()> {
    heightmap_image(state, extent_m, size_px)?.save(path.as_ref())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;

    #[test]
    fn test_flat_surface_is_mid_gray() {
        let state = WaveSurfaceState::new(1.0, 0.0, 1.0, Rgb::WHITE).unwrap();
        let img = heightmap_image(&state, 10.0, 8).unwrap();
        assert!(img.pixels().all(|p| p.0[0] == 128));
    }

    #[test]
    fn test_waves_span_gray_range() {
        let state = WaveSurfaceState::new(1.0, 2.0, 1.0, Rgb::WHITE).unwrap();
        let img = heightmap_image(&state, 40.0, 64).unwrap();
        let min = img.pixels().map(|p| p.0[0]).min().unwrap();
        let max = img.pixels().map(|p| p.0[0]).max().unwrap();
        assert!(min < 40, "min {min}");
        assert!(max > 215, "max {max}");
    }

    #[test]
    fn test_rejects_empty_image() {
        let state = WaveSurfaceState::new(1.0, 1.0, 1.0, Rgb::WHITE).unwrap();
        assert!(heightmap_image(&state, 10.0, 0).is_err());
    }
}
