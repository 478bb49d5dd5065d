//! Strategy: a context delegating its work to an interchangeable algorithm.
//!
//! [`Filter`] holds at most one [`FilterStrategy`] and can swap it at any time. The two
//! strategies work on a plain RGB [`Image`].

use std::fmt;
use tracing::{info, warn};

/// An RGB image, pixels stored row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 3]>,
}

impl Image {
    /// Returns `None` when the pixel count does not match `width * height`, or when that
    /// product overflows.
    pub fn new(width: usize, height: usize, pixels: Vec<[u8; 3]>) -> Option<Self> {
        let len = width.checked_mul(height)?;
        (pixels.len() == len).then_some(Self { width, height, pixels })
    }

    /// Returns `None` when `width * height` overflows.
    pub fn filled(width: usize, height: usize, pixel: [u8; 3]) -> Option<Self> {
        let len = width.checked_mul(height)?;
        Some(Self { width, height, pixels: vec![pixel; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[[u8; 3]] {
        &self.pixels
    }

    fn map_pixels<F: FnMut([u8; 3]) -> [u8; 3]>(mut self, mut f: F) -> Self {
        for pixel in &mut self.pixels {
            *pixel = f(*pixel);
        }
        self
    }
}

pub trait FilterStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn process(&self, image: Image) -> Image;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SepiaFilter;

impl FilterStrategy for SepiaFilter {
    fn name(&self) -> &'static str {
        "sepia"
    }

    fn process(&self, image: Image) -> Image {
        info!("processing SEPIA filter...");
        image.map_pixels(|[r, g, b]| {
            let (r, g, b) = (f32::from(r), f32::from(g), f32::from(b));
            [
                clamp(0.393 * r + 0.769 * g + 0.189 * b),
                clamp(0.349 * r + 0.686 * g + 0.168 * b),
                clamp(0.272 * r + 0.534 * g + 0.131 * b),
            ]
        })
    }
}

/// Pushes every channel to 0 or 255 around `threshold`.
#[derive(Debug, Clone, Copy)]
pub struct HighContrastFilter {
    threshold: u8,
}

impl Default for HighContrastFilter {
    fn default() -> Self {
        Self { threshold: 128 }
    }
}

impl HighContrastFilter {
    pub fn with_threshold(threshold: u8) -> Self {
        Self { threshold }
    }
}

impl FilterStrategy for HighContrastFilter {
    fn name(&self) -> &'static str {
        "high contrast"
    }

    fn process(&self, image: Image) -> Image {
        info!("processing HIGH CONTRAST filter...");
        let threshold = self.threshold;
        image.map_pixels(|pixel| pixel.map(|channel| if channel >= threshold { u8::MAX } else { 0 }))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "rounded and clamped to the u8 range")]
fn clamp(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// The strategy context.
#[derive(Default)]
pub struct Filter {
    strategy: Option<Box<dyn FilterStrategy>>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_strategy(&mut self, strategy: impl FilterStrategy + 'static) {
        self.strategy = Some(Box::new(strategy));
    }

    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }

    /// Applies the current strategy; without one the image is returned unchanged.
    pub fn apply(&self, image: Image) -> Image {
        let image = match &self.strategy {
            Some(strategy) => strategy.process(image),
            None => {
                warn!("no filter strategy set, image left untouched");
                image
            }
        };
        info!("filter applied");
        image
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").field("strategy", &self.strategy.as_ref().map(|s| s.name())).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> Image {
        Image::new(2, 1, vec![[200, 100, 50], [10, 130, 255]]).unwrap()
    }

    #[test]
    fn test_image_size_checked() {
        assert!(Image::new(2, 2, vec![[0, 0, 0]]).is_none());
        assert_eq!(Image::filled(3, 2, [1, 2, 3]).unwrap().pixels().len(), 6);
    }

    #[test]
    fn test_image_size_overflow() {
        assert!(Image::new(usize::MAX, 2, vec![]).is_none());
        assert!(Image::filled(usize::MAX, 2, [0, 0, 0]).is_none());
    }

    #[test]
    fn test_high_contrast() {
        let result = HighContrastFilter::default().process(image());

        assert_eq!(result.pixels(), &[[255, 0, 0], [0, 255, 255]]);
    }

    #[test]
    fn test_sepia() {
        let result = SepiaFilter.process(Image::filled(1, 1, [100, 100, 100]).unwrap());

        // 135.1, 120.3, 93.7
        assert_eq!(result.pixels(), &[[135, 120, 94]]);
    }

    #[test]
    fn test_sepia_saturates() {
        let result = SepiaFilter.process(Image::filled(1, 1, [255, 255, 255]).unwrap());

        assert_eq!(result.pixels(), &[[255, 255, 239]]);
    }

    #[test]
    fn test_swap_strategy() {
        let mut filter = Filter::new();

        filter.set_strategy(HighContrastFilter::with_threshold(100));
        let contrasted = filter.apply(image());
        assert_eq!(contrasted.pixels(), &[[255, 255, 0], [0, 255, 255]]);

        filter.set_strategy(SepiaFilter);
        let sepia = filter.apply(image());
        assert_eq!(sepia, SepiaFilter.process(image()));
    }

    #[test]
    fn test_without_strategy() {
        let mut filter = Filter::new();
        assert_eq!(filter.apply(image()), image());

        filter.set_strategy(SepiaFilter);
        filter.clear_strategy();
        assert_eq!(filter.apply(image()), image());
    }
}
