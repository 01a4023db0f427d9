use image::{DynamicImage, ImageBuffer, imageops::FilterType};

use crate::foundation::core::{BitDepth, Resolution, Rgba};
use crate::foundation::error::{ZmergeError, ZmergeResult};

#[derive(Clone, Debug, PartialEq)]
/// Composited straight-alpha RGBA pixels in `[0, 1]`, row-major.
pub struct OutputBuffer {
    resolution: Resolution,
    pixels: Vec<Rgba>,
}

impl OutputBuffer {
    /// A buffer where every pixel is `fill`.
    pub fn new(resolution: Resolution, fill: Rgba) -> Self {
        Self {
            resolution,
            pixels: vec![fill; resolution.pixel_count()],
        }
    }

    /// Wrap existing row-major pixels.
    pub fn from_pixels(resolution: Resolution, pixels: Vec<Rgba>) -> ZmergeResult<Self> {
        if pixels.len() != resolution.pixel_count() {
            return Err(ZmergeError::resolution(format!(
                "output of {resolution} expects {} pixels, got {}",
                resolution.pixel_count(),
                pixels.len()
            )));
        }
        Ok(Self { resolution, pixels })
    }

    /// Pixel dimensions.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Row-major pixels.
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Rgba] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.resolution.width || y >= self.resolution.height {
            return None;
        }
        Some(self.pixels[y as usize * self.resolution.width as usize + x as usize])
    }

    /// Interleaved RGBA16 samples.
    pub fn to_rgba16(&self) -> Vec<u16> {
        self.pixels
            .iter()
            .flat_map(|px| px.map(|v| quantize(v, BitDepth::Sixteen) as u16))
            .collect()
    }

    /// Interleaved RGBA8 samples.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|px| px.map(|v| quantize(v, BitDepth::Eight) as u8))
            .collect()
    }

    /// Quantize to `depth` and, when `target` is set to a non-empty size that differs
    /// from the buffer's, resample with a bicubic (Catmull-Rom) filter.
    pub fn assemble(
        &self,
        depth: BitDepth,
        target: Option<Resolution>,
    ) -> ZmergeResult<DynamicImage> {
        let Resolution { width, height } = self.resolution;
        let target = target.filter(|t| !t.is_empty() && *t != self.resolution);

        let img = match depth {
            BitDepth::Sixteen => {
                let buf =
                    ImageBuffer::<image::Rgba<u16>, _>::from_raw(width, height, self.to_rgba16())
                        .ok_or_else(|| ZmergeError::resolution("rgba16 buffer size mismatch"))?;
                match target {
                    Some(t) => DynamicImage::ImageRgba16(image::imageops::resize(
                        &buf,
                        t.width,
                        t.height,
                        FilterType::CatmullRom,
                    )),
                    None => DynamicImage::ImageRgba16(buf),
                }
            }
            BitDepth::Eight => {
                let buf = image::RgbaImage::from_raw(width, height, self.to_rgba8())
                    .ok_or_else(|| ZmergeError::resolution("rgba8 buffer size mismatch"))?;
                match target {
                    Some(t) => DynamicImage::ImageRgba8(image::imageops::resize(
                        &buf,
                        t.width,
                        t.height,
                        FilterType::CatmullRom,
                    )),
                    None => DynamicImage::ImageRgba8(buf),
                }
            }
        };
        Ok(img)
    }
}

/// `round(v * max)` clamped to `[0, max]`.
#[inline]
pub fn quantize(v: f32, depth: BitDepth) -> u32 {
    let max = depth.max_value();
    (v * max).round().clamp(0.0, max) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/render/assemble.rs"]
mod tests;
