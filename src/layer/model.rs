use std::str::FromStr;

use image::DynamicImage;

use crate::foundation::core::{MAX_8_BIT, MAX_16_BIT, Resolution, Rgba, is_unit_rgba};
use crate::foundation::error::{ZmergeError, ZmergeResult};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
/// Color-combination function applied where a layer overlaps the accumulated result.
///
/// One mode is carried per layer and applies to every pixel of it.
pub enum BlendMode {
    /// The layer's color replaces what is behind it (`S`).
    #[default]
    Normal,
    /// `R * S`.
    Multiply,
    /// `R + S - R * S`.
    Screen,
}

impl BlendMode {
    /// Decode the numeric tag used by layer lists: `0` Normal, `1` Multiply, `2` Screen.
    pub fn from_code(code: i64) -> ZmergeResult<Self> {
        match code {
            0 => Ok(Self::Normal),
            1 => Ok(Self::Multiply),
            2 => Ok(Self::Screen),
            other => Err(ZmergeError::blend_mode(format!(
                "code {other} (expected 0 normal, 1 multiply or 2 screen)"
            ))),
        }
    }

    /// Numeric tag of this mode.
    pub fn code(self) -> i64 {
        match self {
            Self::Normal => 0,
            Self::Multiply => 1,
            Self::Screen => 2,
        }
    }
}

impl FromStr for BlendMode {
    type Err = ZmergeError;

    /// Accepts a numeric tag (`"1"`) or a case-insensitive name (`"multiply"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(code) = s.parse::<i64>() {
            return Self::from_code(code);
        }
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "multiply" => Ok(Self::Multiply),
            "screen" => Ok(Self::Screen),
            _ => Err(ZmergeError::blend_mode(format!("'{s}'"))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// One layer's data at one pixel.
pub struct Sample {
    /// Straight RGBA in `[0, 1]`.
    pub rgba: Rgba,
    /// Depth value; whether larger is nearer depends on the run's `invert_z`.
    pub z: u16,
    /// Blend mode of the owning layer.
    pub mode: BlendMode,
}

#[derive(Clone, Debug)]
/// One rendered input: a color+alpha grid and a co-registered depth grid.
///
/// Both grids are row-major and share [`Layer::resolution`].
pub struct Layer {
    resolution: Resolution,
    rgba: Vec<Rgba>,
    depth: Vec<u16>,
    mode: BlendMode,
}

impl Layer {
    /// Build a layer from raw row-major grids.
    ///
    /// Fails with [`ZmergeError::ResolutionMismatch`] when either grid's length is not
    /// `width * height`, and with [`ZmergeError::Format`] when a channel is not a
    /// finite value in `[0, 1]`.
    pub fn new(
        resolution: Resolution,
        rgba: Vec<Rgba>,
        depth: Vec<u16>,
        mode: BlendMode,
    ) -> ZmergeResult<Self> {
        let expected = resolution.pixel_count();
        if rgba.len() != expected || depth.len() != expected {
            return Err(ZmergeError::resolution(format!(
                "layer of {resolution} expects {expected} samples, got {} color and {} depth",
                rgba.len(),
                depth.len()
            )));
        }
        if let Some(idx) = rgba.iter().position(|px| !is_unit_rgba(px)) {
            return Err(ZmergeError::format(format!(
                "sample {idx} has channels {:?} outside [0, 1]",
                rgba[idx]
            )));
        }
        Ok(Self {
            resolution,
            rgba,
            depth,
            mode,
        })
    }

    /// A layer where every pixel carries the same color and depth.
    pub fn filled(
        resolution: Resolution,
        rgba: Rgba,
        z: u16,
        mode: BlendMode,
    ) -> ZmergeResult<Self> {
        let n = resolution.pixel_count();
        Self::new(resolution, vec![rgba; n], vec![z; n], mode)
    }

    /// Build a layer from decoded images.
    ///
    /// `color` must be 8- or 16-bit RGB or RGBA; RGB gets an opaque alpha channel.
    /// `depth` must be 16-bit single-channel grayscale. Both must have the same size.
    pub fn from_images(
        color: &DynamicImage,
        depth: &DynamicImage,
        mode: BlendMode,
    ) -> ZmergeResult<Self> {
        let rgba = normalize_color(color)?;

        let depth_channels = depth.color().channel_count();
        if depth_channels != 1 {
            return Err(ZmergeError::format(format!(
                "depth image must be single-channel grayscale, got {depth_channels} channels"
            )));
        }
        let DynamicImage::ImageLuma16(z) = depth else {
            return Err(ZmergeError::format(format!(
                "depth image must be 16-bit, got {:?}",
                depth.color()
            )));
        };

        let color_res = Resolution::new(color.width(), color.height());
        let depth_res = Resolution::new(z.width(), z.height());
        if color_res != depth_res {
            return Err(ZmergeError::resolution(format!(
                "color image is {color_res} but depth image is {depth_res}"
            )));
        }

        Self::new(color_res, rgba, z.as_raw().clone(), mode)
    }

    /// Pixel dimensions.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.resolution.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.resolution.height
    }

    /// Blend mode applied to every pixel of this layer.
    pub fn mode(&self) -> BlendMode {
        self.mode
    }

    /// Row-major color+alpha grid.
    pub fn rgba(&self) -> &[Rgba] {
        &self.rgba
    }

    /// Row-major depth grid.
    pub fn depth(&self) -> &[u16] {
        &self.depth
    }

    pub(crate) fn depth_mut(&mut self) -> &mut Vec<u16> {
        &mut self.depth
    }

    /// Sample at a linear (row-major) pixel index.
    #[inline]
    pub fn sample_at_index(&self, idx: usize) -> Sample {
        Sample {
            rgba: self.rgba[idx],
            z: self.depth[idx],
            mode: self.mode,
        }
    }

    /// Sample at `(x, y)`, or `None` outside the grid.
    pub fn sample(&self, x: u32, y: u32) -> Option<Sample> {
        if x >= self.resolution.width || y >= self.resolution.height {
            return None;
        }
        let idx = y as usize * self.resolution.width as usize + x as usize;
        Some(self.sample_at_index(idx))
    }
}

fn normalize_color(color: &DynamicImage) -> ZmergeResult<Vec<Rgba>> {
    let n8 = |v: u8| f32::from(v) / MAX_8_BIT;
    let n16 = |v: u16| f32::from(v) / MAX_16_BIT;

    match color {
        DynamicImage::ImageRgb8(img) => Ok(img
            .pixels()
            .map(|p| {
                let [r, g, b] = p.0;
                [n8(r), n8(g), n8(b), 1.0]
            })
            .collect()),
        DynamicImage::ImageRgba8(img) => Ok(img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                [n8(r), n8(g), n8(b), n8(a)]
            })
            .collect()),
        DynamicImage::ImageRgb16(img) => Ok(img
            .pixels()
            .map(|p| {
                let [r, g, b] = p.0;
                [n16(r), n16(g), n16(b), 1.0]
            })
            .collect()),
        DynamicImage::ImageRgba16(img) => Ok(img
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                [n16(r), n16(g), n16(b), n16(a)]
            })
            .collect()),
        other => {
            let channels = other.color().channel_count();
            if channels != 3 && channels != 4 {
                Err(ZmergeError::format(format!(
                    "color image must have 3 (RGB) or 4 (RGBA) channels, got {channels}"
                )))
            } else {
                Err(ZmergeError::format(format!(
                    "color image must be 8-bit or 16-bit, got {:?}",
                    other.color()
                )))
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layer/model.rs"]
mod tests;
