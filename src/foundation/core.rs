use crate::foundation::error::{ZmergeError, ZmergeResult};

/// Straight (non-premultiplied) RGBA sample with channels normalized to `[0, 1]`.
pub type Rgba = [f32; 4];

/// Fully transparent black, the default compositing background.
pub const TRANSPARENT: Rgba = [0.0, 0.0, 0.0, 0.0];

pub(crate) const MAX_8_BIT: f32 = u8::MAX as f32;
pub(crate) const MAX_16_BIT: f32 = u16::MAX as f32;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
/// Pixel dimensions of a layer, stack, or output buffer.
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Create a resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// `true` when either dimension is zero.
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Integer precision of the encoded output image.
pub enum BitDepth {
    /// 8 bits per channel.
    Eight,
    /// 16 bits per channel.
    #[default]
    Sixteen,
}

impl BitDepth {
    /// Largest representable channel value.
    pub fn max_value(self) -> f32 {
        match self {
            Self::Eight => MAX_8_BIT,
            Self::Sixteen => MAX_16_BIT,
        }
    }

    /// Parse `8` or `16`.
    pub fn from_bits(bits: u32) -> ZmergeResult<Self> {
        match bits {
            8 => Ok(Self::Eight),
            16 => Ok(Self::Sixteen),
            other => Err(ZmergeError::config(format!(
                "output bit depth must be 8 or 16, got {other}"
            ))),
        }
    }
}

/// `true` when every channel is finite and within `[0, 1]`.
#[inline]
pub fn is_unit_rgba(px: &Rgba) -> bool {
    px.iter().all(|v| (0.0..=1.0).contains(v))
}

/// Parse a background sample from `"r,g,b,a"`, each channel a float in `[0, 1]`.
pub fn parse_rgba(s: &str) -> ZmergeResult<Rgba> {
    let parts = s.split(',').map(str::trim).collect::<Vec<_>>();
    if parts.len() != 4 {
        return Err(ZmergeError::config(format!(
            "expected 4 comma-separated channels, got '{s}'"
        )));
    }

    let mut out = TRANSPARENT;
    for (slot, part) in out.iter_mut().zip(parts) {
        let v: f32 = part
            .parse()
            .map_err(|_| ZmergeError::config(format!("invalid channel value '{part}'")))?;
        if !(0.0..=1.0).contains(&v) {
            return Err(ZmergeError::config(format!(
                "channel value {v} is outside [0, 1]"
            )));
        }
        *slot = v;
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
