//! # Cell Textures
//!
//! Packs id-indexed cell data row-major into square power-of-two RGBA float
//! textures for the hex shader.

use config::constants::{
    HEX_NORMAL_TEXTURE, HEX_POS_TEXTURE, NORMALS_FILE_SUFFIX, POSITIONS_FILE_SUFFIX, TEXEL_ALPHA,
};
use glam::Vec3;

/// Which cell attribute a texture carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureKind {
    /// Cell center positions
    Positions,
    /// Cell center normals
    Normals,
}

impl TextureKind {
    /// Shader property the texture is bound to.
    pub fn binding_name(self) -> &'static str {
        match self {
            TextureKind::Positions => HEX_POS_TEXTURE,
            TextureKind::Normals => HEX_NORMAL_TEXTURE,
        }
    }

    /// Suffix appended to the mesh name when the texture is saved.
    pub fn file_suffix(self) -> &'static str {
        match self {
            TextureKind::Positions => POSITIONS_FILE_SUFFIX,
            TextureKind::Normals => NORMALS_FILE_SUFFIX,
        }
    }
}

/// Side length of the square texture holding `cell_count` cells.
///
/// `next_power_of_two(ceil(sqrt(cell_count)))`, and 1 for no cells.
///
/// # Example
///
/// ```rust
/// use hexagonify::texture::texture_width;
///
/// assert_eq!(texture_width(10), 4);
/// assert_eq!(texture_width(17), 8);
/// assert_eq!(texture_width(1), 1);
/// ```
pub fn texture_width(cell_count: usize) -> u32 {
    ceil_sqrt(cell_count).max(1).next_power_of_two() as u32
}

fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    // Correct the float estimate in either direction
    while root * root < n {
        root += 1;
    }
    while root > 0 && (root - 1) * (root - 1) >= n {
        root -= 1;
    }
    root
}

/// A square RGBA float texture of packed cell data.
#[derive(Debug, Clone, PartialEq)]
pub struct CellTexture {
    kind: TextureKind,
    width: u32,
    /// Row-major texels, `width * width` entries
    texels: Vec<[f32; 4]>,
}

impl CellTexture {
    /// Packs id-indexed cell values into a texture.
    ///
    /// `slots[0]` is the unused placeholder; cell `k` at `slots[k]` lands in
    /// texel `k - 1`, pixel `((k - 1) % width, (k - 1) / width)`, with alpha
    /// set to 1. Texels past the last cell stay zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hexagonify::texture::{CellTexture, TextureKind};
    /// use glam::Vec3;
    ///
    /// let slots = [Vec3::ZERO, Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)];
    /// let texture = CellTexture::pack(TextureKind::Positions, &slots);
    /// assert_eq!(texture.width(), 2);
    /// assert_eq!(texture.pixel(0, 0), [1.0, 2.0, 3.0, 1.0]);
    /// assert_eq!(texture.pixel(1, 0), [4.0, 5.0, 6.0, 1.0]);
    /// ```
    pub fn pack(kind: TextureKind, slots: &[Vec3]) -> Self {
        let cells = slots.get(1..).unwrap_or_default();
        let width = texture_width(cells.len());
        let mut texels = vec![[0.0; 4]; (width * width) as usize];

        for (texel, value) in texels.iter_mut().zip(cells) {
            *texel = [value.x, value.y, value.z, TEXEL_ALPHA];
        }

        Self {
            kind,
            width,
            texels,
        }
    }

    #[inline]
    pub fn kind(&self) -> TextureKind {
        self.kind
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Texture is square.
    #[inline]
    pub fn height(&self) -> u32 {
        self.width
    }

    /// Texel at column `x`, row `y`.
    pub fn pixel(&self, x: u32, y: u32) -> [f32; 4] {
        self.texels[(y * self.width + x) as usize]
    }

    pub fn texels(&self) -> &[[f32; 4]] {
        &self.texels
    }

    /// Flattened `[r, g, b, a, ...]` buffer for GPU upload or image encoding.
    pub fn to_rgba_f32(&self) -> Vec<f32> {
        self.texels.iter().flatten().copied().collect()
    }
}
