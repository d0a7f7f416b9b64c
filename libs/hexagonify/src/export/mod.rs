//! # Export
//!
//! Persists the packed cell textures and the per-vertex UV channel.
//!
//! Textures go through a [`TextureSink`]; [`ExrDirectorySink`] writes
//! floating-point OpenEXR files next to each other in one directory. The two
//! textures are independent, so a failure saving one never blocks the other.

mod exr;
mod sidecar;

pub use exr::{to_image, ExrDirectorySink};
pub use sidecar::{write_uv_sidecar, UvSidecar};

use std::path::PathBuf;

use log::error;

use crate::error::ExportError;
use crate::texture::CellTexture;

/// Destination for packed cell textures.
pub trait TextureSink {
    /// Persists one texture and returns where it went.
    fn store(&self, texture: &CellTexture) -> Result<PathBuf, ExportError>;
}

/// Per-texture outcome of [`save_textures`].
#[derive(Debug)]
pub struct SavedTextures {
    pub positions: Result<PathBuf, ExportError>,
    pub normals: Result<PathBuf, ExportError>,
}

impl SavedTextures {
    /// True when both textures were written.
    pub fn all_saved(&self) -> bool {
        self.positions.is_ok() && self.normals.is_ok()
    }
}

/// Encodes and stores both textures in parallel.
///
/// Failures are logged and returned per texture.
pub fn save_textures<S>(sink: &S, positions: &CellTexture, normals: &CellTexture) -> SavedTextures
where
    S: TextureSink + Sync,
{
    let (positions, normals) = rayon::join(
        || store_logged(sink, positions),
        || store_logged(sink, normals),
    );
    SavedTextures { positions, normals }
}

fn store_logged<S: TextureSink>(sink: &S, texture: &CellTexture) -> Result<PathBuf, ExportError> {
    sink.store(texture).inspect_err(|err| {
        error!(
            "Saving {} texture failed: {}",
            texture.kind().binding_name(),
            err
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureKind;
    use glam::Vec3;
    use std::path::Path;

    /// Rejects normal textures, accepts everything else.
    struct PickySink;

    impl TextureSink for PickySink {
        fn store(&self, texture: &CellTexture) -> Result<PathBuf, ExportError> {
            match texture.kind() {
                TextureKind::Positions => Ok(Path::new("positions.exr").to_path_buf()),
                TextureKind::Normals => Err(ExportError::TextureSize {
                    texels: 0,
                    width: texture.width(),
                }),
            }
        }
    }

    #[test]
    fn test_one_failure_does_not_block_the_other() {
        let slots = [Vec3::ZERO, Vec3::ONE];
        let positions = CellTexture::pack(TextureKind::Positions, &slots);
        let normals = CellTexture::pack(TextureKind::Normals, &slots);

        let saved = save_textures(&PickySink, &positions, &normals);
        assert!(!saved.all_saved());
        assert_eq!(saved.positions.unwrap(), Path::new("positions.exr"));
        assert!(matches!(saved.normals, Err(ExportError::TextureSize { .. })));
    }
}
