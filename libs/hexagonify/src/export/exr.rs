//! OpenEXR float image output.

use std::path::{Path, PathBuf};

use config::constants::output_file_name;
use image::{ImageFormat, Rgba32FImage};
use log::info;

use super::TextureSink;
use crate::error::ExportError;
use crate::texture::CellTexture;

/// Writes textures as `<mesh name><suffix>` OpenEXR files into a directory.
///
/// # Example
///
/// ```rust,ignore
/// let sink = ExrDirectorySink::new("assets", soup.name());
/// let path = sink.store(&output.hex_pos)?; // assets/<name>_HexPositions.exr
/// ```
#[derive(Debug, Clone)]
pub struct ExrDirectorySink {
    directory: PathBuf,
    mesh_name: String,
}

impl ExrDirectorySink {
    pub fn new(directory: impl Into<PathBuf>, mesh_name: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            mesh_name: mesh_name.into(),
        }
    }

    /// Path the texture of this kind is written to.
    pub fn path_for(&self, texture: &CellTexture) -> PathBuf {
        self.directory
            .join(output_file_name(&self.mesh_name, texture.kind().file_suffix()))
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl TextureSink for ExrDirectorySink {
    fn store(&self, texture: &CellTexture) -> Result<PathBuf, ExportError> {
        if !self.directory.is_dir() {
            return Err(ExportError::MissingDirectory(self.directory.clone()));
        }

        let path = self.path_for(texture);
        to_image(texture)?.save_with_format(&path, ImageFormat::OpenExr)?;

        info!("Saved texture to: {}", path.display());
        Ok(path)
    }
}

/// Converts a packed texture into an RGBA float image buffer.
pub fn to_image(texture: &CellTexture) -> Result<Rgba32FImage, ExportError> {
    Rgba32FImage::from_raw(texture.width(), texture.height(), texture.to_rgba_f32()).ok_or(
        ExportError::TextureSize {
            texels: texture.texels().len(),
            width: texture.width(),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::texture::TextureKind;
    use glam::Vec3;

    fn sample_texture(kind: TextureKind) -> CellTexture {
        let slots = [
            Vec3::ZERO,
            Vec3::new(1.5, -2.0, 0.25),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(-7.0, 8.0, 9.5),
        ];
        CellTexture::pack(kind, &slots)
    }

    #[test]
    fn test_to_image_dimensions() {
        let image = to_image(&sample_texture(TextureKind::Positions)).unwrap();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(1, 0).0, [4.0, 5.0, 6.0, 1.0]);
        assert_eq!(image.get_pixel(1, 1).0, [0.0; 4]);
    }

    #[test]
    fn test_store_writes_named_exr() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ExrDirectorySink::new(dir.path(), "terrain");
        let texture = sample_texture(TextureKind::Positions);

        let path = sink.store(&texture).unwrap();
        assert_eq!(path, dir.path().join("terrain_HexPositions.exr"));

        let decoded = image::open(&path).unwrap().to_rgba32f();
        assert_eq!(decoded.dimensions(), (2, 2));
        assert_eq!(decoded.get_pixel(0, 0).0, [1.5, -2.0, 0.25, 1.0]);
        assert_eq!(decoded.get_pixel(0, 1).0, [-7.0, 8.0, 9.5, 1.0]);
    }

    #[test]
    fn test_store_normals_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ExrDirectorySink::new(dir.path(), "terrain");
        let path = sink.store(&sample_texture(TextureKind::Normals)).unwrap();
        assert!(path.ends_with("terrain_HexNormals.exr"));
        assert!(path.is_file());
    }

    #[test]
    fn test_store_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let sink = ExrDirectorySink::new(dir.path().join("absent"), "terrain");
        let err = sink
            .store(&sample_texture(TextureKind::Positions))
            .unwrap_err();
        assert!(matches!(err, ExportError::MissingDirectory(_)));
    }
}
