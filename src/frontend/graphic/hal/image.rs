use std::{
    path::Path,
    rc::Rc,
};

use thiserror::Error;
use tracing::debug;

use super::{Device, HalError, SamplerInfo};

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("cannot decode texture {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: ::image::ImageError,
    },
}

/// Decodes the image at `path` into RGB rows, bottom row first so that
/// texture coordinate (0, 0) lands on the lower left corner.
pub fn decode_rgb<P: AsRef<Path>>(path: P) -> Result<::image::RgbImage, TextureError> {
    let path = path.as_ref();
    let image = ::image::open(path).map_err(|source| TextureError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    Ok(image.flipv().to_rgb())
}

/// A 2D texture object bound to one texture unit.
pub struct TextureState<D: Device> {
    device: Rc<D>,
    pub texture: Option<D::Texture>,
    pub unit: u32,
    pub image_dimensions: Option<(u32, u32)>,
}

impl<D: Device> TextureState<D> {
    pub fn new(
        device: Rc<D>,
        unit: u32,
        sampler_info: SamplerInfo,
    ) -> Result<TextureState<D>, HalError> {
        let texture = device.create_texture()?;
        device.active_texture(unit);
        device.bind_texture_2d(Some(texture));
        device.texture_2d_sampling(sampler_info);
        Ok(TextureState {
            device,
            texture: Some(texture),
            unit,
            image_dimensions: None,
        })
    }

    /// Uploads `image` as level 0 and builds the mipmap chain.
    pub fn upload(&mut self, image: &::image::RgbImage) {
        let (width, height) = image.dimensions();
        self.bind();
        self.device.texture_2d_image_rgb(width, height, &**image);
        self.device.generate_mipmap_2d();
        self.image_dimensions = Some((width, height));
        debug!("texture uploaded ({}x{})", width, height);
    }

    pub fn bind(&self) {
        self.device.active_texture(self.unit);
        self.device.bind_texture_2d(self.texture);
    }
}

impl<D: Device> Drop for TextureState<D> {
    fn drop(&mut self) {
        if let Some(texture) = self.texture.take() {
            self.device.delete_texture(texture);
        }
    }
}
