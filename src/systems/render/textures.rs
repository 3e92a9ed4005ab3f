use bevy::image::{ImageAddressMode, ImageSampler, ImageSamplerDescriptor};
use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::Rng;
use tiny_skia::{
    Color as SkiaColor, GradientStop, LinearGradient, Paint, Pixmap, Point, Rect as SkiaRect,
    SpreadMode, Transform as SkiaTransform,
};

use crate::resources::{SetupError, SkyConfig, TerrainConfig};

const SPECKLE_SIZE: (f32, f32) = (1.0, 4.0);
const SPECKLE_BRIGHTNESS: (f32, f32) = (0.8, 1.2);

/// Grass texture: flat base colour dotted with brighter and darker speckles.
pub fn grass_texture(config: &TerrainConfig, rng: &mut impl Rng) -> Result<Pixmap, SetupError> {
    let size = config.texture_size;
    let mut pixmap = Pixmap::new(size, size).ok_or(SetupError::Texture {
        name: "grass",
        width: size,
        height: size,
    })?;

    let [r, g, b] = config.base_color;
    pixmap.fill(SkiaColor::from_rgba8(r, g, b, 255));

    let mut paint = Paint::default();
    paint.anti_alias = false;

    let extent = size as f32;
    for _ in 0..config.speckle_count {
        let x = rng.gen_range(0.0..extent);
        let y = rng.gen_range(0.0..extent);
        let side = rng.gen_range(SPECKLE_SIZE.0..SPECKLE_SIZE.1);
        let brightness = rng.gen_range(SPECKLE_BRIGHTNESS.0..SPECKLE_BRIGHTNESS.1);

        let [r, g, b] = config.base_color.map(|c| shade(c, brightness));
        paint.set_color_rgba8(r, g, b, 255);

        if let Some(rect) = SkiaRect::from_xywh(x, y, side, side) {
            pixmap.fill_rect(rect, &paint, SkiaTransform::identity(), None);
        }
    }

    Ok(pixmap)
}

fn shade(channel: u8, brightness: f32) -> u8 {
    (channel as f32 * brightness).floor().clamp(0.0, 255.0) as u8
}

/// One pixel wide vertical gradient, zenith at row 0 and horizon at the bottom.
pub fn sky_gradient(config: &SkyConfig) -> Result<Pixmap, SetupError> {
    let height = config.gradient_height;
    let error = || SetupError::Texture {
        name: "sky gradient",
        width: 1,
        height,
    };
    let mut pixmap = Pixmap::new(1, height).ok_or_else(error)?;

    let stop = |position: f32, [r, g, b]: [u8; 3]| {
        GradientStop::new(position, SkiaColor::from_rgba8(r, g, b, 255))
    };
    let shader = LinearGradient::new(
        Point::from_xy(0.0, 0.0),
        Point::from_xy(0.0, height as f32),
        vec![
            stop(0.0, config.zenith_color),
            stop(0.5, config.middle_color),
            stop(1.0, config.horizon_color),
        ],
        SpreadMode::Pad,
        SkiaTransform::identity(),
    )
    .ok_or_else(error)?;

    let mut paint = Paint::default();
    paint.shader = shader;
    let rect = SkiaRect::from_xywh(0.0, 0.0, 1.0, height as f32).ok_or_else(error)?;
    pixmap.fill_rect(rect, &paint, SkiaTransform::identity(), None);

    Ok(pixmap)
}

/// Uploads a painted pixmap as an sRGB texture, optionally tiling.
pub fn pixmap_to_image(pixmap: Pixmap, repeat: bool) -> Image {
    let size = Extent3d {
        width: pixmap.width(),
        height: pixmap.height(),
        depth_or_array_layers: 1,
    };
    // Every pixel is opaque so premultiplied and straight alpha agree.
    let mut image = Image::new(
        size,
        TextureDimension::D2,
        pixmap.take(),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    );
    if repeat {
        image.sampler = ImageSampler::Descriptor(ImageSamplerDescriptor {
            address_mode_u: ImageAddressMode::Repeat,
            address_mode_v: ImageAddressMode::Repeat,
            ..ImageSamplerDescriptor::linear()
        });
    }
    image
}
