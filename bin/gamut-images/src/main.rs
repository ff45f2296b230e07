use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use image::RgbaImage;
use perceptual_color::{
    ChromaHueImage, ChromaLightnessImage, ColorWheelImage, Component, GamutBoundary, GradientImage,
    Lcha, MatrixProfile,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "gamut-images")]
#[command(about = "Render slices through the gamut of an RGB color space to PNG files")]
struct Cli {
    /// Built-in profile: srgb, display-p3, a98-rgb, prophoto-rgb or rec2020
    #[arg(short, long, default_value = "srgb")]
    profile: String,

    /// Width and height of every image in logical pixels
    #[arg(short, long, default_value_t = 256)]
    size: u32,

    /// Transparent margin around the images in logical pixels
    #[arg(short, long, default_value_t = 0.0)]
    border: Component,

    /// Physical pixels per logical pixel
    #[arg(long, default_value_t = 1.0)]
    device_pixel_ratio: Component,

    /// Lightness of the chroma-hue disc and the color wheel
    #[arg(short, long, default_value_t = 50.0)]
    lightness: Component,

    /// Hue of the chroma-lightness slice and the gradient
    #[arg(long, default_value_t = 0.0)]
    hue: Component,

    /// Directory the images are written to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,
}

fn save(image: &RgbaImage, dir: &std::path::Path, name: &str) -> anyhow::Result<()> {
    let path = dir.join(name);
    image
        .save(&path)
        .with_context(|| format!("could not write image to {}", path.display()))?;
    tracing::info!(path = %path.display(), "image written");
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "perceptual_color=info,gamut_images=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let profile = MatrixProfile::by_name(&cli.profile)?;
    let boundary = Arc::new(
        GamutBoundary::new(profile)
            .with_context(|| format!("profile {} can not be used", cli.profile))?,
    );
    tracing::info!(
        profile = %cli.profile,
        blackpoint = boundary.blackpoint_l(),
        whitepoint = boundary.whitepoint_l(),
        maximum_chroma = boundary.maximum_chroma(),
        "gamut measured"
    );

    std::fs::create_dir_all(&cli.output)
        .with_context(|| format!("could not create {}", cli.output.display()))?;

    let mut disc = ChromaHueImage::new(Arc::clone(&boundary));
    disc.set_size(cli.size);
    disc.set_border(cli.border);
    disc.set_device_pixel_ratio(cli.device_pixel_ratio);
    disc.set_lightness(cli.lightness);
    save(disc.image(), &cli.output, "chroma-hue.png")?;

    let mut slice = ChromaLightnessImage::new(Arc::clone(&boundary));
    slice.set_size(cli.size, cli.size);
    slice.set_border(cli.border);
    slice.set_device_pixel_ratio(cli.device_pixel_ratio);
    slice.set_hue(cli.hue);
    save(slice.image(), &cli.output, "chroma-lightness.png")?;

    let mut wheel = ColorWheelImage::new(Arc::clone(&boundary));
    wheel.set_size(cli.size);
    wheel.set_border(cli.border);
    wheel.set_device_pixel_ratio(cli.device_pixel_ratio);
    wheel.set_thickness(cli.size as Component / 8.0);
    wheel.set_lightness(cli.lightness);
    save(wheel.image(), &cli.output, "color-wheel.png")?;

    let mut gradient = GradientImage::new(Arc::clone(&boundary));
    gradient.set_length(cli.size);
    gradient.set_thickness((cli.size as Component / 8.0).max(1.0));
    gradient.set_device_pixel_ratio(cli.device_pixel_ratio);
    gradient.set_first_color(Lcha::new(cli.lightness, 0.0, cli.hue, 0.0));
    gradient.set_second_color(Lcha::new(
        cli.lightness,
        boundary.maximum_chroma(),
        cli.hue,
        1.0,
    ));
    save(gradient.image(), &cli.output, "gradient.png")?;

    Ok(())
}
