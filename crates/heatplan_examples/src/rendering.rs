//! PNG rendering helpers shared by the example binaries.
//!
//! Fields render as red-yellow-green heat strips, placements as colored
//! blocks along the wall. The canvas carries no text, so row order and
//! output paths go to the log.
use std::path::Path;

use anyhow::Context;
use heatplan::prelude::*;
use image::{Rgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

const HEAT_LOW: [u8; 3] = [215, 48, 39];
const HEAT_MID: [u8; 3] = [254, 224, 139];
const HEAT_HIGH: [u8; 3] = [26, 152, 80];
const GRID_STEP_CM: u32 = 60;

/// Installs a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Pixel dimensions and palette for rendered strips.
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub image_size: (u32, u32),
    /// Wall span the horizontal axis maps to.
    pub span_cm: u32,
    pub background: [u8; 3],
}

impl RenderConfig {
    pub fn new(image_size: (u32, u32), span_cm: u32) -> Self {
        Self {
            image_size,
            span_cm,
            background: [235, 235, 240],
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }
}

/// Block color for a fixture kind.
pub fn kind_color(kind: FixtureKind) -> [u8; 3] {
    match kind {
        FixtureKind::Sink | FixtureKind::SinkCabinet => [52, 152, 219],
        FixtureKind::Stove | FixtureKind::StoveCabinet => [231, 76, 60],
        FixtureKind::Fridge => [46, 204, 113],
        FixtureKind::Pantry | FixtureKind::OvenTower => [155, 89, 182],
        FixtureKind::Dishwasher => [26, 188, 156],
        FixtureKind::DrawerCabinet | FixtureKind::BaseCabinet => [149, 165, 166],
        FixtureKind::FillerPanel => [189, 195, 199],
        _ => [127, 140, 141],
    }
}

/// Renders one field as a horizontal heat strip.
pub fn render_field_to_png(
    field: &ScalarField,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    anyhow::ensure!(config.span_cm > 0, "span must be positive");
    let (width, height) = config.image_size;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));
    draw_field_row(&mut img, field, config.span_cm, 0, height);
    save(&img, path.as_ref())
}

/// Renders several fields stacked as rows, top to bottom in slice order.
///
/// Row names go to the log because the canvas carries no labels.
pub fn render_layer_stack_to_png(
    layers: &[(&str, &ScalarField)],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    anyhow::ensure!(!layers.is_empty(), "no layers to render");
    anyhow::ensure!(config.span_cm > 0, "span must be positive");
    let (width, height) = config.image_size;
    let row_height = height / layers.len() as u32;
    anyhow::ensure!(row_height > 1, "image too short for {} rows", layers.len());

    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));
    for (i, (name, field)) in layers.iter().enumerate() {
        let y0 = i as u32 * row_height;
        let y1 = if i + 1 == layers.len() {
            height
        } else {
            y0 + row_height - 1
        };
        draw_field_row(&mut img, field, config.span_cm, y0, y1);
        info!("Row {}: {}", i + 1, name);
    }
    save(&img, path.as_ref())
}

/// Renders placed volumes as colored blocks along the wall. Monoliths
/// draw taller than counter-height units.
pub fn render_volumes_to_png(
    volumes: &[Volume],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    anyhow::ensure!(config.span_cm > 0, "span must be positive");
    let (width, height) = config.image_size;
    let mut img = RgbImage::from_pixel(width, height, Rgb(config.background));

    let to_px = |cm: i32| -> u32 {
        (cm.max(0) as u64 * u64::from(width) / u64::from(config.span_cm)).min(u64::from(width))
            as u32
    };
    for volume in volumes {
        let x0 = to_px(volume.x);
        let x1 = to_px(volume.x + volume.width_cm as i32);
        let block_height = if volume.meta.is_monolith {
            height * 9 / 10
        } else {
            height * 11 / 20
        };
        let y0 = height.saturating_sub(block_height);
        fill_rect(&mut img, x0, y0, x1, height, kind_color(volume.function));
        outline_rect(&mut img, x0, y0, x1, height, [0, 0, 0]);
    }
    draw_grid_lines(&mut img, config.span_cm, 0, height, [128, 128, 128]);
    save(&img, path.as_ref())
}

/// Renders an L-shape result top-down: arm A runs along the top edge,
/// arm B down the left edge, and the corner unit fills the origin square.
pub fn render_l_shape_to_png(
    result: &DualSolveResult,
    room: &Room,
    px_per_cm: u32,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    anyhow::ensure!(px_per_cm > 0, "scale must be positive");
    let wall_b = room.wall_b_length_cm.unwrap_or(room.length_cm);
    let width = room.width_cm * px_per_cm;
    let height = wall_b * px_per_cm;
    let depth = 60 * px_per_cm;
    let mut img = RgbImage::from_pixel(width, height, Rgb([235, 235, 240]));

    let corner = result.corner.size_cm * px_per_cm;
    fill_rect(&mut img, 0, 0, corner, corner, [70, 70, 70]);
    outline_rect(&mut img, 0, 0, corner, corner, [0, 0, 0]);

    for volume in &result.arm_a.volumes {
        let x0 = volume.x.max(0) as u32 * px_per_cm;
        let x1 = x0 + volume.width_cm * px_per_cm;
        fill_rect(&mut img, x0, 0, x1, depth, kind_color(volume.function));
        outline_rect(&mut img, x0, 0, x1, depth, [0, 0, 0]);
    }
    for volume in &result.arm_b.volumes {
        let z0 = volume.z.max(0) as u32 * px_per_cm;
        let z1 = z0 + volume.width_cm * px_per_cm;
        fill_rect(&mut img, 0, z0, depth, z1, kind_color(volume.function));
        outline_rect(&mut img, 0, z0, depth, z1, [0, 0, 0]);
    }
    save(&img, path.as_ref())
}

fn draw_field_row(img: &mut RgbImage, field: &ScalarField, span_cm: u32, y0: u32, y1: u32) {
    let (lo, hi) = percentile_bounds(&field.data);
    let width = img.width();
    for x in 0..width {
        let cm = (u64::from(x) * u64::from(span_cm) / u64::from(width.max(1))) as i32;
        let t = (field.get(cm) - lo) / (hi - lo);
        let color = heat_color(t);
        for y in y0..y1.min(img.height()) {
            img.put_pixel(x, y, Rgb(color));
        }
    }
    draw_grid_lines(img, span_cm, y0, y1, [255, 255, 255]);
}

fn draw_grid_lines(img: &mut RgbImage, span_cm: u32, y0: u32, y1: u32, tint: [u8; 3]) {
    if span_cm == 0 || img.width() == 0 {
        return;
    }
    let width = img.width();
    for cm in (0..=span_cm).step_by(GRID_STEP_CM as usize) {
        let x = (u64::from(cm) * u64::from(width) / u64::from(span_cm))
            .min(u64::from(width) - 1) as u32;
        for y in y0..y1.min(img.height()) {
            let px = img.get_pixel(x, y).0;
            img.put_pixel(x, y, Rgb(lerp(px, tint, 0.3)));
        }
    }
}

fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: [u8; 3]) {
    for y in y0..y1.min(img.height()) {
        for x in x0..x1.min(img.width()) {
            img.put_pixel(x, y, Rgb(color));
        }
    }
}

fn outline_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: [u8; 3]) {
    if x0 >= img.width() || y0 >= img.height() || x1 <= x0 || y1 <= y0 {
        return;
    }
    let xe = x1.min(img.width());
    let ye = y1.min(img.height());
    for x in x0..xe {
        img.put_pixel(x, y0, Rgb(color));
        img.put_pixel(x, ye - 1, Rgb(color));
    }
    for y in y0..ye {
        img.put_pixel(x0, y, Rgb(color));
        img.put_pixel(xe - 1, y, Rgb(color));
    }
}

fn heat_color(t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        lerp(HEAT_LOW, HEAT_MID, t * 2.0)
    } else {
        lerp(HEAT_MID, HEAT_HIGH, (t - 0.5) * 2.0)
    }
}

fn lerp(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        *channel = (f32::from(a[i]) + (f32::from(b[i]) - f32::from(a[i])) * t).round() as u8;
    }
    out
}

/// Clips the strip range to the 5th..95th percentile so single spikes do
/// not wash out the gradient.
fn percentile_bounds(data: &[f32]) -> (f32, f32) {
    if data.is_empty() {
        return (0.0, 1.0);
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(f32::total_cmp);
    let index = |p: f32| ((sorted.len() - 1) as f32 * p).round() as usize;
    let lo = sorted[index(0.05)];
    let hi = sorted[index(0.95)];
    if hi - lo <= f32::EPSILON {
        (lo - 0.5, lo + 0.5)
    } else {
        (lo, hi)
    }
}

fn save(img: &RgbImage, path: &Path) -> anyhow::Result<()> {
    img.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {}.", path.display());
    Ok(())
}
