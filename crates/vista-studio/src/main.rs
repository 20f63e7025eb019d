mod sample;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use vista_engine::Image;
use vista_engine::logging::{LoggingConfig, init_logging};
use vista_engine::scene::{Camera, SceneObject};
use vista_engine::text::{FontEngine, TextBuilder};

const FONT_CANDIDATES: [&str; 7] = [
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut args = std::env::args().skip(1);
    let font_path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => find_system_font()?,
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_owned()));

    let engine = FontEngine::from_file(&font_path)
        .with_context(|| format!("loading font {}", font_path.display()))?;
    log::info!("font: {}", font_path.display());
    let mut builder = TextBuilder::new(engine);

    let mut scene = sample::build_scene();
    let rasterized = scene.prepare_text(&mut builder);
    log::info!("rasterized {rasterized} strings");

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let texts = scene.items().iter().filter_map(|item| match &item.object {
        SceneObject::Text(t) => Some(t),
        SceneObject::Shape(_) => None,
    });
    for (sample, text) in sample::TEXTS.iter().zip(texts) {
        let Some(image) = text.image().filter(|img| !img.is_empty()) else {
            log::warn!("{}: nothing to draw", sample.name);
            continue;
        };
        let path = out_dir.join(format!("{}.png", sample.name));
        save_png(image, &path)?;
        log::info!("{}: {}x{} -> {}", sample.name, image.width(), image.height(), path.display());
    }

    let camera = Camera::screen(sample::WIN_W, sample::WIN_H, sample::DEFAULT_SCALE);
    log::info!(
        "clear color {:?}, projection {:?}",
        sample::CLEAR_COLOR.to_f32_array(),
        camera.projection().as_array()
    );
    for item in scene.iter_in_paint_order() {
        let u = item.transform(&camera);
        let kind = match &item.object {
            SceneObject::Shape(s) => format!("shape {:?}", s.topology),
            SceneObject::Text(t) => format!("text {:?}", t.content()),
        };
        log::info!("z={} {kind}: modelview {:?}", item.order.z, u.modelview);
    }

    Ok(())
}

fn find_system_font() -> Result<PathBuf> {
    match FONT_CANDIDATES.iter().map(Path::new).find(|p| p.is_file()) {
        Some(p) => Ok(p.to_path_buf()),
        None => bail!("no system font found; pass a font path as the first argument"),
    }
}

fn save_png(image: &Image, path: &Path) -> Result<()> {
    let gray = image::GrayImage::from_raw(image.width(), image.height(), image.as_bytes().to_vec())
        .context("image buffer does not match its dimensions")?;
    gray.save(path)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
