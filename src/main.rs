// Renders the app icon and writes both PNGs under assets/icon/.
// The output directory must already exist; a missing directory is fatal,
// like any other write failure.

use std::path::Path;

use anyhow::Result;
use icongen::text::{FontSet, TextRenderer};
use icongen::{SIZE, compose, icon, palette};

fn main() -> Result<()> {
    env_logger::Builder::from_default_env().init();

    let mut renderer = TextRenderer::new();
    let fonts = FontSet::resolve(&renderer);
    let artwork = icon::render(&mut renderer, &fonts)?;

    let out_dir = Path::new("assets").join("icon");

    // Opaque icon: artwork flattened onto the solid brand backdrop.
    let icon_path = out_dir.join("app_icon.png");
    let opaque = compose::flatten_onto(palette::GRADIENT_TOP, &artwork);
    compose::save_png(&opaque, &icon_path)?;
    println!("Generated {} ({SIZE}x{SIZE})", icon_path.display());

    // Adaptive foreground: keeps its transparency outside the rounded mask.
    let adaptive_path = out_dir.join("app_icon_adaptive.png");
    compose::save_png(&artwork, &adaptive_path)?;
    println!("Generated {} ({SIZE}x{SIZE})", adaptive_path.display());

    Ok(())
}
