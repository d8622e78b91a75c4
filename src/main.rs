use log::info;
use sobel_edges::config::sobel::{load_config, SobelToolConfig};
use sobel_edges::image::io::{load_rgb_image, save_grayscale_u8, save_rgb_u8, write_json_file};
use sobel_edges::image::ImageView;
use sobel_edges::{render_panels, Error};
use std::env;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config = match env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SobelToolConfig::default(),
    };

    let rgb = load_rgb_image(&config.input)?;
    info!(
        "loaded {} ({}x{})",
        config.input.display(),
        rgb.width(),
        rgb.height()
    );

    let artifacts = sobel_edges::run(&rgb, &config.pipeline);

    let edges_path = &config.output.edges_image;
    save_grayscale_u8(artifacts.edges(), edges_path)?;
    println!("Filtered image saved to: {}", edges_path.display());

    if let Some(path) = &config.output.panels_image {
        let sheet = render_panels(&rgb, &artifacts, config.overlay.alpha, config.panels);
        save_rgb_u8(&sheet, path)?;
        println!("Panel sheet saved to: {}", path.display());
    }

    if let Some(path) = &config.output.summary_json {
        let summary = artifacts.summary(edges_path, config.output.panels_image.as_deref());
        write_json_file(path, &summary)?;
        info!("summary written to {}", path.display());
    }

    println!("\nSobel filter applied successfully!");
    println!(
        "Edge strength peaks at {:.1}; total {:.3} ms.",
        artifacts.normalized.max_magnitude, artifacts.timings.total_ms
    );
    Ok(())
}
