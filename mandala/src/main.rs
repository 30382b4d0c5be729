#![warn(clippy::pedantic)]

//! Headless shell for the mandala engine: stands in for the UI glue at the
//! canvas interface boundary. Draws a demo spiral through the full gesture
//! path and exports the result.
//!
//! Usage: `mandala [output.{png,bmp,jpg}] [slices] [size]`

use mandala_core::{
    color::Rgba8,
    geometry::Point,
    Canvas,
};

use anyhow::Result as AnyResult;

fn main() -> AnyResult<()> {
    let has_term = std::io::IsTerminal::is_terminal(&std::io::stdin());
    // Log to a terminal, if available. Else, log to "log.out" in the working directory.
    if has_term {
        env_logger::builder()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        let _ = simple_logging::log_to_file("log.out", log::LevelFilter::Debug);
    }

    let mut args = std::env::args().skip(1);
    let output = std::path::PathBuf::from(args.next().unwrap_or_else(|| "mandala.png".into()));
    let slices: u32 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 8,
    };
    let size: u32 = match args.next() {
        Some(raw) => raw.parse()?,
        None => 1024,
    };

    let mut canvas = Canvas::new(size, size);
    canvas.set_paint_enabled(true);
    canvas.set_pen_size(size / 200 + 2);
    canvas.set_pen_color(Rgba8::new(220, 40, 40, 255));
    canvas.set_slice_count(slices);
    canvas.set_rainbow_mode(true);
    canvas.set_mirror_enabled(true);

    // One long gesture: a spiral out from the center, replicated by the
    // engine into every slice.
    let center = size as f32 / 2.0;
    let steps = 400;
    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        let angle = t * std::f32::consts::TAU * 2.0;
        let radius = t * center * 0.85;
        canvas.pointer_move(Point::new(
            center + radius * angle.cos(),
            center + radius * angle.sin(),
        ));
    }
    canvas.pointer_release();

    canvas.export(&output)?;
    log::info!("wrote {}", output.display());
    Ok(())
}
