use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use log::info;

use fixbrot_compute::{EscapeTimeRenderer, Renderer};
use fixbrot_core::{intensity, Preset, MAX_SAMPLE, PRESETS, RASTER_HEIGHT, RASTER_WIDTH};

mod error;
mod pgm;

use error::OutputError;
use pgm::PgmWriter;

fn main() {
    env_logger::init();

    let out_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    if let Err(err) = run(&out_dir) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

fn run(out_dir: &Path) -> Result<(), OutputError> {
    for preset in PRESETS {
        let path = out_dir.join(preset.filename);
        let started = Instant::now();

        let file = File::create(&path).map_err(|source| OutputError::Create {
            path: path.clone(),
            source,
        })?;
        generate_image(BufWriter::new(file), preset).map_err(|source| OutputError::Write {
            path: path.clone(),
            source,
        })?;

        info!("wrote {} in {:.2?}", path.display(), started.elapsed());
    }
    Ok(())
}

/// Render one preset and stream it out as a P2 raster, one row at a time.
fn generate_image<W: Write>(out: W, preset: &Preset) -> io::Result<()> {
    let renderer = EscapeTimeRenderer::new(preset.max_iterations);
    let results = renderer.render(&preset.viewport(), (RASTER_WIDTH, RASTER_HEIGHT));

    let mut writer = PgmWriter::new(out, RASTER_WIDTH, RASTER_HEIGHT, MAX_SAMPLE)?;
    for row in results.chunks(RASTER_WIDTH as usize) {
        let samples: Vec<u8> = row
            .iter()
            .map(|r| intensity(r.iterations, preset.divisor))
            .collect();
        writer.write_row(&samples)?;
    }
    writer.finish()
}
