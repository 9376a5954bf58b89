//! Cardgen - randomized bingo card image generator.

mod cli;
mod config;
mod error;
mod font;
mod layout;
mod output;
mod params;
mod pool;
mod render;

use std::path::Path;
use std::process;

use clap::Parser;
use image::RgbImage;
use rayon::prelude::*;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::CardError;
use crate::layout::GridLayout;
use crate::output::{card_path, prepare_output, save_card};
use crate::params::{validate_count, validate_format, validate_length, validate_text, Params};
use crate::pool::{card_rng, TilePool, FREE_SPACE};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CardError> {
    // Load config and resolve parameters
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(CardError::Config)?;
    let params = Params::resolve(&cli, &config);

    // Validate parameters before touching any input
    validate_count(cli.count).map_err(CardError::InvalidArgument)?;
    validate_length(params.length, cli.free).map_err(CardError::InvalidArgument)?;
    validate_format(&params.format).map_err(CardError::InvalidArgument)?;
    validate_text(params.font_size, params.wrap).map_err(CardError::InvalidArgument)?;

    // Geometry is validated once here; it cannot fail mid-render
    let layout = GridLayout::new(
        params.length,
        params.length,
        params.outline,
        params.borders,
        params.sizing,
    )?;

    let pool = TilePool::load(Path::new(&cli.input))?;
    pool.ensure(layout.cell_count())?;

    let font_path =
        font::discover_font_path(cli.font.as_deref(), config.defaults.font.as_deref())?;
    let font = font::load_font(&font_path)?;

    if cli.verbose {
        let (w, h) = layout.board_area();
        let (cw, ch) = layout.content_area();
        eprintln!("Board: {0}x{0} cells, grid {cw}x{ch}, canvas {w}x{h}", params.length);
        eprintln!("Pool: {} values from {}", pool.len(), cli.input);
        eprintln!("Font: {}", font_path.display());
    }

    // Layout, pool, and font are frozen; each card is an independent
    // read-only worker, collected back in index order.
    let cards: Vec<RgbImage> = (0..cli.count)
        .into_par_iter()
        .map(|i| {
            let mut rng = card_rng(cli.seed, i);
            let mut tiles = pool.sample(layout.cell_count(), &mut rng);
            if cli.free {
                if let Some(center) = layout.center_index() {
                    tiles[center] = FREE_SPACE.to_string();
                }
            }
            render::render_card(&layout, &tiles, &font, params.font_size, params.wrap)
        })
        .collect();

    // Write files sequentially, in index order
    prepare_output(&cli.output, cli.count)?;
    for (i, img) in cards.iter().enumerate() {
        let path = card_path(&cli.output, cli.count, i, &params.format);
        save_card(img, &params.format, &path)?;
        eprintln!("Saved: {}", path.display());
    }

    Ok(())
}
