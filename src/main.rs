use anyhow::{Context, Result};
use log::info;
use palette_mst::{open_grid, save_grid, ColorGraph, MstParams};
use std::env;

const USAGE: &str = "usage: palette-mst <input image> [smoothed output image] [filter size] [sigma]";

fn main() -> Result<()> {
    env_logger::init();
    let mut args = env::args().skip(1);
    let input = args.next().context(USAGE)?;
    let output = args.next();

    let mut builder = MstParams::builder();
    if let Some(filter_size) = args.next() {
        let filter_size = filter_size.parse().context("filter size must be a whole number")?;
        builder = builder.filter_size(filter_size);
    }
    if let Some(sigma) = args.next() {
        let sigma = sigma.parse().context("sigma must be a number")?;
        builder = builder.sigma(sigma);
    }
    let params = builder.build();

    info!("Input image: {input}");
    let grid = open_grid(&input).with_context(|| format!("failed to open {input}"))?;
    info!("Image dimensions: {}x{}", grid.width(), grid.height());

    let graph: ColorGraph<f64> = ColorGraph::new(&grid, params);
    if let Some(output) = output {
        let smoothed = graph.smoothed_grid()?;
        save_grid(&smoothed, &output).with_context(|| format!("failed to save {output}"))?;
        info!("Smoothed image saved: {output}");
    }

    let mst = graph.min_spanning_tree()?;
    println!("{}", mst.report());
    Ok(())
}
