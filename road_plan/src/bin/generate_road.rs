//! Generate the demo road: writes the OpenDRIVE description and the
//! centerline plot.
//!
//! Usage: generate_road [road.xodr] [road.svg]

use road_plan::{compose_path, demo_road, write_svg, write_xodr, ComposerConfig, RoadMeta};

fn run() -> road_plan::Result<()> {
    let args: Vec<_> = std::env::args().collect();
    let xodr_path = args.get(1).map(String::as_str).unwrap_or("road.xodr");
    let svg_path = args.get(2).map(String::as_str).unwrap_or("road.svg");

    let config = ComposerConfig::default();
    let composed = compose_path(&demo_road(), &config)?;
    log::info!(
        "composed {} geometry records, {} samples, total length {:.3}",
        composed.records.len(),
        composed.samples.len(),
        composed.total_length,
    );

    write_xodr(&composed, &RoadMeta::now("D4C_XODR_generator"), xodr_path)?;
    write_svg(&composed.samples, svg_path)?;
    Ok(())
}

fn main() {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    if let Err(ref e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
