pub mod spiral;
pub mod args;
pub mod io;
pub mod geo_2d;
mod crate_errors;

use tracing::level_filters::LevelFilter;

pub use crate_errors::{
    WgSpiralError,
    WgSpiralResult,
};

/// Install the diagnostic subscriber.
/// `RUST_LOG` wins when set; otherwise the verbosity count picks the level.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    // A second install (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// [Stage 1.]
/// Build the spiral target from the run arguments.
/// Loads the config file and applies the command line overrides.
/// Returns a `WgSpiralResult` with the `SpiralTarget` or an `Err`.
pub fn build_target(run_args: &args::RunArgs) -> WgSpiralResult<spiral::SpiralTarget> {
    println!("Loading spiral config file: {}...", run_args.cfg_file);
    Ok(spiral::SpiralTarget::from_cfg_file(
        &run_args.cfg_file,
        run_args.output_path.as_deref(),
        run_args.renderer.as_deref(),
    )?)
}

/// [Stage 2.]
/// Run the spiral process on the target and save it when an output path is set.
/// Returns a `WgSpiralResult` with the `Spiral` or an `Err`.
pub fn run_process(target: &spiral::SpiralTarget) -> WgSpiralResult<spiral::Spiral> {
    println!();
    println!("#################");
    println!("Running spiral...");
    println!("#################");
    println!();
    let spiral_out = spiral::do_spiral(target)?;

    println!("Waypoints: {}", spiral_out.waypoints.len());
    for name in ["input", "output"] {
        if let Some(port) = spiral_out.portlist.get(name) {
            println!("Port {}: {} facing {}", name, port.port, port.direction);
        }
    }
    if let Some(rendered) = &spiral_out.rendered {
        println!("Rendered centerline length: {:.4}", rendered.length);
    }

    if let Some(output_path) = &target.spiral_args.output_path {
        spiral::save_spiral(&spiral_out, output_path)?;
    }

    Ok(spiral_out)
}

/// Display an example config file.
/// Returns a `WgSpiralResult` with the printed config or an `Err`.
pub fn example_config(example_args: &args::ExampleArgs) -> WgSpiralResult<String> {
    let example = spiral::SpiralArgs::example();
    let buffer = io::cfg_to_string(&example, example_args.format)?;
    println!("{}", buffer);
    Ok(buffer)
}
