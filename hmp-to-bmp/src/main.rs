use std::{
    io::{self, BufWriter, Write},
    time::Instant,
};

use hmp_to_bmp::{ConvertConfig, ConvertResult, HeatmapConverter, Invocation, USAGE};
use log::{error, info, warn, LevelFilter};

fn convert(config: ConvertConfig) -> ConvertResult<()> {
    let dims = config.dims;

    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    info!("  Source        : {:?}", config.src);
    info!("  Destination   : {:?} ({:?})", config.dst, config.format);
    info!("  Grid          : {} × {} (tim × tck)", dims.tim_nb, dims.tck_nb);
    info!("  Expected size : {} B", dims.expected_bytes());
    info!("  Volume ref    : {}", config.vol_ref);
    info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let started = Instant::now();
    let converter = HeatmapConverter::new(config);

    let mut out = BufWriter::new(io::stdout().lock());
    let report = converter.run(&mut out)?;
    out.flush()?;

    if report.malformed_tail() {
        warn!(
            "Ignored {} trailing bytes after the last full sample",
            report.samples.truncated_tail
        );
    }

    info!("\n{}", report.raster);
    info!(
        "✓ Conversion complete in {:.3}s: {:?}",
        started.elapsed().as_secs_f64(),
        converter.config().dst
    );

    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_target(false)
        .format_timestamp_secs()
        .parse_default_env()
        .init();

    let config = match Invocation::from_args(std::env::args_os()) {
        Ok(Invocation::Usage) => {
            println!("{USAGE}");
            return;
        }
        Ok(Invocation::Convert(config)) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = convert(config) {
        error!("Conversion failed: {e}");
        std::process::exit(1);
    }
}
