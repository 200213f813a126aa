use anyhow::Result;
use clap::Parser as ClapParser;
use log::{info, warn};
use relate_cli::cli::Cli;
use relate_cli::eval::evaluate;
use relate_cli::{EPOCH, io};
use spatial_relate::Relator;
use spatial_relate::util::RelateConfig;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            RelateConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };
    let relator = Relator::new(config)?;

    info!("[MAIN] Successfully parsed RelateConfig: {config:?}");

    let records = io::read_records(&args.input_file)?;
    info!("[MAIN] {} records read from {}", records.len(), args.input_file.display());

    let evaluation = evaluate(&relator, &records, args.trace);
    let summary = &evaluation.summary;

    info!(
        "[MAIN] classified {}/{} records in {:.3}s",
        summary.n_records - summary.n_failed,
        summary.n_records,
        EPOCH.elapsed().as_secs_f64()
    );
    for (relation, count) in &summary.distribution {
        info!("[MAIN] {relation:<9} {count}");
    }
    match summary.accuracy {
        Some(accuracy) => info!(
            "[MAIN] {}/{} labels reproduced ({:.2}%)",
            summary.n_agreeing,
            summary.n_labelled,
            accuracy * 100.0
        ),
        None => info!("[MAIN] no labelled records"),
    }
    for (confusion, count) in &summary.confusions {
        warn!("[MAIN] {confusion}: {count}");
    }

    if let Some(output_file) = args.output_file {
        io::write_json(&evaluation, &output_file)?;
    }

    Ok(())
}
