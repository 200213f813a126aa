use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use log::{LevelFilter, info};
use serde::Serialize;
use spatial_relate::io::ext_repr::ExtRelationRecord;
use spatial_relate::util::RelateConfig;

use crate::EPOCH;

/// Reads relation records: a JSON array, or one JSON object per line for `.jsonl` files
pub fn read_records(path: &Path) -> Result<Vec<ExtRelationRecord>> {
    let file = File::open(path)
        .with_context(|| format!("could not open record file: {}", path.display()))?;
    let reader = BufReader::new(file);

    match path.extension().and_then(|e| e.to_str()) {
        Some("jsonl") => reader
            .lines()
            .enumerate()
            .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()))
            .map(|(i, line)| {
                let line = line.with_context(|| format!("could not read line {}", i + 1))?;
                serde_json::from_str(&line)
                    .with_context(|| format!("could not parse record on line {}", i + 1))
            })
            .collect(),
        _ => serde_json::from_reader(reader)
            .with_context(|| format!("could not parse record file: {}", path.display())),
    }
}

pub fn read_config(path: &Path) -> Result<RelateConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file)).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write output file: {}", path.display()))?;

    info!(
        "[IO] output written to {:?}",
        fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[MAIN] time: {}", jiff::Timestamp::now());
    Ok(())
}
