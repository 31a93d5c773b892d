use clap::Parser;
use log::{error, info};
use flexi_logger::with_thread;
use itertools::Itertools;
use datasync::config::parse_config;
use datasync::writer::WriterSettings;

/// Validates a data transfer job configuration and prints the writer settings
/// derived from it.
#[derive(Parser, Debug)]
#[command(name = "datasync")]
struct Args {
    /// Path to the job configuration file, json or yaml
    job_file: String,
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() {
    let args = Args::parse();
    flexi_logger::Logger::try_with_str(&args.log_level)
        .unwrap()
        .format(with_thread)
        .start()
        .unwrap();
    if let Err(e) = run(&args) {
        error!("invalid job configuration: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_config(&args.job_file)?;
    let settings = WriterSettings::from_config(&config)?;
    let content = &config.job.content[0];
    info!("job configuration ok: {} -> {}, {} channel(s)",
          content.reader.name, content.writer.name, config.job.setting.speed.channel);
    info!("error limit: {} record(s), ratio {}", settings.errors, settings.error_ratio);
    if let Some(path) = &settings.dirty_path {
        info!("dirty records routed to {}", path);
    }
    info!("source columns: {}", settings.src_cols.iter().join(", "));
    Ok(())
}
