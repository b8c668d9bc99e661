//! Run the reference simulation: P(X > 8) from 155 million proposal draws.

use tailprob::{output, Config, ConfigError, TailSampler};

fn main() -> Result<(), ConfigError> {
    let config = Config::reference();
    println!(
        "Estimating P(X > {}) from {} draws...",
        config.threshold, config.sample_count
    );

    let estimate = TailSampler::with_config(config).run()?;
    println!("{}", output::format_estimate(&estimate));
    Ok(())
}
