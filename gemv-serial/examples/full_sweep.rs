use gemv_serial::{run_all_domains, scenarios, SweepConfig};
use std::time::Instant;

fn main() {
    // Initialize logging based on RUST_LOG environment variable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SweepConfig::default();
    log::info!(
        "Verifying serial gemv: {} scenarios per domain, seed {}, alpha {}, beta {}",
        scenarios().len(),
        config.seed,
        config.alpha,
        config.beta
    );

    let start = Instant::now();
    match run_all_domains(&config) {
        Ok(total) => {
            log::info!("{} scenario runs passed in {:?}", total, start.elapsed());
        }
        Err(err) => {
            log::error!("Verification failed: {}", err);
            std::process::exit(1);
        }
    }
}
