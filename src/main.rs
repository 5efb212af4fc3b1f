// src/main.rs
use clap::Parser;

use injurycheckr::cli::{self, Args};
use injurycheckr::{InjuryError, RunConfig};

fn init_logging(config: &RunConfig) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(config.log_level());
    // RUST_LOG may refine interactive logging; interop stays silent
    if !config.is_interop() {
        builder.parse_env(env_logger::Env::default());
    }
    let _ = builder.try_init();
}

fn main() {
    let args = Args::parse();
    let config = args.to_config();
    init_logging(&config);

    if let Err(err) = cli::run(&args.input, &config) {
        let code = err
            .downcast_ref::<InjuryError>()
            .map(InjuryError::exit_code)
            .unwrap_or(1);
        eprintln!("error: {:#}", err);
        std::process::exit(code);
    }
}
