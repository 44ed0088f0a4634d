use clap::Parser;
use fullname_csv::utils::logger;
use fullname_csv::{run, CliArgs, PipelineError};

fn report(e: &PipelineError) -> ! {
    tracing::error!(
        "❌ parse failed: {} (Category: {:?}, exit code: {})",
        e,
        e.category(),
        e.exit_code()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}

fn main() {
    // clap exits with status 2 on usage errors, before any file is touched
    let args = CliArgs::parse();

    if let Err(e) = logger::init_cli_logger(args.log_level, args.log_file.as_deref()) {
        eprintln!("❌ Cannot open log file: {}", e);
        std::process::exit(e.exit_code());
    }

    tracing::debug!("CLI args: {:?}", args);

    let config = match args.into_config() {
        Ok(config) => config,
        Err(e) => report(&e),
    };

    match run(&config) {
        Ok(summary) => {
            tracing::info!("✅ parsed {} rows", summary.rows);
            println!("{}", summary.output_path.display());
        }
        Err(e) => report(&e),
    }
}
