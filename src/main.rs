use anagrams::core::report::write_report;
use anagrams::utils::{logger, validation::Validate};
use anagrams::{AnagramEngine, AnagramError, CliConfig};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting anagrams CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        fail(e);
    }

    let request = match config
        .into_request()
        .and_then(|request| request.validate().map(|_| request))
    {
        Ok(request) => request,
        Err(e) => fail(e),
    };

    let outcome = AnagramEngine::from_request(&request)
        .and_then(|engine| engine.run(&request))
        .and_then(|report| request.format.render(&report))
        .and_then(|rendered| write_report(&mut std::io::stdout().lock(), &rendered));

    if let Err(e) = outcome {
        fail(e);
    }
}

fn fail(e: AnagramError) -> ! {
    tracing::error!(
        "❌ anagrams failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.severity().exit_code());
}
