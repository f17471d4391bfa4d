use career_compass::config::AppConfig;
use career_compass::server::{init_tracing, run};

#[tokio::main]
async fn main() {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("career-compass: {err}");
            std::process::exit(1);
        }
    };
    init_tracing(&config.server);

    if let Err(err) = run(config).await {
        tracing::error!(error = %err, "career-compass failed");
        std::process::exit(1);
    }
}
