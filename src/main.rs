use std::{env, sync::Arc};

use grammar_correction::{GrammarCorrector, MockGrammarCorrector};
use openai_api::OpenAIGrammarCorrector;
use tracing::*;
use web::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    info!(
        "Starting... CARGO_PKG_NAME={}, CARGO_PKG_VERSION={}, version={}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        option_env!("version").unwrap_or("(not defined at compile)")
    );

    let api_key = read_env_var("OPENAI_API_KEY");
    let mock_mode = env::var("OPENAI_MOCK").map(|v| v == "true").unwrap_or(false);
    let corrector: Arc<dyn GrammarCorrector> = if mock_mode {
        info!("server in mock mode");
        Arc::new(MockGrammarCorrector)
    } else {
        Arc::new(OpenAIGrammarCorrector::new())
    };

    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse()?;

    web::serve(port, AppState { api_key, corrector }).await?;

    Ok(())
}

fn read_env_var(name: &str) -> String {
    env::var(name).unwrap_or_else(|_| panic!("Expected env var: {}", name))
}
