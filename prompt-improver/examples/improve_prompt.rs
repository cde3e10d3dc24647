//! Prompt Improvement Example
//!
//! Improves a prompt through the remote path when a credential is available,
//! or through the local heuristics otherwise.
//!
//! To run this example:
//! ```
//! PERPLEXITY_API_KEY=your_api_key cargo run --example improve_prompt -- "Write a blog post about AI"
//! cargo run --example improve_prompt -- --local "Write a blog post about AI"
//! ```

use prompt_improver::{
    config::{ConfigProviderExt, EnvConfigProvider},
    select_mode, Dispatcher, Notice, IMPROVEMENTS_SUMMARY,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut use_local_mode = false;
    let mut words = Vec::new();

    for arg in std::env::args().skip(1) {
        if arg == "--local" {
            use_local_mode = true;
        } else {
            words.push(arg);
        }
    }

    let prompt = words.join(" ");

    // Load API key from environment; without one the local path runs
    let config_provider = EnvConfigProvider::new().with_prefix("PERPLEXITY");
    let credential = config_provider.get_string_or("API_KEY", "");

    let mode = select_mode(&credential, use_local_mode);
    println!("{}", mode.action_label());
    println!("{}", mode.progress_label());

    let dispatcher = Dispatcher::new()?;
    let outcome = dispatcher.improve(&prompt, &credential, use_local_mode).await;
    let notice = Notice::from(&outcome);

    println!("\n{}: {}", notice.title, notice.description);

    if outcome.result.is_success() {
        println!("\nOriginal:\n{}", prompt);
        println!("\nImproved:\n{}", outcome.result.improved_text());
        println!("\nWhat changed:\n{}", IMPROVEMENTS_SUMMARY);
    } else {
        std::process::exit(1);
    }

    Ok(())
}
