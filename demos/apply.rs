//! Run the deck's highlighter setup over a sample highlighted fragment.
//!
//! Run:
//!   RUST_LOG=debug cargo run --example apply [dark|light]

use anyhow::Result;
use shiki_setup::{AppearanceMode, HighlightOptions, shiki_setup};

const SAMPLE: &str = r#"<pre class="shiki" style="background-color:#212121"><code><span class="line">fn main() { println!("boom"); }</span></code></pre>"#;

fn main() -> Result<()> {
    env_logger::init();

    let mode: AppearanceMode = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("dark")
        .parse()?;

    let config = shiki_setup();
    println!("appearance:  {mode}");
    println!("theme:       {}", config.themes.for_mode(mode));

    let opts = HighlightOptions {
        lang: Some("rust".to_string()),
        line_numbers: false,
    };
    let code = config.preprocess("fn main() { println!(\"boom\"); }", &opts);
    println!("\nsource after preprocess:\n{code}");

    println!("\nmarkup before:\n{SAMPLE}");
    println!("\nmarkup after:\n{}", config.postprocess(SAMPLE));

    Ok(())
}
