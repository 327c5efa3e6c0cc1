// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use article_qa_node::{ArticleEngine, Config};
use std::env;
use std::io::{self, BufRead, Write};
use tracing::warn;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    println!("🚀 Starting Article QA Node...\n");
    println!("📦 BUILD VERSION: {}", article_qa_node::version::VERSION);
    println!();

    let config = Config::from_env();
    if let Err(e) = config.validate() {
        anyhow::bail!("Invalid configuration: {}", e);
    }

    println!("🧠 Loading pretrained models (downloaded on first run)...");
    let engine = ArticleEngine::new(config).await?;
    println!("✅ Models loaded\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Enter the article link (or 'quit'): ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let link = line?.trim().to_string();
        if link.is_empty() {
            continue;
        }
        if link == "quit" || link == "exit" {
            break;
        }

        let opened = match engine.open(&link).await {
            Ok(opened) => opened,
            Err(e) => {
                warn!("Extraction failed for {}: {}", link, e);
                continue;
            }
        };

        println!("\n✅ Text extracted successfully!\n");
        println!("Extracted Text from the Article:");
        println!("{}\n", opened.session.article_text);
        println!("Generated Summary:");
        println!("{}\n", opened.summary);

        // Question loop: each answer appends a row to the session's record
        // file until the user starts over with a new link.
        loop {
            print!("Ask a question (empty line for a new link): ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else { return Ok(()) };
            let question = line?.trim().to_string();
            if question.is_empty() {
                break;
            }
            match engine.ask(&opened.session, &question).await {
                Ok(answer) => println!("Answer: {}\n", answer),
                Err(e) => warn!("Failed to answer question: {}", e),
            }
        }
    }

    Ok(())
}
