//! Extract articles from the files named on the command line
//!
//! Run with: cargo run --example extract -- posts/*.xml
//!
//! Set RUST_LOG=sblg_article=debug to follow the extraction.

use sblg_article::Extractor;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: extract FILE...");
        std::process::exit(1);
    }

    let extractor = Extractor::default();
    let mut failed = 0;

    for (path, result) in paths.iter().zip(extractor.extract_all(&paths)) {
        match result {
            Ok(Some(article)) => {
                println!("{}", article.base_name.display());
                println!("  title:  {}", article.title);
                println!("  author: {}", article.author);
                println!("  date:   {}", article.published_at.format("%Y-%m-%d"));
                if let Some(tags) = &article.tags {
                    println!("  tags:   {}", tags);
                }
                println!("  body:   {} bytes", article.body.len());
                println!("  aside:  {} bytes", article.aside.len());
            }
            Ok(None) => println!("{}: no opted-in article", path),
            Err(err) => {
                // Diagnostic line: path:line:col: message
                eprintln!("{}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
