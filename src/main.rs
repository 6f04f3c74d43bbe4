use anyhow::Result;
use clap::Parser;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

use docsearch_widget::{Backend, Page, SearchConfig, SearchWidget};

/// Search-as-you-type client for documentation search backends
#[derive(Parser, Debug)]
#[command(author, about, long_about = None)]
struct Args {
    /// Project slug the search is scoped to
    #[arg(long)]
    project: String,

    /// Documentation version to search
    #[arg(long, default_value = "latest")]
    doc_version: String,

    /// Documentation language
    #[arg(long, default_value = "en")]
    language: String,

    /// Search API host, e.g. https://readthedocs.org
    #[arg(long, env = "DOCSEARCH_API_HOST")]
    api_host: String,

    /// Which backend endpoint to query
    #[arg(long, value_enum, default_value = "project")]
    backend: Backend,

    /// Queries to run; with none given, lines are read from stdin
    query: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing to stderr so panel output stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = SearchConfig::new(
        &args.project,
        &args.doc_version,
        args.api_host.trim_end_matches('/'),
        args.backend,
    )
    .with_language(&args.language);

    tracing::info!(
        "Searching {} ({}, {}) via {:?} backend",
        config.project,
        config.version,
        config.language,
        config.backend
    );

    let mut page = Page::with_search_role();
    let Some(mut widget) = SearchWidget::attach(config, &mut page) else {
        anyhow::bail!("Page has no search input to attach to");
    };

    if args.query.is_empty() {
        // Each stdin line stands in for one input event of the search field.
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line?;
            widget.handle_input(line.trim(), &mut page).await;
            print_panel(&page);
        }
    } else {
        for query in &args.query {
            widget.handle_input(query, &mut page).await;
            print_panel(&page);
        }
    }

    Ok(())
}

fn print_panel(page: &Page) {
    match page.panel() {
        Some(panel) => println!("{}", panel.to_html()),
        None => println!("(no results)"),
    }
}
