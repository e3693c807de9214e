// ABOUTME: Command-line front end for birdfeed.
// ABOUTME: Fetches a timeline page (or reads stdin), scrapes posts, and prints a feed.

use std::io::{self, Read};

use anyhow::{Context, Result};
use birdfeed_render::{render, FeedMeta, Format};
use birdfeed_scrape::Scanner;
use clap::Parser;

/// Scrape a timeline page and print it as a syndication feed.
#[derive(Parser, Debug)]
#[command(name = "birdfeed")]
#[command(about = "Scrape a timeline page and emit an Atom, RSS, or JSON feed", long_about = None)]
struct Args {
    /// Handle (with or without a leading @) or, with --search, a search
    /// string. Omit to read an HTML document from stdin.
    query: Option<String>,

    /// Treat the positional argument as a search string.
    #[arg(short, long)]
    search: bool,

    /// Output format: atom (default), rss, json.
    #[arg(short, long, default_value = "atom")]
    format: String,

    /// Pretty-print output (JSON only).
    #[arg(short, long, default_value_t = false)]
    pretty: bool,

    /// Suppress output; useful to probe whether a page fetches and scrapes.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let scanner = Scanner::builder().build()?;

    let (title, uri) = match &args.query {
        None => ("Untitled feed".to_string(), None),
        Some(query) if args.search => (
            format!("Search: {}", query),
            Some(scanner.options().search_url(query)),
        ),
        Some(handle) => {
            let handle = handle.trim_start_matches('@');
            (
                format!("Feed for: @{}", handle),
                Some(scanner.options().profile_url(handle)),
            )
        }
    };

    let html = match &uri {
        Some(url) => fetch(url.as_str())?,
        None => read_stdin()?,
    };

    let posts = scanner.scan(&html);
    let meta = FeedMeta {
        title,
        uri: uri.map(|u| u.to_string()),
    };
    let output = render(Format::from(args.format.as_str()), &meta, &posts, args.pretty)?;

    if !args.quiet {
        println!("{}", output);
    }
    Ok(())
}

fn fetch(url: &str) -> Result<String> {
    let resp = reqwest::blocking::get(url)
        .with_context(|| format!("fetching {}", url))?
        .error_for_status()?;
    Ok(resp.text()?)
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("reading HTML from stdin")?;
    Ok(buf)
}
