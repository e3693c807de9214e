// ABOUTME: Minimal web front end for birdfeed.
// ABOUTME: Maps query parameters to a fetch+scan+render call and returns a content-typed feed.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use birdfeed_render::{render, FeedMeta, Format};
use birdfeed_scrape::Scanner;
use clap::Parser;
use serde::Deserialize;

const USER_AGENT: &str = "birdfeed/0.1";

/// Serve scraped timelines as syndication feeds.
#[derive(Parser, Debug)]
#[command(name = "birdfeed-server")]
#[command(about = "Serve scraped timeline pages as Atom, RSS, or JSON feeds")]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: SocketAddr,
}

struct AppState {
    scanner: Scanner,
    http: reqwest::Client,
}

/// Query parameters accepted at `/`. `user` wins when both are present;
/// with neither, the home page form is served instead.
#[derive(Debug, Deserialize, Default)]
struct FeedParams {
    user: Option<String>,
    q: Option<String>,
    format: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let state = Arc::new(AppState {
        scanner: Scanner::builder().build()?,
        http: reqwest::Client::builder().user_agent(USER_AGENT).build()?,
    });

    let app = Router::new()
        .route("/", get(feed_or_home))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    tracing::info!("listening on {}", args.addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn feed_or_home(
    State(state): State<Arc<AppState>>,
    Query(params): Query<FeedParams>,
) -> Response {
    let (title, uri) = match feed_target(&state.scanner, &params) {
        Some(target) => target,
        None => return Html(HOME_PAGE).into_response(),
    };
    let format = Format::from(params.format.as_deref().unwrap_or_default());

    let html = match fetch(&state.http, &uri).await {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!("fetch failed for {}: {}", uri, err);
            return (
                StatusCode::BAD_GATEWAY,
                format!("upstream fetch failed: {}", err),
            )
                .into_response();
        }
    };

    let posts = state.scanner.scan(&html);
    tracing::debug!("scraped {} posts from {}", posts.len(), uri);

    let meta = FeedMeta {
        title,
        uri: Some(uri),
    };
    match render(format, &meta, &posts, false) {
        Ok(body) => ([(header::CONTENT_TYPE, format.content_type())], body).into_response(),
        Err(err) => {
            tracing::error!("render failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("render failed: {}", err),
            )
                .into_response()
        }
    }
}

/// Resolve the request parameters to a feed title and page URL.
/// Empty parameter values count as absent.
fn feed_target(scanner: &Scanner, params: &FeedParams) -> Option<(String, String)> {
    if let Some(user) = params.user.as_deref().filter(|s| !s.is_empty()) {
        let handle = user.trim_start_matches('@');
        return Some((
            format!("Feed for: @{}", handle),
            scanner.options().profile_url(handle).to_string(),
        ));
    }
    if let Some(query) = params.q.as_deref().filter(|s| !s.is_empty()) {
        return Some((
            format!("Search: {}", query),
            scanner.options().search_url(query).to_string(),
        ));
    }
    None
}

async fn fetch(http: &reqwest::Client, url: &str) -> reqwest::Result<String> {
    http.get(url).send().await?.error_for_status()?.text().await
}

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>birdfeed</title></head>
<body>
<h1>birdfeed</h1>
<form method="get">
<strong>See a user's posts:</strong>
<input type="text" name="user"><br>
<strong>Or, search:</strong>
<input type="text" name="q"><br>
<b>Format:</b>
<select name="format">
   <option value="atom">Atom</option>
   <option value="rss">RSS2</option>
   <option value="json">JSON</option>
</select><br>
<input type="submit">
</form>
</body>
</html>
"#;
