//! Portal - read-only terminal view of the Atrium intranet
//!
//! Renders the landing page the way a signed-out employee sees it:
//! sections, quick links, and the popup carousel. With `--search` it
//! runs the portal's title filter over the three content feeds instead.

use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use atrium_client::ApiClient;
use atrium_console::config::Args;
use atrium_console::layout;
use atrium_console::list::{ListState, Searchable};
use atrium_console::portal::{PortalFeed, PortalHome};

#[derive(Parser, Debug)]
#[command(name = "atrium-portal")]
#[command(about = "Read-only view of the Atrium portal")]
struct PortalCli {
    #[command(flatten)]
    args: Args,

    /// Filter the news, knowledge, and security feeds by title
    #[arg(long)]
    search: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let cli = PortalCli::parse();

    // Initialize tracing/logging
    let log_level = cli.args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("atrium_console={},info", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = cli.args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    info!("Portal backend: {}", cli.args.api_url);

    let client = Arc::new(ApiClient::new(cli.args.client_config()));

    println!("{}", layout::rainbow("Atrium"));
    let nav: Vec<&str> = layout::portal_menu().iter().map(|m| m.label).collect();
    println!("{}", nav.join(" | "));
    println!();

    match cli.search {
        Some(query) => render_search(client, cli.args.page_size, &query).await,
        None => render_home(client).await,
    }
}

async fn render_home(client: Arc<ApiClient>) -> anyhow::Result<()> {
    let mut home = PortalHome::new(client);
    home.load().await?;

    for section in &home.sections {
        println!("## {}", section.title);
        println!("{}", section.body);
        println!();
    }

    if !home.links.is_empty() {
        println!("Quick links:");
        for link in &home.links {
            println!("  {} -> {}", link.label, link.url);
        }
        println!();
    }

    if !home.carousel.is_empty() {
        println!("Popup carousel ({} images):", home.carousel.images().len());
        for image in home.carousel.images() {
            println!("  {}", image.path);
        }
    }

    Ok(())
}

async fn render_search(
    client: Arc<ApiClient>,
    page_size: usize,
    query: &str,
) -> anyhow::Result<()> {
    let mut feed = PortalFeed::new(client, page_size);
    feed.load().await?;
    feed.search(query);

    let nothing = feed.articles.filtered().is_empty()
        && feed.knowledge.filtered().is_empty()
        && feed.security.filtered().is_empty();
    if nothing {
        println!("No results for '{}'", query);
        return Ok(());
    }

    render_feed("News", &feed.articles);
    render_feed("IT knowledge", &feed.knowledge);
    render_feed("Security", &feed.security);
    Ok(())
}

fn render_feed<T: Searchable>(heading: &str, list: &ListState<T>) {
    let matches = list.filtered();
    if matches.is_empty() {
        return;
    }

    println!("{} ({} matches):", heading, matches.len());
    for row in list.visible() {
        println!("  {}", row.search_text());
    }
    if list.pager.total_pages() > 1 {
        println!(
            "  ... page 1 of {}, {} total",
            list.pager.total_pages(),
            list.pager.total_items()
        );
    }
    println!();
}
