// Folio - Headless Page Behavior Controller
//
// A deterministic implementation of the client-side behaviors of a static
// portfolio page: smooth-scroll navigation, a mobile menu, scroll-driven
// styling and reveals, counter and typing animations, a contact-form
// validator, and a transient notification popup.
//
// Architecture:
// - dom: arena document tree the controller is mounted onto
// - page: the behavior controller (one impl block per concern)
// - clock: virtual millisecond clock + typed timer queue
// - observer: deterministic intersection observer model
// - events: serde-tagged event type doubling as a script format
// - demo: built-in sample page and scripted user session

mod cli;
mod clock;
mod demo;
mod dom;
mod events;
mod observer;
mod page;
mod style;
mod viewport;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use dom::{Document, NodeSpec};
use events::PageEvent;
use page::Page;
use std::fs;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use viewport::Viewport;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Precedence: RUST_LOG env var > default "info"
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "folio=info".into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let doc = match &cli.fixture {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading fixture {}", path.display()))?;
            let spec: NodeSpec = serde_json::from_str(&raw)
                .with_context(|| format!("parsing fixture {}", path.display()))?;
            Document::from_spec(spec)
        }
        None => demo::sample_page(),
    };

    let mut page = Page::mount(doc, Viewport::new(cli.viewport));
    info!(viewport = cli.viewport, "page mounted");

    match &cli.script {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading script {}", path.display()))?;
            let events: Vec<PageEvent> = serde_json::from_str(&raw)
                .with_context(|| format!("parsing script {}", path.display()))?;
            for event in &events {
                debug!(?event, "script event");
                page.handle(event);
            }
        }
        None => {
            for (step, event) in demo::demo_timeline() {
                info!(step, "demo");
                page.handle(&event);
            }
        }
    }

    report(&page);
    Ok(())
}

/// Log a closing summary of the page state
fn report(page: &Page) {
    let navbar_scrolled = page
        .doc
        .by_id("navbar")
        .is_some_and(|n| page.doc.has_class(n, "scrolled"));
    let revealed = page
        .doc
        .by_class("project-card")
        .iter()
        .chain(page.doc.by_class("skill-category").iter())
        .filter(|n| page.doc.node(**n).style.is_revealed())
        .count();
    info!(
        elapsed_ms = page.now_ms(),
        scroll_y = page.viewport.scroll_y,
        navbar_scrolled,
        revealed,
        menu_open = page.menu_open(),
        notification = page.notification_message().as_deref().unwrap_or("-"),
        pending_timers = page.pending_timers(),
        "session finished"
    );
}
