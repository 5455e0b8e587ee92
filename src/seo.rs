use crate::catalog::Product;
use anyhow::{Context, Result};
use regex::Regex;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info};

const SCRIPT_OPEN: &str = "<script type=\"application/ld+json\">";
const SCRIPT_CLOSE: &str = "</script>";
const CURRENCY: &str = "USD";
const AVAILABILITY: &str = "https://schema.org/InStock";

/// Delay before emission when no idle hook exists on the runtime; keeps the
/// first interactive render ahead of SEO work.
const EMIT_FALLBACK_DELAY: Duration = Duration::from_secs(1);

/// Strip query parameters from a page URL, for canonical/og:url values.
pub fn strip_query_params(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}

/// Build the Schema.org `ItemList` describing the catalog: one `ListItem`
/// per product (1-based positions), each wrapping a `Product` with an
/// `Offer` triple of two-decimal price, fixed currency and availability.
pub fn build_structured_data(catalog: &[Product], page_url: Option<&str>) -> Value {
    let items: Vec<Value> = catalog
        .iter()
        .enumerate()
        .map(|(index, product)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "item": {
                    "@type": "Product",
                    "name": product.name,
                    "description": product.description,
                    "offers": {
                        "@type": "Offer",
                        "price": product.formatted_price(),
                        "priceCurrency": CURRENCY,
                        "availability": AVAILABILITY,
                    },
                },
            })
        })
        .collect();

    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "ItemList",
        "name": "Catálogo de Productos Electrónicos",
        "description": "Catálogo de productos electrónicos con buscador en vivo",
        "numberOfItems": catalog.len(),
        "itemListElement": items,
    });
    if let Some(url) = page_url {
        data["url"] = json!(strip_query_params(url));
    }
    data
}

/// Rewrite the canonical link href and `og:url` meta content to the given
/// query-stripped URL. Both tags are optional collaborators; absent tags are
/// left alone.
fn rewire_page_urls(html: &str, url: &str) -> String {
    // Unwraps are safe: both patterns are fixed literals.
    let canonical =
        Regex::new(r#"(<link\s+rel="canonical"\s+href=")[^"]*(")"#).expect("static regex");
    let og_url =
        Regex::new(r#"(<meta\s+property="og:url"\s+content=")[^"]*(")"#).expect("static regex");
    let html = canonical.replace(html, |caps: &regex::Captures| {
        format!("{}{}{}", &caps[1], url, &caps[2])
    });
    og_url
        .replace(&html, |caps: &regex::Captures| {
            format!("{}{}{}", &caps[1], url, &caps[2])
        })
        .into_owned()
}

/// Inject the structured-data script block into the host page's head, at
/// most once, and rewire its SEO URLs. A page that already carries the block
/// is left untouched.
pub fn inject_into_page(
    page: &Path,
    catalog: &[Product],
    page_url: Option<&str>,
) -> Result<()> {
    let html = std::fs::read_to_string(page)
        .with_context(|| format!("read host page {}", page.display()))?;
    if html.contains(SCRIPT_OPEN) {
        debug!(page = %page.display(), "structured data already present, skipping");
        return Ok(());
    }

    let data = build_structured_data(catalog, page_url);
    let block = format!("{SCRIPT_OPEN}{data}{SCRIPT_CLOSE}\n");

    let mut html = match page_url {
        Some(url) => rewire_page_urls(&html, strip_query_params(url)),
        None => html,
    };
    match html.find("</head>") {
        Some(pos) => html.insert_str(pos, &block),
        // No head section: append, the block is still a complete fragment.
        None => html.push_str(&block),
    }
    std::fs::write(page, html)
        .with_context(|| format!("write host page {}", page.display()))?;
    info!(page = %page.display(), products = catalog.len(), "structured data injected");
    Ok(())
}

/// Defer emission so it never blocks the first render. Fire-and-forget; a
/// failed injection is logged and otherwise dropped.
pub fn schedule_emission(
    page: Option<PathBuf>,
    catalog: Vec<Product>,
    page_url: Option<String>,
) {
    let Some(page) = page else {
        debug!("no host page configured, structured data emission skipped");
        return;
    };
    tokio::spawn(async move {
        sleep(EMIT_FALLBACK_DELAY).await;
        if let Err(e) = inject_into_page(&page, &catalog, page_url.as_deref()) {
            error!(?e, "structured data emission failed");
        }
    });
}
