//! Static generation of the public pages.
//!
//! Reads the `index.html` trunk produced, writes `galeri/index.html` with the
//! first gallery page embedded as initial data, and writes `sitemap.xml` and
//! `robots.txt` next to it. [`revalidate`] repeats this on an interval so the
//! embedded data never gets older than the configured period.

use anyhow::{Context, Result};
use jiff::{Timestamp, tz::TimeZone};
use payloads::{
    APIClient, ClientConfig, NoTokenStore,
    requests::GalleryQuery,
    responses::{GalleryItem, InitialData, Page},
    services,
    site::{SiteConfig, SitePage},
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

pub use payloads::site::INITIAL_DATA_ID;
pub const DEFAULT_OUT_DIR: &str = "ui/dist";
pub const DEFAULT_REVALIDATE_SECS: u64 = 60;

pub type GalleryData = InitialData<Page<GalleryItem>>;

pub struct Config {
    pub client: ClientConfig,
    pub site: SiteConfig,
    /// Directory holding trunk's build output.
    pub out_dir: PathBuf,
    pub revalidate_every: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        use std::env::var;

        let revalidate_secs = match var("PRERENDER_REVALIDATE_SECS") {
            Ok(secs) => secs
                .parse()
                .context("PRERENDER_REVALIDATE_SECS must be a number")?,
            Err(_) => DEFAULT_REVALIDATE_SECS,
        };

        Ok(Config {
            client: ClientConfig::from_env(),
            site: SiteConfig::from_env(),
            out_dir: var("PRERENDER_OUT_DIR")
                .unwrap_or_else(|_| DEFAULT_OUT_DIR.into())
                .into(),
            revalidate_every: Duration::from_secs(revalidate_secs),
        })
    }
}

/// Fetch the first gallery page. Failures are logged and yield `None`, so
/// the page is still rendered, just without initial data.
pub async fn prefetch_gallery(client: &APIClient) -> Option<GalleryData> {
    match services::get_gallery(client, &GalleryQuery::default()).await {
        Ok(data) => Some(InitialData {
            generated_at: Timestamp::now(),
            data,
        }),
        Err(e) => {
            tracing::error!("Gallery prefetch failed: {e}");
            None
        }
    }
}

/// Render the gallery page from the app shell.
pub fn render_gallery_page(
    template: &str,
    initial: Option<&GalleryData>,
) -> Result<String> {
    let mut html = set_title(template, SitePage::Gallery.title());
    if let Some(initial) = initial {
        let json = serde_json::to_string(initial)?;
        let script = format!(
            "<script id=\"{INITIAL_DATA_ID}\" type=\"application/json\">{}</script>\n",
            // keep the payload from closing the script element early
            json.replace("</", "<\\/")
        );
        html = insert_before(&html, "</head>", &script)
            .context("app shell has no </head>")?;
    }
    Ok(html)
}

fn set_title(html: &str, title: &str) -> String {
    match (html.find("<title>"), html.find("</title>")) {
        (Some(start), Some(end)) if start < end => format!(
            "{}<title>{title}</title>{}",
            &html[..start],
            &html[end + "</title>".len()..]
        ),
        _ => html.to_string(),
    }
}

fn insert_before(html: &str, marker: &str, content: &str) -> Option<String> {
    let at = html.find(marker)?;
    Some(format!("{}{content}{}", &html[..at], &html[at..]))
}

/// One generation pass over every artifact.
pub async fn generate(config: &Config, client: &APIClient) -> Result<()> {
    let shell_path = config.out_dir.join("index.html");
    let template = std::fs::read_to_string(&shell_path)
        .with_context(|| format!("reading {}", shell_path.display()))?;

    let initial = prefetch_gallery(client).await;
    let gallery = render_gallery_page(&template, initial.as_ref())?;
    write(&config.out_dir.join("galeri").join("index.html"), &gallery)?;

    let today = Timestamp::now().to_zoned(TimeZone::UTC).date();
    write(
        &config.out_dir.join("sitemap.xml"),
        &config.site.sitemap_xml(today),
    )?;
    write(&config.out_dir.join("robots.txt"), &config.site.robots_txt())?;

    tracing::info!(
        with_initial_data = initial.is_some(),
        "Rendered pages into {}",
        config.out_dir.display()
    );
    Ok(())
}

fn write(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)
        .with_context(|| format!("writing {}", path.display()))
}

pub fn client(config: &Config) -> APIClient {
    APIClient::new(&config.client, Arc::new(NoTokenStore))
}

/// Generate once, then again every `revalidate_every`. A failed pass is
/// logged and the previous output is left in place.
pub async fn revalidate(config: &Config) -> Result<()> {
    let client = client(config);
    generate(config, &client).await?;

    let mut interval = tokio::time::interval(config.revalidate_every);
    interval.tick().await;
    loop {
        interval.tick().await;
        if let Err(e) = generate(config, &client).await {
            tracing::error!("Revalidation failed: {e:#}");
        }
    }
}
