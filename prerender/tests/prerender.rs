use payloads::{
    ClientConfig,
    responses::{GalleryItem, InitialData, Page},
    site::SiteConfig,
};
use prerender::{Config, INITIAL_DATA_ID, generate, render_gallery_page};
use std::path::Path;
use std::time::Duration;
use test_helpers::{spawn_app, unreachable_client};

const SHELL: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>Lelang Koi</title>\n\
                     </head>\n<body></body>\n</html>\n";

fn config_for(address: &str, out_dir: &Path) -> Config {
    Config {
        client: ClientConfig::new(address),
        site: SiteConfig::new("https://koi.test"),
        out_dir: out_dir.to_path_buf(),
        revalidate_every: Duration::from_secs(60),
    }
}

fn write_shell(out_dir: &Path) -> anyhow::Result<()> {
    std::fs::write(out_dir.join("index.html"), SHELL)?;
    Ok(())
}

/// Pull the embedded initial data back out of a rendered page.
fn embedded_data(html: &str) -> Option<InitialData<Page<GalleryItem>>> {
    let open = format!("<script id=\"{INITIAL_DATA_ID}\" type=\"application/json\">");
    let start = html.find(&open)? + open.len();
    let end = start + html[start..].find("</script>")?;
    serde_json::from_str(&html[start..end]).ok()
}

#[tokio::test]
async fn gallery_is_embedded_when_prefetch_succeeds() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let items = app.seed_gallery(15);
    let out = tempfile::tempdir()?;
    write_shell(out.path())?;

    let config = config_for(&app.address, out.path());
    generate(&config, &app.client).await?;

    let html = std::fs::read_to_string(out.path().join("galeri/index.html"))?;
    assert!(html.contains("<title>Galeri Koi</title>"));
    let initial = embedded_data(&html).expect("initial data is embedded");
    assert_eq!(initial.data.data.len(), 12);
    assert_eq!(initial.data.data[0].id, items[0].id);
    assert_eq!(initial.data.meta.total, 15);

    Ok(())
}

#[tokio::test]
async fn prefetch_failure_renders_without_initial_data() -> anyhow::Result<()> {
    let out = tempfile::tempdir()?;
    write_shell(out.path())?;
    let client = unreachable_client();

    let config = config_for(&client.address, out.path());
    generate(&config, &client).await?;

    let html = std::fs::read_to_string(out.path().join("galeri/index.html"))?;
    assert!(!html.contains(INITIAL_DATA_ID));
    assert!(html.contains("<title>Galeri Koi</title>"));

    Ok(())
}

#[tokio::test]
async fn sitemap_and_robots_are_written() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let out = tempfile::tempdir()?;
    write_shell(out.path())?;

    generate(&config_for(&app.address, out.path()), &app.client).await?;

    let sitemap = std::fs::read_to_string(out.path().join("sitemap.xml"))?;
    assert!(sitemap.contains("<loc>https://koi.test/galeri</loc>"));
    assert!(sitemap.contains("<loc>https://koi.test/lelang</loc>"));
    assert!(!sitemap.contains("wishlist"));

    let robots = std::fs::read_to_string(out.path().join("robots.txt"))?;
    assert!(robots.contains("Disallow: /lelang-saya"));
    assert!(robots.contains("Sitemap: https://koi.test/sitemap.xml"));

    Ok(())
}

#[tokio::test]
async fn missing_app_shell_is_an_error() {
    let app = spawn_app().await;
    let out = tempfile::tempdir().expect("tempdir");

    let result =
        generate(&config_for(&app.address, out.path()), &app.client).await;
    assert!(result.is_err());
}

#[test]
fn script_content_cannot_close_the_element() -> anyhow::Result<()> {
    let page = Page {
        message: None,
        data: vec![test_helpers::gallery_item_details(
            "</script><script>alert(1)",
            "Kohaku",
            jiff::Timestamp::now(),
        )],
        meta: payloads::responses::PageMeta {
            page: 1,
            limit: 12,
            total: 1,
        },
    };
    let initial = InitialData {
        generated_at: jiff::Timestamp::now(),
        data: page,
    };

    let html = render_gallery_page(SHELL, Some(&initial))?;
    assert_eq!(html.matches("</script>").count(), 1);
    let parsed = embedded_data(&html).expect("payload parses");
    assert_eq!(parsed.data.data[0].title, "</script><script>alert(1)");

    Ok(())
}
