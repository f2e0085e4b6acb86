//! Public page map: paths, the login redirect, and the sitemap/robots
//! files generated from them.

use jiff::civil::Date;

pub const SITE_URL_ENV: &str = "SITE_URL";
pub const DEFAULT_SITE_URL: &str = "http://localhost:8080";
/// Id of the `<script type="application/json">` element holding data
/// rendered into a page at build time.
pub const INITIAL_DATA_ID: &str = "initial-data";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    Gallery,
    Auctions,
    MyAuctions,
    Login,
    Wishlist,
}

impl SitePage {
    pub const ALL: [SitePage; 6] = [
        Self::Home,
        Self::Gallery,
        Self::Auctions,
        Self::MyAuctions,
        Self::Login,
        Self::Wishlist,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Gallery => "/galeri",
            Self::Auctions => "/lelang",
            Self::MyAuctions => "/lelang-saya",
            Self::Login => "/login",
            Self::Wishlist => "/wishlist",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Lelang Koi",
            Self::Gallery => "Galeri Koi",
            Self::Auctions => "Lelang",
            Self::MyAuctions => "Lelang Saya",
            Self::Login => "Masuk",
            Self::Wishlist => "Wishlist",
        }
    }

    /// Pages listed in the sitemap. Personal pages and the login
    /// redirector are kept out of search indexes.
    pub fn is_indexable(&self) -> bool {
        matches!(self, Self::Home | Self::Gallery | Self::Auctions)
    }

    fn change_frequency(&self) -> &'static str {
        match self {
            Self::Auctions => "hourly",
            _ => "daily",
        }
    }

    fn priority(&self) -> &'static str {
        match self {
            Self::Home => "1.0",
            _ => "0.7",
        }
    }
}

/// Where `/login` sends the visitor. The login dialog itself lives on the
/// home page.
pub fn login_redirect(query: &str) -> String {
    if query_flag(query, "verified") {
        "/?verified=true".to_string()
    } else {
        "/?openLogin=true".to_string()
    }
}

/// Whether a boolean flag like `openLogin=true` is set in a query string.
pub fn query_flag(query: &str, flag: &str) -> bool {
    query
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .any(|(key, value)| key == flag && value == "true")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_url: String,
}

impl SiteConfig {
    pub fn new(site_url: impl Into<String>) -> Self {
        let site_url = site_url.into();
        Self {
            site_url: site_url.trim().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        match std::env::var(SITE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_SITE_URL),
        }
    }

    pub fn url_for(&self, page: SitePage) -> String {
        match page {
            SitePage::Home => format!("{}/", self.site_url),
            _ => format!("{}{}", self.site_url, page.path()),
        }
    }

    pub fn sitemap_xml(&self, last_modified: Date) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
        );
        for page in SitePage::ALL.iter().filter(|p| p.is_indexable()) {
            xml.push_str(&format!(
                "  <url>\n    <loc>{}</loc>\n    <lastmod>{last_modified}</lastmod>\n    \
                 <changefreq>{}</changefreq>\n    <priority>{}</priority>\n  </url>\n",
                self.url_for(*page),
                page.change_frequency(),
                page.priority(),
            ));
        }
        xml.push_str("</urlset>\n");
        xml
    }

    pub fn robots_txt(&self) -> String {
        let mut robots = String::from("User-agent: *\nAllow: /\n");
        for page in SitePage::ALL.iter().filter(|p| !p.is_indexable()) {
            robots.push_str(&format!("Disallow: {}\n", page.path()));
        }
        robots.push_str(&format!("\nSitemap: {}/sitemap.xml\n", self.site_url));
        robots
    }
}
