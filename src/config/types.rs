use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for the scraper
///
/// Every key has a default, so an empty file (or no file at all) yields the
/// compiled-in settings for the public registry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub http: HttpConfig,
    pub politeness: PolitenessConfig,
    pub output: OutputConfig,
}

/// Where the registry lives and how far to paginate
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scheme and host of the registry; relative links are resolved against it
    pub origin: String,

    /// Path of the paginated listing page
    #[serde(rename = "listing-path")]
    pub listing_path: String,

    /// Upper bound on listing pages fetched in one run
    #[serde(rename = "max-pages")]
    pub max_pages: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            origin: "https://war-sanctions.gur.gov.ua".to_string(),
            listing_path: "/en/transport/shadow-fleet".to_string(),
            max_pages: 55,
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// User agent sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"
                .to_string(),
            timeout_secs: 30,
        }
    }
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Fixed pauses between requests
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PolitenessConfig {
    /// Pause between listing page fetches (milliseconds)
    #[serde(rename = "page-delay-ms")]
    pub page_delay_ms: u64,

    /// Pause between detail page fetches (milliseconds)
    #[serde(rename = "detail-delay-ms")]
    pub detail_delay_ms: u64,
}

impl Default for PolitenessConfig {
    fn default() -> Self {
        Self {
            page_delay_ms: 1000,
            detail_delay_ms: 1500,
        }
    }
}

impl PolitenessConfig {
    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn detail_delay(&self) -> Duration {
        Duration::from_millis(self.detail_delay_ms)
    }
}

/// Output file configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the JSON checkpoint of scraped vessels
    #[serde(rename = "checkpoint-path")]
    pub checkpoint_path: String,

    /// Path to the JSON export of the enumerated listing
    #[serde(rename = "listing-path")]
    pub listing_path: String,

    /// Number of successful extractions between checkpoint writes
    #[serde(rename = "checkpoint-every")]
    pub checkpoint_every: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            checkpoint_path: "shadow_fleet.json".to_string(),
            listing_path: "vessel_list.json".to_string(),
            checkpoint_every: 50,
        }
    }
}
