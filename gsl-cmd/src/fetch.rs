//! Dataset loading: filesystem or HTTP, with the three-region fan-out.
//!
//! Load failures degrade rather than abort: a partition that cannot be
//! fetched or parsed contributes an empty region to its frame, and the
//! failure is logged. A frame is only assembled once all three partition
//! futures have resolved.

use gsl_core::month_key::MonthKey;
use gsl_core::observation::Observation;
use gsl_core::region::{Region, Species};
use gsl_replay::frame::{Frame, FrameStore};
use log::{info, warn};
use std::path::PathBuf;

/// Where the dataset files live: a local directory or an HTTP base URL.
pub enum DatasetSource {
    Directory(PathBuf),
    Http {
        base: String,
        client: reqwest::Client,
    },
}

impl DatasetSource {
    /// Build a source from a root string. `http://` / `https://` roots get
    /// an HTTP client with a 60 second timeout; anything else is treated
    /// as a directory.
    pub fn from_root(root: &str) -> anyhow::Result<DatasetSource> {
        if root.starts_with("http://") || root.starts_with("https://") {
            let client = reqwest::Client::builder()
                .timeout(std::time::Duration::from_secs(60))
                .build()?;
            Ok(DatasetSource::Http {
                base: root.trim_end_matches('/').to_string(),
                client,
            })
        } else {
            Ok(DatasetSource::Directory(PathBuf::from(root)))
        }
    }

    /// Load one dataset file as text, by path relative to the root.
    pub async fn load_text(&self, relative: &str) -> anyhow::Result<String> {
        match self {
            DatasetSource::Directory(root) => {
                let path = root.join(relative);
                Ok(tokio::fs::read_to_string(&path).await?)
            }
            DatasetSource::Http { base, client } => {
                let url = format!("{base}/{relative}");
                let response = client.get(&url).send().await?;
                if !response.status().is_success() {
                    anyhow::bail!("bad response for {url}: {}", response.status());
                }
                Ok(response.text().await?)
            }
        }
    }
}

/// Load one region partition for a month. Failure yields an empty region.
async fn load_partition(
    source: &DatasetSource,
    species: Species,
    region: Region,
    key: MonthKey,
) -> Vec<Observation> {
    let path = species.partition_path(region, key);
    let body = match source.load_text(&path).await {
        Ok(body) => body,
        Err(e) => {
            warn!("failed to load partition {path}: {e}");
            return Vec::new();
        }
    };
    match Observation::from_geojson_str(&body) {
        Ok(observations) => observations,
        Err(e) => {
            warn!("malformed partition {path}: {e}");
            Vec::new()
        }
    }
}

/// Fan out the three region partitions for one month and fan them back in
/// as a single frame.
pub async fn load_frame(source: &DatasetSource, species: Species, key: MonthKey) -> Frame {
    let (mexico, utah, arizona) = tokio::join!(
        load_partition(source, species, Region::Mexico, key),
        load_partition(source, species, Region::Utah, key),
        load_partition(source, species, Region::Arizona, key),
    );
    Frame {
        mexico,
        utah,
        arizona,
    }
}

/// Preload frames for every key the replay will visit.
pub async fn load_frames(
    source: &DatasetSource,
    species: Species,
    keys: impl Iterator<Item = MonthKey>,
) -> FrameStore {
    let mut store = FrameStore::new();
    for key in keys {
        let frame = load_frame(source, species, key).await;
        if frame.is_empty() {
            info!("no observations for {key}");
        }
        store.insert(key, frame);
    }
    store
}
