use globset::GlobSet;

/// Configuration shared by snippet extraction and injection
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Filename suffix (without the dot) selecting which files are scanned
    pub source_extension: String,
    /// Language tag applied to generated fenced code blocks
    pub fence_language: String,
    /// Glob patterns excluding files from the scan, relative to the root
    pub exclude: Option<GlobSet>,
}

impl SyncConfig {
    /// Configuration for a Swift package: scan `.swift` files, fence as `swift`
    pub fn swift() -> Self {
        Self {
            source_extension: "swift".to_string(),
            fence_language: "swift".to_string(),
            exclude: None,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::swift()
    }
}
