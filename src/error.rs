use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ResponsiveError {
    #[error(
        "invalid breakpoints: tablet ({tablet}) must be above zero and below desktop ({desktop})"
    )]
    InvalidBreakpoints { tablet: u32, desktop: u32 },
    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[cfg(feature = "serde")]
    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] serde_json::Error),
}
