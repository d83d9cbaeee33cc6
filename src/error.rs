use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Error opening file {path}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error creating JSON")]
    Serialize(#[from] serde_json::Error),

    #[error("Error writing report")]
    Write(#[source] std::io::Error),
}
