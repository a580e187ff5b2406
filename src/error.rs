use thiserror::Error;

#[derive(Error, Debug)]
pub enum PokedexError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("remote error: HTTP {status} for {url}")]
    Remote { status: u16, url: String },

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no next page")]
    NoNextPage,

    #[error("no previous page")]
    NoPreviousPage,

    #[error("unknown command: {0} (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("usage: {command} <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{0} has not been caught yet")]
    NotCaught(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, PokedexError>;
