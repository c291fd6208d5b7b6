#[derive(Debug, thiserror::Error)]
pub enum GlError {
    #[error("entry point not loaded: {0}")]
    MissingEntryPoint(String),

    #[error("unknown API type: {0}")]
    UnknownApi(String),
}
