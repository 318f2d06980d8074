use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReferralError {
    /// One or more required columns are absent after header trimming.
    ///
    /// The list preserves required-column order so the message is stable.
    #[error("invalid column structure; missing required columns:{}", format_missing(missing))]
    Schema { missing: Vec<String> },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

fn format_missing(missing: &[String]) -> String {
    let mut out = String::new();
    for name in missing {
        out.push_str("\n  - ");
        out.push_str(name);
    }
    out
}

pub type Result<T> = std::result::Result<T, ReferralError>;
