use std::io;
use std::path::{Component, Path, PathBuf};

use html_escape::{encode_double_quoted_attribute, encode_text};

const LISTING_PREFIX: &str = "/games/";
const LISTING_SUFFIX: &str = "/sounds/";

/// Extension the listing includes, matched case-sensitively.
const SOUND_EXT: &str = ".m4a";

/// Whether a request path should be answered with a sound directory listing.
///
/// The pattern is prefix plus suffix, not a fixed depth: game clients request
/// nested paths like `/games/<id>/assets/sounds/`.
pub fn is_listing_path(path: &str) -> bool {
    path.starts_with(LISTING_PREFIX) && path.ends_with(LISTING_SUFFIX)
}

/// Why a listing could not be produced. The caller decides what happens next.
#[derive(Debug)]
pub enum ListingError {
    /// The request path contained a `..` segment.
    Traversal,
    /// The directory could not be read.
    Io(io::Error),
}

impl std::fmt::Display for ListingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Traversal => write!(f, "path escapes the web root"),
            Self::Io(e) => write!(f, "{e}"),
        }
    }
}

impl From<io::Error> for ListingError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Map a request path onto the web root, refusing `..` segments.
fn resolve(root: &Path, request_path: &str) -> Result<PathBuf, ListingError> {
    let relative = Path::new(request_path.trim_start_matches('/'));
    if relative
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(ListingError::Traversal);
    }
    Ok(root.join(relative))
}

/// Render the HTML page for a `sounds/` directory request.
///
/// Lists `.m4a` entries only, sorted, as `<li><a>` items whose hrefs are bare
/// filenames so they stay relative to the listing URL. Filenames are escaped
/// for the position they land in, href attribute or link text. Game clients
/// parse exactly this shape, so the markup is deliberately minimal and stable.
pub async fn render_listing(root: &Path, request_path: &str) -> Result<String, ListingError> {
    let dir = resolve(root, request_path)?;
    let mut entries = tokio::fs::read_dir(&dir).await?;
    let mut names = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if name.ends_with(SOUND_EXT) {
            names.push(name);
        }
    }

    names.sort_unstable();

    let mut page = String::from("<html><body><ul>");
    for name in &names {
        let href = encode_double_quoted_attribute(name);
        let text = encode_text(name);
        page.push_str(&format!(r#"<li><a href="{href}">{text}</a></li>"#));
    }
    page.push_str("</ul></body></html>");
    Ok(page)
}
