use std::fmt;

use thiserror::Error;
use url::Url;

/// Length of a canonical YouTube video identifier.
pub const VIDEO_ID_LEN: usize = 11;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Rejection of a candidate video link.
///
/// This is an expected negative result, not a fault: the host surfaces it to
/// the user and simply does not navigate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VideoUrlError {
    #[error("no link was entered")]
    Empty,

    #[error("not a recognized YouTube video link")]
    Unrecognized,
}

//
// ─── VIDEO ID ──────────────────────────────────────────────────────────────────
//

/// The canonical 11-character token YouTube uses to address a single video.
///
/// Only constructed through validation, so a held `VideoId` is always
/// exactly [`VIDEO_ID_LEN`] characters over `[A-Za-z0-9_-]`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    /// Parse a bare identifier token.
    ///
    /// # Errors
    ///
    /// Returns `VideoUrlError::Unrecognized` if the input is not exactly 11
    /// characters from the identifier alphabet.
    pub fn parse(s: &str) -> Result<Self, VideoUrlError> {
        if is_video_id(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(VideoUrlError::Unrecognized)
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VideoId({})", self.0)
    }
}

//
// ─── VIDEO REFERENCE ───────────────────────────────────────────────────────────
//

/// Outcome of validating untrusted input as a single-video link.
///
/// Binds the raw text the user typed to the identifier extracted from it.
/// Transient by design: it carries no lifecycle of its own and is handed to
/// the results view right after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoReference {
    raw_input: String,
    video_id: VideoId,
}

impl VideoReference {
    /// Validate free-form input and extract the canonical video identifier.
    ///
    /// Accepted, anchored over the whole (trimmed) input:
    /// - `[http(s)://][www.]youtu.be/<id>`
    /// - `[http(s)://][www.]youtube.com/embed/<id>`
    /// - `[http(s)://][www.]youtube.com/v/<id>`
    /// - `[http(s)://][www.]youtube.com/watch?v=<id>[&...]`
    /// - `[http(s)://][www.]youtube.com/watch?<params>&v=<id>[&...]`
    /// - a bare 11-character identifier (what a prior validation returned)
    ///
    /// After the identifier only `&`- or `?`-prefixed trailing content may
    /// follow; fragments and further path segments reject. Host matching is
    /// case-insensitive, the identifier is case-sensitive.
    ///
    /// Pure and idempotent: re-validating an extracted id succeeds and
    /// returns the same id.
    ///
    /// # Errors
    ///
    /// `VideoUrlError::Empty` for blank input, `VideoUrlError::Unrecognized`
    /// for everything that is not one of the accepted forms.
    pub fn parse(raw: &str) -> Result<Self, VideoUrlError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(VideoUrlError::Empty);
        }
        // The accepted grammar is anchored over non-whitespace.
        if trimmed.chars().any(char::is_whitespace) {
            return Err(VideoUrlError::Unrecognized);
        }

        let video_id = extract_video_id(trimmed)?;
        Ok(Self {
            raw_input: raw.to_owned(),
            video_id,
        })
    }

    #[must_use]
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    #[must_use]
    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    #[must_use]
    pub fn into_video_id(self) -> VideoId {
        self.video_id
    }
}

//
// ─── EXTRACTION ────────────────────────────────────────────────────────────────
//

fn is_video_id(s: &str) -> bool {
    s.len() == VIDEO_ID_LEN
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

fn has_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn extract_video_id(input: &str) -> Result<VideoId, VideoUrlError> {
    if is_video_id(input) {
        return Ok(VideoId(input.to_owned()));
    }

    let absolute = if has_scheme(input) {
        input.to_owned()
    } else {
        format!("https://{input}")
    };
    let url = Url::parse(&absolute).map_err(|_| VideoUrlError::Unrecognized)?;

    // The accepted grammar has no room for credentials, ports, or fragments.
    if !matches!(url.scheme(), "http" | "https")
        || !url.username().is_empty()
        || url.password().is_some()
        || url.port().is_some()
        || url.fragment().is_some()
    {
        return Err(VideoUrlError::Unrecognized);
    }
    // A lone trailing `?` is not valid trailing content.
    if url.query().is_some_and(str::is_empty) {
        return Err(VideoUrlError::Unrecognized);
    }

    let host = url.host_str().ok_or(VideoUrlError::Unrecognized)?;
    let host = host.strip_prefix("www.").unwrap_or(host);
    let segments: Vec<&str> = url
        .path_segments()
        .map(Iterator::collect)
        .unwrap_or_default();

    let candidate = match host {
        "youtu.be" => match segments.as_slice() {
            [id] => Some(*id),
            _ => None,
        },
        "youtube.com" => match segments.as_slice() {
            ["embed", id] | ["v", id] => Some(*id),
            ["watch"] => url.query().and_then(id_from_watch_query),
            _ => None,
        },
        _ => None,
    };

    match candidate {
        Some(id) if is_video_id(id) => Ok(VideoId(id.to_owned())),
        _ => Err(VideoUrlError::Unrecognized),
    }
}

/// First well-formed `v` parameter wins; anything after it is trailing
/// content and cannot redefine the identifier.
fn id_from_watch_query(query: &str) -> Option<&str> {
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("v=").filter(|id| is_video_id(id)))
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(input: &str) -> String {
        VideoReference::parse(input)
            .unwrap()
            .video_id()
            .as_str()
            .to_owned()
    }

    #[test]
    fn accepts_the_five_url_forms() {
        for input in [
            "https://youtu.be/dQw4w9WgXcQ",
            "http://www.youtu.be/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "youtube.com/v/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://www.youtube.com/watch?t=30&v=dQw4w9WgXcQ",
        ] {
            assert_eq!(id_of(input), "dQw4w9WgXcQ", "failed for {input}");
        }
    }

    #[test]
    fn accepts_trailing_query_content() {
        assert_eq!(id_of("https://youtu.be/dQw4w9WgXcQ?t=5"), "dQw4w9WgXcQ");
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL1234"),
            "dQw4w9WgXcQ"
        );
        assert_eq!(
            id_of("https://www.youtube.com/embed/dQw4w9WgXcQ?si=abc"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn rejects_non_links() {
        for input in ["not a url", "https://vimeo.com/12345", "ftp://youtube.com/watch?v=dQw4w9WgXcQ"] {
            assert!(VideoReference::parse(input).is_err(), "accepted {input}");
        }
        assert!(matches!(
            VideoReference::parse("   ").unwrap_err(),
            VideoUrlError::Empty
        ));
    }

    #[test]
    fn rejects_wrong_identifier_length() {
        // 10 and 12 characters.
        assert!(VideoReference::parse("https://youtu.be/dQw4w9WgXc").is_err());
        assert!(VideoReference::parse("https://youtu.be/dQw4w9WgXcQQ").is_err());
        assert!(VideoReference::parse("https://www.youtube.com/watch?v=dQw4w9WgXc").is_err());
        assert!(VideoReference::parse("https://www.youtube.com/watch?v=dQw4w9WgXcQQ").is_err());
    }

    #[test]
    fn rejects_disallowed_trailing_content() {
        // Only `&`/`?`-prefixed content may follow the identifier.
        assert!(VideoReference::parse("https://youtu.be/dQw4w9WgXcQ/more").is_err());
        assert!(VideoReference::parse("https://www.youtube.com/embed/dQw4w9WgXcQ/x").is_err());
        assert!(VideoReference::parse("https://youtu.be/dQw4w9WgXcQ#t=5").is_err());
        assert!(VideoReference::parse("https://youtu.be/dQw4w9WgXcQ?").is_err());
        assert!(VideoReference::parse("youtu.be/dQw4w9WgXcQ extra").is_err());
    }

    #[test]
    fn rejects_identifier_outside_alphabet() {
        assert!(VideoReference::parse("https://youtu.be/dQw4w9WgX.Q").is_err());
        assert!(VideoReference::parse("https://www.youtube.com/watch?v=dQw4w9WgX%Q").is_err());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(id_of("  https://youtu.be/dQw4w9WgXcQ\n"), "dQw4w9WgXcQ");
    }

    #[test]
    fn first_well_formed_v_parameter_wins() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ&v=zzzzzzzzzzz"),
            "dQw4w9WgXcQ"
        );
        // A malformed first `v` is ordinary leading content.
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=short&v=dQw4w9WgXcQ"),
            "dQw4w9WgXcQ"
        );
    }

    #[test]
    fn revalidating_an_extracted_id_is_idempotent() {
        let id = id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(id_of(&id), id);
    }

    #[test]
    fn bare_id_parses_directly() {
        let id = VideoId::parse("dQw4w9WgXcQ").unwrap();
        assert_eq!(id.as_str(), "dQw4w9WgXcQ");
        assert!(VideoId::parse("dQw4w9WgXc").is_err());
        assert!(VideoId::parse("https://youtu.be/dQw4w9WgXcQ").is_err());
    }

    #[test]
    fn raw_input_is_preserved() {
        let reference = VideoReference::parse(" youtu.be/dQw4w9WgXcQ ").unwrap();
        assert_eq!(reference.raw_input(), " youtu.be/dQw4w9WgXcQ ");
        assert_eq!(reference.video_id().as_str(), "dQw4w9WgXcQ");
    }
}
