//! HackerRank URL handling
//!
//! Slug extraction and canonicalization for challenge and submission links.
//! Both are total functions: malformed input yields `None` or a fallback
//! string, never an error.

use url::Url;

use crate::constants::CHALLENGES_SEGMENT;

/// Extract the challenge slug from a HackerRank URL.
///
/// Accepts any absolute URL whose path contains a `challenges` segment
/// followed by the slug, e.g.
///
/// - `https://www.hackerrank.com/challenges/two-sum/problem`
/// - `https://www.hackerrank.com/challenges/two-sum/submissions/123456`
/// - `https://www.hackerrank.com/rest/contests/master/challenges/two-sum/submissions/123456`
///
/// The slug is returned lowercased. Returns `None` for unparseable URLs and
/// for paths without a segment after `challenges`.
pub fn extract_challenge_slug(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    let mut segments = url.path_segments()?.filter(|segment| !segment.is_empty());

    segments.find(|segment| *segment == CHALLENGES_SEGMENT)?;
    segments.next().map(str::to_lowercase)
}

/// Canonical form of a URL used as the duplicate-detection key.
///
/// Keeps scheme, host, port and path; drops query, fragment and trailing
/// slashes; lowercases everything. Unparseable input falls back to the
/// trimmed, lowercased raw string. Trailing slashes and whitespace are
/// stripped together so the result is a fixed point.
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();

    let canonical = match Url::parse(trimmed) {
        Ok(url) if url.has_host() => {
            let mut out = format!("{}://{}", url.scheme(), url.host_str().unwrap_or_default());
            if let Some(port) = url.port() {
                out.push(':');
                out.push_str(&port.to_string());
            }
            out.push_str(url.path());
            out
        }
        _ => trimmed.to_string(),
    };

    canonical
        .trim_end_matches(|c: char| c == '/' || c.is_whitespace())
        .to_lowercase()
}

/// Whether the URL is served from `domain` or one of its subdomains
pub fn is_allowed_host(url: &Url, domain: &str) -> bool {
    let Some(host) = url.host_str() else {
        return false;
    };
    let host = host.to_ascii_lowercase();
    let domain = domain.trim().trim_start_matches('.').to_ascii_lowercase();

    host == domain || host.ends_with(&format!(".{domain}"))
}
