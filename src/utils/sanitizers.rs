//! String sanitization for file names derived from repository names

/// Longest file name stem produced
const MAX_STEM_CHARS: usize = 64;

/// Make a repository name safe to use as a file name stem
///
/// Path separators and other filesystem-unsafe characters become
/// underscores, leading dots are dropped so the file is never hidden, and
/// the result is capped at 64 characters. An empty result falls back to
/// `repository`.
pub fn sanitize_for_filename(input: &str) -> String {
    let sanitized: String = input
        .trim()
        .trim_start_matches('.')
        .chars()
        .map(|c| match c {
            c if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' => c,
            _ => '_',
        })
        .take(MAX_STEM_CHARS)
        .collect();

    if sanitized.is_empty() {
        "repository".to_string()
    } else {
        sanitized
    }
}
