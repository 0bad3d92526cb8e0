//! Blog title lookup over a fixed in-memory mapping.
//!
//! The lookup returns a tagged result: `Some` for a known id, `None` for an
//! unknown one. The caller decides how not-found surfaces; it is never
//! serialized as success data.

/// The fixed id-to-title mapping.
const BLOGS: [(&str, &str); 5] = [
    ("1", "Getting Started with Routing"),
    ("2", "Path and Query Parameters in Depth"),
    ("3", "Request Bodies and Validation"),
    ("4", "Forms, Files and Multipart Uploads"),
    ("5", "Templates and HTML Responses"),
];

/// Looks up a blog title by id. Unknown ids are a distinct not-found
/// outcome.
#[must_use]
pub fn blog_title(id: &str) -> Option<&'static str> {
    BLOGS
        .iter()
        .find(|(blog_id, _)| *blog_id == id)
        .map(|(_, title)| *title)
}
