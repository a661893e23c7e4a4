//! Directory request construction.
//!
//! Builds the single GET issued at startup and the context map Zellij echoes
//! back with the response, so the plugin can recognise its own result and
//! correlate it with the span that issued it.

use std::collections::BTreeMap;

/// Default directory endpoint.
pub const DEFAULT_API_URL: &str = "https://randomuser.me/api/";

/// Record fields requested from the API; everything else is suppressed.
pub const FIELDS: [&str; 6] = ["name", "picture", "email", "location", "cell", "dob"];

/// Context key identifying which request a `WebRequestResult` answers.
pub const REQUEST_KEY: &str = "request";

/// Value of [`REQUEST_KEY`] for the directory fetch.
pub const DIRECTORY_REQUEST: &str = "directory";

/// Query parameters of the directory request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    /// Number of records to request.
    pub results: u32,
    /// Nationality filter (`nat` parameter).
    pub nationality: String,
}

impl Default for DirectoryQuery {
    fn default() -> Self {
        Self {
            results: 12,
            nationality: "US".to_string(),
        }
    }
}

impl DirectoryQuery {
    /// Renders the full request URL against `base`.
    ///
    /// # Examples
    ///
    /// ```
    /// use zroster::fetch::DirectoryQuery;
    ///
    /// let url = DirectoryQuery::default().url("https://randomuser.me/api/");
    /// assert_eq!(
    ///     url,
    ///     "https://randomuser.me/api/?results=12&inc=name,picture,email,location,cell,dob&noinfo&nat=US"
    /// );
    /// ```
    #[must_use]
    pub fn url(&self, base: &str) -> String {
        let separator = if base.contains('?') { '&' } else { '?' };
        format!(
            "{base}{separator}results={}&inc={}&noinfo&nat={}",
            self.results,
            FIELDS.join(","),
            self.nationality
        )
    }
}

/// A ready-to-send directory request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub url: String,
    /// Echoed back by Zellij in `WebRequestResult`.
    pub context: BTreeMap<String, String>,
}

impl FetchRequest {
    /// Creates a directory request, tagging it with the current trace context.
    #[must_use]
    pub fn new(url: String) -> Self {
        let mut context = BTreeMap::new();
        context.insert(REQUEST_KEY.to_string(), DIRECTORY_REQUEST.to_string());
        if let Some((trace_id, span_id)) = current_trace_ids() {
            context.insert("trace_id".to_string(), trace_id);
            context.insert("parent_span_id".to_string(), span_id);
        }
        Self { url, context }
    }

    /// Returns `true` if a response context belongs to the directory request.
    #[must_use]
    pub fn is_directory_context(context: &BTreeMap<String, String>) -> bool {
        context.get(REQUEST_KEY).is_some_and(|v| v == DIRECTORY_REQUEST)
    }
}

/// Reads the OpenTelemetry trace and span IDs of the active span.
///
/// Returns `None` when tracing is disabled or the span is not sampled.
fn current_trace_ids() -> Option<(String, String)> {
    use opentelemetry::trace::TraceContextExt;
    use tracing_opentelemetry::OpenTelemetrySpanExt;

    let otel_context = tracing::Span::current().context();
    let span_ref = otel_context.span();
    let span_context = span_ref.span_context();

    span_context.is_valid().then(|| {
        (
            format!("{:032x}", span_context.trace_id()),
            format!("{:016x}", span_context.span_id()),
        )
    })
}
