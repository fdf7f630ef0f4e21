use url::{Url, form_urlencoded};

const DEFAULT_PAGE_PARAM: &str = "page";
const DEFAULT_PAGE_SEGMENT: &str = "page";

/// Builds the URL of a given page from a base URL.
///
/// Implementations must be deterministic and injective over page numbers:
/// the same base and number always give the same URL, and different numbers
/// give different URLs.
pub trait UrlBuilder: Send + Sync {
    /// Returns the URL of page `page_number` under `base_url`.
    fn url_for_page(&self, base_url: &str, page_number: usize) -> String;
}

/// Puts the page number into a query parameter, `?page=3` by default.
///
/// An existing value of the parameter is replaced. Other query pairs and the
/// fragment are kept. Relative bases such as `""` or `?sort=price` stay
/// relative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParamUrlBuilder {
    param: String,
}

impl QueryParamUrlBuilder {
    /// Uses `param` as the query parameter name.
    pub fn new(param: impl Into<String>) -> Self {
        Self { param: param.into() }
    }

    fn query_with_page(&self, query: Option<&str>, number: &str) -> String {
        let kept = form_urlencoded::parse(query.unwrap_or_default().as_bytes())
            .filter(|(key, _)| key != self.param.as_str());

        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(kept)
            .append_pair(&self.param, number)
            .finish()
    }
}

impl Default for QueryParamUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_PARAM)
    }
}

impl UrlBuilder for QueryParamUrlBuilder {
    fn url_for_page(&self, base_url: &str, page_number: usize) -> String {
        let number = page_number.to_string();

        if let Ok(mut url) = Url::parse(base_url) {
            let query = self.query_with_page(url.query(), &number);
            url.set_query(Some(&query));
            return url.into();
        }

        let raw = RawUrl::split(base_url);
        let query = self.query_with_page(raw.query, &number);
        raw.join(raw.path, Some(&query))
    }
}

/// Appends `<segment>/<n>/` to the path, `/catalog/page/3/` by default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegmentUrlBuilder {
    segment: String,
}

impl PathSegmentUrlBuilder {
    /// Uses `segment` as the path segment preceding the page number.
    pub fn new(segment: impl Into<String>) -> Self {
        Self { segment: segment.into() }
    }

    fn push_segments(&self, url: &mut Url, number: &str) -> bool {
        match url.path_segments_mut() {
            Ok(mut segments) => {
                segments.pop_if_empty().push(&self.segment).push(number).push("");
                true
            }
            Err(()) => false,
        }
    }

    fn path_with_page(&self, path: &str, number: &str) -> String {
        if path.is_empty() {
            return format!("{}/{number}/", self.segment);
        }
        let path = path.strip_suffix('/').unwrap_or(path);
        format!("{path}/{}/{number}/", self.segment)
    }
}

impl Default for PathSegmentUrlBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SEGMENT)
    }
}

impl UrlBuilder for PathSegmentUrlBuilder {
    fn url_for_page(&self, base_url: &str, page_number: usize) -> String {
        let number = page_number.to_string();

        if let Ok(mut url) = Url::parse(base_url) {
            if self.push_segments(&mut url, &number) {
                return url.into();
            }
        }

        let raw = RawUrl::split(base_url);
        raw.join(&self.path_with_page(raw.path, &number), raw.query)
    }
}

/// A base URL that `Url::parse` does not accept, split into its parts as
/// written. Only the part being edited is rewritten.
struct RawUrl<'a> {
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> RawUrl<'a> {
    fn split(base_url: &'a str) -> Self {
        let (rest, fragment) = match base_url.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (base_url, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (rest, None),
        };

        Self { path, query, fragment }
    }

    fn join(&self, path: &str, query: Option<&str>) -> String {
        let mut url = path.to_string();
        if let Some(query) = query {
            url.push('?');
            url.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}
