use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// One eGovernance service advertised on a municipality site: the label shown
/// on the page and the link it points at. The name is whatever script the
/// site uses; it is not normalized or transliterated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub service_name: String,
    pub link_of_service: String,
}

impl ServiceRecord {
    pub fn new(service_name: impl Into<String>, link_of_service: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            link_of_service: link_of_service.into(),
        }
    }
}

/// The extraction outcome for a single input URL. The URL is kept verbatim as
/// supplied by the caller; records are in document order. Serializes as a
/// single-key object: `{"https://...": [records]}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteResult {
    pub url: String,
    pub services: Vec<ServiceRecord>,
}

impl SiteResult {
    pub fn new(url: impl Into<String>, services: Vec<ServiceRecord>) -> Self {
        Self {
            url: url.into(),
            services,
        }
    }

    /// A site whose fetch or parse failed, or which simply has no detectable
    /// services. The two are indistinguishable in shape.
    pub fn empty(url: impl Into<String>) -> Self {
        Self::new(url, Vec::new())
    }
}

impl Serialize for SiteResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.url, &self.services)?;
        map.end()
    }
}

/// One SiteResult per input URL, in the order the URLs were supplied.
/// Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BatchResult {
    pub sites: Vec<SiteResult>,
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }
}

/// Request body shape accepted at the API boundary: `{"urls": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeRequest {
    pub urls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_result_serializes_as_single_key_object() {
        let site = SiteResult::new(
            "https://butwalmun.gov.np/",
            vec![ServiceRecord::new("घटना दर्ता", "/")],
        );
        let value = serde_json::to_value(&site).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "https://butwalmun.gov.np/": [
                    {"service_name": "घटना दर्ता", "link_of_service": "/"}
                ]
            })
        );
    }

    #[test]
    fn batch_result_serializes_as_array_in_input_order() {
        let batch = BatchResult {
            sites: vec![
                SiteResult::empty("https://a.gov.np/"),
                SiteResult::new(
                    "https://b.gov.np/",
                    vec![ServiceRecord::new("Service", "https://b.gov.np/s")],
                ),
            ],
        };
        let value = serde_json::to_value(&batch).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"https://a.gov.np/": []},
                {"https://b.gov.np/": [
                    {"service_name": "Service", "link_of_service": "https://b.gov.np/s"}
                ]}
            ])
        );
    }

    #[test]
    fn scrape_request_roundtrips() {
        let req: ScrapeRequest =
            serde_json::from_str(r#"{"urls": ["https://a.gov.np/", "https://b.gov.np/"]}"#)
                .unwrap();
        assert_eq!(req.urls.len(), 2);
        assert_eq!(req.urls[0], "https://a.gov.np/");
    }
}
