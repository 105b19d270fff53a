use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Origin-request event handed to the hook by the edge platform
#[derive(Debug, Deserialize)]
pub struct OriginRequestEvent {
    #[serde(rename = "Records")]
    pub records: Vec<EventRecord>,
}

#[derive(Debug, Deserialize)]
pub struct EventRecord {
    pub cf: CloudFrontRecord,
}

#[derive(Debug, Deserialize)]
pub struct CloudFrontRecord {
    pub request: CloudFrontRequest,
}

/// Request record returned to the platform
///
/// Only `uri` is interpreted. Every other field keeps its value and key order
/// so the platform sees the same method, headers, query string and origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudFrontRequest {
    pub uri: String,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

impl CloudFrontRequest {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            rest: Map::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_deserialize_full_event() {
        let event: OriginRequestEvent = serde_json::from_value(json!({
            "Records": [{
                "cf": {
                    "config": { "distributionId": "EDFDVBD6EXAMPLE", "eventType": "origin-request" },
                    "request": {
                        "clientIp": "203.0.113.178",
                        "method": "GET",
                        "querystring": "size=large",
                        "uri": "/docs/intro",
                        "headers": { "host": [{ "key": "Host", "value": "d111111abcdef8.cloudfront.net" }] }
                    }
                }
            }]
        }))
        .unwrap();

        let request = &event.records[0].cf.request;
        assert_eq!(request.uri, "/docs/intro");
        assert_eq!(request.rest["method"], "GET");
        assert_eq!(request.rest["querystring"], "size=large");
        assert!(!request.rest.contains_key("uri"));
    }

    #[test]
    fn test_request_serializes_flat() {
        let mut request = CloudFrontRequest::new("/a/index.html");
        request.rest.insert("method".to_string(), json!("GET"));

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "uri": "/a/index.html", "method": "GET" }));
    }

    #[test]
    fn test_passthrough_keeps_key_order() {
        let input = r#"{"uri":"/a.b/","method":"GET","z":{"b":1,"a":2},"headers":{"x-b":[],"x-a":[]}}"#;
        let request: CloudFrontRequest = serde_json::from_str(input).unwrap();

        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"uri":"/a.b/","method":"GET","z":{"b":1,"a":2},"headers":{"x-b":[],"x-a":[]}}"#
        );
    }

    #[test]
    fn test_missing_uri_is_rejected() {
        let result: Result<CloudFrontRequest, _> =
            serde_json::from_value(json!({ "method": "GET" }));
        assert!(result.is_err());

        let result: Result<CloudFrontRequest, _> = serde_json::from_value(json!({ "uri": 42 }));
        assert!(result.is_err());
    }
}
