use crate::flashpoint::FetchError;

/// Client for the Wayback Machine CDX index.
pub struct WaybackClient {
    client: reqwest::Client,
    cdx_base: String,
}

impl WaybackClient {
    pub fn new(client: reqwest::Client, cdx_base: impl Into<String>) -> Self {
        Self {
            client,
            cdx_base: cdx_base.into(),
        }
    }

    /// Look up the newest archived 200 capture of a URL, returning its
    /// timestamp when one exists.
    pub async fn latest_snapshot(&self, url: &str) -> Result<Option<String>, FetchError> {
        let resp = self
            .client
            .get(&self.cdx_base)
            .query(&[
                ("url", url),
                ("output", "json"),
                ("limit", "1"),
                ("fl", "timestamp,statuscode"),
                ("filter", "statuscode:200"),
            ])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(FetchError::Api {
                status: resp.status().as_u16(),
            });
        }

        let rows: Vec<Vec<String>> = resp.json().await?;
        Ok(timestamp_from_rows(&rows))
    }
}

/// CDX JSON output is row-oriented: rows[0] is the field header, rows[1] the
/// first capture.
fn timestamp_from_rows(rows: &[Vec<String>]) -> Option<String> {
    rows.get(1)?.first().cloned()
}

/// Raw-content URL for an archived capture. The `oe_` flag asks for the
/// original bytes, without the Wayback toolbar injected.
pub fn raw_url(timestamp: &str, url: &str) -> String {
    format!("https://web.archive.org/web/{timestamp}oe_/{url}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_url_format() {
        assert_eq!(
            raw_url("20091231235959", "http://example.com/copter.swf"),
            "https://web.archive.org/web/20091231235959oe_/http://example.com/copter.swf"
        );
    }

    #[test]
    fn header_only_response_has_no_snapshot() {
        let rows = vec![vec!["timestamp".to_string(), "statuscode".to_string()]];
        assert_eq!(timestamp_from_rows(&rows), None);
        assert_eq!(timestamp_from_rows(&[]), None);
    }

    #[test]
    fn first_capture_row_yields_timestamp() {
        let rows = vec![
            vec!["timestamp".to_string(), "statuscode".to_string()],
            vec!["20080115093000".to_string(), "200".to_string()],
        ];
        assert_eq!(timestamp_from_rows(&rows).as_deref(), Some("20080115093000"));
    }
}
