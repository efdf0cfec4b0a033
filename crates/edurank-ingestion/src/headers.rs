//! Header cleanup applied before schema validation.

use edurank_common::CriteriaSchema;
use tracing::debug;

/// Trim and collapse interior whitespace runs to a single space.
pub fn clean_header(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean every header and rename case-insensitive matches of schema columns
/// to the schema's spelling. Headers that match nothing are left cleaned but
/// otherwise untouched.
pub fn canonicalise_headers(headers: &mut [String], schema: &CriteriaSchema) {
    for header in headers.iter_mut() {
        let cleaned = clean_header(header);
        let canonical = schema
            .canonical_name(&cleaned)
            .map(str::to_string)
            .unwrap_or(cleaned);
        if *header != canonical {
            debug!("Renamed header {:?} -> {:?}", header, canonical);
            *header = canonical;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_header() {
        assert_eq!(clean_header("  Ease   of\tUse "), "Ease of Use");
        assert_eq!(clean_header("Cost"), "Cost");
        assert_eq!(clean_header("   "), "");
    }

    #[test]
    fn test_canonicalise_headers() {
        let schema = CriteriaSchema::default();
        let mut headers = vec![
            " technology".to_string(),
            "COST".to_string(),
            "ease  of use".to_string(),
            "Notes ".to_string(),
        ];
        canonicalise_headers(&mut headers, &schema);
        assert_eq!(headers, vec!["Technology", "Cost", "Ease of Use", "Notes"]);
    }
}
