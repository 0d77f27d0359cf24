//! # Response Formatting
//!
//! Response bodies for the books API.

use serde::Serialize;

/// One page of a listing.
///
/// Keys serialize in declaration order: `total`, `page`, `limit`, `data`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResponse<T> {
    /// Matching records before pagination
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(total: usize, page: usize, limit: usize, data: Vec<T>) -> Self {
        Self {
            total,
            page,
            limit,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_response_key_order() {
        let response = ListResponse::new(7, 2, 3, vec![json!({"id": 4})]);
        let body = serde_json::to_string(&response).unwrap();
        assert_eq!(body, r#"{"total":7,"page":2,"limit":3,"data":[{"id":4}]}"#);
    }

    #[test]
    fn test_empty_page_serialization() {
        let response: ListResponse<serde_json::Value> = ListResponse::new(5, 9, 5, vec![]);
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], json!([]));
        assert_eq!(json["total"], 5);
    }
}
