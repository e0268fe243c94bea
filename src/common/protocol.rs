use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::common::models::Operator;

/// Requests sent to the calculator service, one JSON object per line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum ServiceRequest {
    Calculate { a: f64, b: f64, operator: Operator },
    ClearMemory,
}

/// Replies from the calculator service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ServiceResponse {
    /// `result` is empty when the service could not compute a value.
    Ok {
        #[serde(default)]
        result: Vec<f64>,
    },
    Error { message: String },
}

/// Serializes a message and terminates it with a newline.
pub fn encode_line<T: Serialize>(message: &T) -> serde_json::Result<String> {
    let mut line = serde_json::to_string(message)?;
    line.push('\n');
    Ok(line)
}

pub fn decode_line<T: DeserializeOwned>(line: &str) -> serde_json::Result<T> {
    serde_json::from_str(line.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculate_request_matches_wire_contract() {
        let line = encode_line(&ServiceRequest::Calculate {
            a: 5.0,
            b: 3.0,
            operator: Operator::Add,
        })
        .unwrap();
        assert_eq!(
            line,
            "{\"method\":\"calculate\",\"a\":5.0,\"b\":3.0,\"operator\":\"+\"}\n"
        );
    }

    #[test]
    fn clear_memory_has_no_payload() {
        let line = encode_line(&ServiceRequest::ClearMemory).unwrap();
        assert_eq!(line, "{\"method\":\"clear_memory\"}\n");
    }

    #[test]
    fn ok_without_result_decodes_as_empty() {
        let resp: ServiceResponse = decode_line("{\"status\":\"ok\"}\r\n").unwrap();
        assert_eq!(resp, ServiceResponse::Ok { result: vec![] });
    }

    #[test]
    fn error_reply_keeps_message() {
        let resp: ServiceResponse =
            decode_line("{\"status\":\"error\",\"message\":\"division by zero\"}").unwrap();
        assert_eq!(
            resp,
            ServiceResponse::Error {
                message: "division by zero".to_string()
            }
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert!(decode_line::<ServiceResponse>("{\"status\":\"maybe\"}").is_err());
    }
}
