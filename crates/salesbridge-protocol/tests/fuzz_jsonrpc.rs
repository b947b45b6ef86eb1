//! Property-based tests for JSON-RPC (de)serialization.
//!
//! Ensures the parser never panics on arbitrary input and that responses
//! keep their id and their result/error exclusivity through serde.

use proptest::prelude::*;
use salesbridge_protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RequestId};

fn any_id() -> impl Strategy<Value = Option<RequestId>> {
    prop_oneof![
        Just(None),
        any::<i64>().prop_map(|n| Some(RequestId::Number(n.into()))),
        "[a-zA-Z0-9-]{0,24}".prop_map(|s| Some(RequestId::String(s))),
    ]
}

proptest! {
    /// Arbitrary strings never cause a panic.
    #[test]
    fn no_panic_on_arbitrary_json(input in "\\PC{0,256}") {
        let _ = serde_json::from_str::<JsonRpcRequest>(&input);
        let _ = serde_json::from_str::<JsonRpcResponse>(&input);
    }

    /// Well-formed requests round-trip through serde.
    #[test]
    fn valid_request_roundtrips(method in "[a-z/]{1,32}", id in any_id()) {
        let req = JsonRpcRequest::new(id.clone(), method.clone(), None);
        let s = serde_json::to_string(&req).expect("ser");
        let back: JsonRpcRequest = serde_json::from_str(&s).expect("de");
        prop_assert_eq!(back.method, method);
        prop_assert_eq!(&back.id, &id);
    }

    /// Success responses keep their id and never grow an error.
    #[test]
    fn success_response_roundtrips(id in any_id(), n in any::<i64>()) {
        let resp = JsonRpcResponse::success(id.clone(), serde_json::json!({"n": n}));
        let back: JsonRpcResponse = serde_json::from_str(&resp.to_json().expect("ser")).expect("de");
        prop_assert_eq!(&back.id, &id);
        prop_assert!(back.result().is_some());
        prop_assert!(back.error_object().is_none());
    }

    /// Error responses keep their id and never grow a result.
    #[test]
    fn error_response_roundtrips(id in any_id(), detail in "[a-z ]{0,32}") {
        let resp = JsonRpcResponse::error(id.clone(), JsonRpcError::invalid_params(detail));
        let back: JsonRpcResponse = serde_json::from_str(&resp.to_json().expect("ser")).expect("de");
        prop_assert_eq!(&back.id, &id);
        prop_assert!(back.result().is_none());
        prop_assert!(back.error_object().is_some());
    }

    /// Missing "method" field causes parse failure.
    #[test]
    fn missing_method_field_fails(id in 1i64..1000) {
        let json = format!(r#"{{"jsonrpc":"2.0","id":{id}}}"#);
        prop_assert!(serde_json::from_str::<JsonRpcRequest>(&json).is_err());
    }
}
