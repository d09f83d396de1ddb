use axum::http::StatusCode;
use rpc_sum_server::error::RpcError;
use rpc_sum_server::handlers;
use rpc_sum_server::protocol::{JsonRpcError, RpcResponse};
use rpc_sum_server::schema::{validate_json, validate_response, SchemaValidationError};

#[test]
fn success_and_error_bodies_satisfy_v0_schema() {
    let bodies = [
        "[2, 3]",
        "",
        "[-3, 5]",
        r#"{"jsonrpc":"2.0","method":"sum","params":[2,3],"id":1}"#,
        "[99999999999999999999, 1]",
        "[9223372036854775807, 1]",
    ];

    for input in bodies {
        let (_, response) = handlers::answer(input);
        let body = response.to_body();
        validate_response(&body)
            .unwrap_or_else(|e| panic!("response for {input:?} violates schema: {e}\n{body}"));
    }
}

#[test]
fn every_rejection_satisfies_v0_schema() {
    let errors = [
        RpcError::OperandOutOfRange { digits: 30 },
        RpcError::SumOverflow { left: i64::MAX, right: 1 },
        RpcError::PayloadTooLarge { declared: 10, limit: 1 },
        RpcError::BodyRead("connection reset".into()),
        RpcError::Timeout(std::time::Duration::from_millis(250)),
    ];

    for err in errors {
        let (_, response) = handlers::reject(&err);
        validate_response(&response.to_body()).expect("rejection must satisfy schema");
    }
}

#[test]
fn schema_refuses_foreign_shapes() {
    let foreign = [
        r#"{"jsonrpc":"2.0","result":5,"id":2}"#,
        r#"{"jsonrpc":"1.0","result":5,"id":1}"#,
        r#"{"jsonrpc":"2.0","id":1}"#,
        r#"{"jsonrpc":"2.0","result":5,"error":{"code":-32602,"message":"x"},"id":1}"#,
        r#"{"jsonrpc":"2.0","result":"5","id":1}"#,
        r#"{"jsonrpc":"2.0","result":5,"id":1,"extra":true}"#,
    ];

    for body in foreign {
        assert!(
            matches!(validate_response(body), Err(SchemaValidationError::ValidationFailed)),
            "schema accepted {body}"
        );
    }
}

#[test]
fn validate_json_reports_malformed_instance() {
    let err = validate_json(r#"{"type":"object"}"#, "not json").unwrap_err();
    assert!(matches!(err, SchemaValidationError::SchemaParse(_)));
}

#[test]
fn golden_error_snapshot() {
    let (status, response) = handlers::reject(&RpcError::SumOverflow {
        left: i64::MAX,
        right: 1,
    });
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let expected = r#"{"jsonrpc":"2.0","error":{"code":-32602,"message":"Sum overflows: 9223372036854775807 + 1"},"id":1}"#;
    assert_eq!(response.to_body(), expected, "error envelope snapshot mismatch");
}

#[test]
fn status_and_code_pairs_are_stable() {
    let cases = [
        (RpcError::OperandOutOfRange { digits: 20 }, StatusCode::BAD_REQUEST, -32602),
        (RpcError::SumOverflow { left: 1, right: 1 }, StatusCode::BAD_REQUEST, -32602),
        (RpcError::PayloadTooLarge { declared: 2, limit: 1 }, StatusCode::PAYLOAD_TOO_LARGE, -32600),
        (RpcError::BodyRead("eof".into()), StatusCode::BAD_REQUEST, -32700),
        (
            RpcError::Timeout(std::time::Duration::from_secs(1)),
            StatusCode::REQUEST_TIMEOUT,
            -32603,
        ),
    ];

    for (err, status, code) in cases {
        assert_eq!(err.status(), status, "{err}");
        assert_eq!(JsonRpcError::from(&err).code, code, "{err}");
    }
}

#[test]
fn success_envelope_field_order() {
    assert_eq!(
        RpcResponse::success(-1).to_body(),
        r#"{"jsonrpc":"2.0","result":-1,"id":1}"#
    );
}
