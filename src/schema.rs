use jsonschema::validator_for;
use serde_json::Value;

/// Frozen v0 schema of every `/rpc` response body, success or error.
pub const RESPONSE_SCHEMA_V0: &str = r#"{
  "$schema": "https://json-schema.org/draft/2020-12/schema",
  "title": "Sum RPC Response v0",
  "type": "object",
  "required": ["jsonrpc", "id"],
  "additionalProperties": false,
  "properties": {
    "jsonrpc": { "const": "2.0" },
    "id": { "const": 1 },
    "result": { "type": "integer" },
    "error": {
      "type": "object",
      "required": ["code", "message"],
      "additionalProperties": false,
      "properties": {
        "code": { "enum": [-32700, -32600, -32602, -32603] },
        "message": { "type": "string", "minLength": 1 }
      }
    }
  },
  "oneOf": [
    { "required": ["result"] },
    { "required": ["error"] }
  ]
}"#;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema parse error: {0}")]
    SchemaParse(#[from] serde_json::Error),
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("Instance validation failed")]
    ValidationFailed,
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
/// Returns Ok(()) if valid, Err otherwise.
pub fn validate_json(schema_str: &str, instance_str: &str) -> Result<(), SchemaValidationError> {
    let schema_json: Value = serde_json::from_str(schema_str)?;
    let instance_json: Value = serde_json::from_str(instance_str)?;

    let validator = validator_for(&schema_json)
        .map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    if validator.is_valid(&instance_json) {
        Ok(())
    } else {
        Err(SchemaValidationError::ValidationFailed)
    }
}

/// Validate a `/rpc` response body against [`RESPONSE_SCHEMA_V0`].
pub fn validate_response(body: &str) -> Result<(), SchemaValidationError> {
    validate_json(RESPONSE_SCHEMA_V0, body)
}
