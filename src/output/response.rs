//! JSON envelope written to stdout after every run, and the exit code that goes with it.

use std::io::{self, Write};

use icon_rename::error::Hint;
use icon_rename::{Error, ErrorCode, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct Envelope<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorBody<'a>>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    message: &'a str,
    details: &'a Value,
    #[serde(skip_serializing_if = "no_hints")]
    hints: &'a [Hint],
}

fn no_hints(hints: &&[Hint]) -> bool {
    hints.is_empty()
}

impl<'a> Envelope<'a> {
    fn new(result: &'a Result<Value>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(err) => Self {
                success: false,
                data: None,
                error: Some(ErrorBody {
                    code: err.code.as_str(),
                    message: &err.message,
                    details: &err.details,
                    hints: &err.hints,
                }),
            },
        }
    }
}

/// Serialize a command's output and pick its exit code.
pub fn map_cmd_result_to_json<T: Serialize>(result: Result<(T, i32)>) -> (Result<Value>, i32) {
    match result {
        Ok((data, exit_code)) => match serde_json::to_value(data) {
            Ok(value) => (Ok(value), exit_code),
            Err(e) => (
                Err(Error::internal_json(
                    e.to_string(),
                    Some("serialize response".to_string()),
                )),
                1,
            ),
        },
        Err(err) => {
            let exit_code = exit_code_for_error(err.code);
            (Err(err), exit_code)
        }
    }
}

fn exit_code_for_error(code: ErrorCode) -> i32 {
    match code {
        ErrorCode::ValidationInvalidArgument => 2,
        ErrorCode::InternalIoError | ErrorCode::InternalJsonError => 1,
    }
}

/// Write the envelope for `result` to `out`. A closed reader is not an error.
fn write_envelope<W: Write>(out: &mut W, result: &Result<Value>) -> Result<()> {
    let payload = serde_json::to_string_pretty(&Envelope::new(result)).map_err(|e| {
        Error::internal_json(e.to_string(), Some("serialize response".to_string()))
    })?;

    match writeln!(out, "{}", payload) {
        Err(e) if e.kind() != io::ErrorKind::BrokenPipe => Err(Error::internal_io(
            e.to_string(),
            Some("write stdout".to_string()),
        )),
        _ => Ok(()),
    }
}

pub fn print_json_result(result: Result<Value>) -> Result<()> {
    write_envelope(&mut io::stdout().lock(), &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(self.0))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn written(result: &Result<Value>) -> Value {
        let mut out = Vec::new();
        write_envelope(&mut out, result).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn error_envelope_omits_data() {
        let err = Error::internal_io("denied", Some("write src/a.cpp".to_string()));
        let json = written(&Err(err));
        assert_eq!(json["success"], false);
        assert!(json.get("data").is_none());
        assert_eq!(json["error"]["code"], "internal.io_error");
        assert_eq!(json["error"]["details"]["context"], "write src/a.cpp");
        assert!(json["error"].get("hints").is_none());
    }

    #[test]
    fn error_envelope_carries_hints() {
        let err = Error::validation_invalid_argument("root", "missing", None)
            .with_hint("Pass --root");
        let json = written(&Err(err));
        assert_eq!(json["error"]["hints"][0]["message"], "Pass --root");
    }

    #[test]
    fn success_envelope_wraps_data() {
        let json = written(&Ok(json!({"n": 1})));
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["n"], 1);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn broken_pipe_is_ignored() {
        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        assert!(write_envelope(&mut out, &Ok(json!(null))).is_ok());
    }

    #[test]
    fn other_write_failures_are_io_errors() {
        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        let err = write_envelope(&mut out, &Ok(json!(null))).unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn exit_codes_follow_error_class() {
        let (_, code) = map_cmd_result_to_json::<()>(Err(Error::validation_invalid_argument(
            "root", "bad", None,
        )));
        assert_eq!(code, 2);

        let (_, code) = map_cmd_result_to_json::<()>(Err(Error::internal_io("x", None)));
        assert_eq!(code, 1);

        let (value, code) = map_cmd_result_to_json(Ok((json!([1, 2]), 0)));
        assert_eq!(code, 0);
        assert_eq!(value.unwrap(), json!([1, 2]));
    }
}
