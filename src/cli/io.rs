//! JSON output for the CLI
//!
//! - One JSON object per line on the command's output (stdout in the binary)
//! - `{"status":"ok","data":...}` or `{"status":"error","code":...,"message":...}`

use std::io::Write;

use serde_json::Value;

use super::errors::CliResult;

fn ok_envelope(data: Value) -> Value {
    serde_json::json!({
        "status": "ok",
        "data": data
    })
}

fn error_envelope(code: &str, message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

fn write_line<W: Write>(writer: &mut W, value: &Value) -> CliResult<()> {
    serde_json::to_writer(&mut *writer, value)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write a success response
pub fn write_response<W: Write>(out: &mut W, data: Value) -> CliResult<()> {
    write_line(out, &ok_envelope(data))
}

/// Write an error response
pub fn write_error<W: Write>(out: &mut W, code: &str, message: &str) -> CliResult<()> {
    write_line(out, &error_envelope(code, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_line() {
        let mut buffer = Vec::new();
        write_response(&mut buffer, serde_json::json!({"timestamp": 1.5})).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "{\"data\":{\"timestamp\":1.5},\"status\":\"ok\"}\n");
    }

    #[test]
    fn test_error_line() {
        let mut buffer = Vec::new();
        write_error(&mut buffer, "STAMP_INVALID_IDENTIFIER_FORMAT", "bad").unwrap();
        let parsed: Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed["status"], "error");
        assert_eq!(parsed["code"], "STAMP_INVALID_IDENTIFIER_FORMAT");
        assert_eq!(parsed["message"], "bad");
    }
}
