//! Log entry type for JSONL logs.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single self-contained log line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLogEntry {
    /// RFC 3339 timestamp with milliseconds
    pub ts: String,

    /// trace, debug, info, warn, error
    pub level: String,

    /// Session name (e.g. "desktop", "cli")
    pub session: String,

    /// Module path of the event
    pub target: String,

    pub msg: String,

    /// Structured event fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing spans, root first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl JsonLogEntry {
    pub fn new(
        level: impl Into<String>,
        session: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            session: session.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_line_round_trip_keeps_fields() {
        let entry = JsonLogEntry::new("info", "desktop", "birthday_core::navigator", "Navigating")
            .with_fields(serde_json::json!({ "section": "gallery" }))
            .with_span("app");

        let line = entry.to_json_line().unwrap();
        assert!(!line.contains('\n'));

        let parsed = JsonLogEntry::from_json_line(&line).unwrap();
        assert_eq!(parsed.session, "desktop");
        assert_eq!(parsed.fields.unwrap()["section"], "gallery");
        assert_eq!(parsed.span.as_deref(), Some("app"));
    }

    #[test]
    fn optional_fields_are_omitted() {
        let line = JsonLogEntry::new("warn", "cli", "t", "m").to_json_line().unwrap();
        assert!(!line.contains("fields"));
        assert!(!line.contains("span"));
    }
}
