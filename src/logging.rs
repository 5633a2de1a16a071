//! Structured diagnostic events written to the console through `log`.

use serde_json::{Map, Value};

pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    pub fn as_level(self) -> log::Level {
        match self {
            Self::Debug => log::Level::Debug,
            Self::Info => log::Level::Info,
        }
    }
}

pub fn event_payload(level: LogLevel, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("level".to_string(), Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

pub fn log_event(level: LogLevel, event: &str, fields: Value) {
    log::log!(level.as_level(), "{}", event_payload(level, event, fields));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_merges_fields_after_event_name() {
        let payload = event_payload(
            LogLevel::Info,
            "cta_clicked",
            json!({ "label": "Get In Touch" }),
        );

        assert_eq!(
            payload,
            json!({ "level": "info", "event": "cta_clicked", "label": "Get In Touch" })
        );
    }

    #[test]
    fn non_object_fields_are_ignored() {
        let payload = event_payload(LogLevel::Debug, "tick", json!(["ignored"]));

        assert_eq!(payload, json!({ "level": "debug", "event": "tick" }));
    }

    #[test]
    fn level_parsing_is_case_insensitive() {
        assert_eq!(LogLevel::parse(" DEBUG "), Some(LogLevel::Debug));
        assert_eq!(LogLevel::parse("info"), Some(LogLevel::Info));
        assert_eq!(LogLevel::parse("trace"), None);
        assert!(LogLevel::Debug < LogLevel::Info);
    }
}
