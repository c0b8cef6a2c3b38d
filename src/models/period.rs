use serde::{Deserialize, Serialize};

/// One work interval of a day. Only `start` set means the period is still open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePeriod {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>, // "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<String>, // "HH:MM"
}

impl TimePeriod {
    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start, end }
    }

    /// Period opened by a clock-in.
    pub fn open(start: &str) -> Self {
        Self {
            start: Some(start.to_string()),
            end: None,
        }
    }

    /// `start`, with blank strings treated as absent.
    pub fn start(&self) -> Option<&str> {
        non_blank(&self.start)
    }

    /// `end`, with blank strings treated as absent.
    pub fn end(&self) -> Option<&str> {
        non_blank(&self.end)
    }

    pub fn is_open(&self) -> bool {
        self.start().is_some() && self.end().is_none()
    }

    pub fn is_empty(&self) -> bool {
        self.start().is_none() && self.end().is_none()
    }

    pub fn start_str(&self) -> &str {
        self.start().unwrap_or("--:--")
    }

    pub fn end_str(&self) -> &str {
        self.end().unwrap_or("--:--")
    }
}

fn non_blank(v: &Option<String>) -> Option<&str> {
    v.as_deref().filter(|s| !s.trim().is_empty())
}
