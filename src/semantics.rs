//! Semantics event value objects.
//!
//! Each event is a variant record that describes itself as a key-ordered map,
//! the form in which events are handed to the platform accessibility layer:
//!
//! ```text
//! {"type": "tooltip", "nodeId": 7, "data": {"message": "Save"}}
//! ```

use std::fmt;

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    fn index(self) -> i64 {
        match self {
            TextDirection::Rtl => 0,
            TextDirection::Ltr => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Assertiveness {
    #[default]
    Polite,
    Assertive,
}

/// Shared capability of every event: a type tag plus a payload map.
pub trait DescribeEvent {
    fn event_type(&self) -> &'static str;

    /// Event payload, in the order the fields are declared.
    fn data(&self) -> Map<String, Value>;

    /// Full map form; `nodeId` appears only when a node is given.
    fn to_map(&self, node_id: Option<i64>) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::from(self.event_type()));
        if let Some(id) = node_id {
            map.insert("nodeId".to_string(), Value::from(id));
        }
        map.insert("data".to_string(), Value::Object(self.data()));
        map
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticsEvent {
    Announce {
        message: String,
        text_direction: TextDirection,
        assertiveness: Assertiveness,
    },
    Tooltip {
        message: String,
    },
    LongPress,
    Tap,
    Focus,
}

impl SemanticsEvent {
    pub fn announce(message: impl Into<String>, text_direction: TextDirection) -> Self {
        SemanticsEvent::Announce {
            message: message.into(),
            text_direction,
            assertiveness: Assertiveness::default(),
        }
    }

    pub fn tooltip(message: impl Into<String>) -> Self {
        SemanticsEvent::Tooltip {
            message: message.into(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SemanticsEvent::Announce { .. } => "AnnounceSemanticsEvent",
            SemanticsEvent::Tooltip { .. } => "TooltipSemanticsEvent",
            SemanticsEvent::LongPress => "LongPressSemanticsEvent",
            SemanticsEvent::Tap => "TapSemanticEvent",
            SemanticsEvent::Focus => "FocusSemanticEvent",
        }
    }
}

impl DescribeEvent for SemanticsEvent {
    fn event_type(&self) -> &'static str {
        match self {
            SemanticsEvent::Announce { .. } => "announce",
            SemanticsEvent::Tooltip { .. } => "tooltip",
            SemanticsEvent::LongPress => "longPress",
            SemanticsEvent::Tap => "tap",
            SemanticsEvent::Focus => "focus",
        }
    }

    fn data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        match self {
            SemanticsEvent::Announce {
                message,
                text_direction,
                assertiveness,
            } => {
                data.insert("message".to_string(), Value::from(message.as_str()));
                data.insert(
                    "textDirection".to_string(),
                    Value::from(text_direction.index()),
                );
                if *assertiveness == Assertiveness::Assertive {
                    data.insert("assertiveness".to_string(), Value::from(1));
                }
            }
            SemanticsEvent::Tooltip { message } => {
                data.insert("message".to_string(), Value::from(message.as_str()));
            }
            SemanticsEvent::LongPress | SemanticsEvent::Tap | SemanticsEvent::Focus => {}
        }
        data
    }
}

/// `Name(key: value, ...)` with keys sorted; strings are shown unquoted.
impl fmt::Display for SemanticsEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data();
        let mut keys: Vec<&String> = data.keys().collect();
        keys.sort();
        let pairs: Vec<String> = keys
            .into_iter()
            .map(|key| match &data[key] {
                Value::String(s) => format!("{key}: {s}"),
                other => format!("{key}: {other}"),
            })
            .collect();
        write!(f, "{}({})", self.name(), pairs.join(", "))
    }
}
