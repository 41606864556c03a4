use dioxus::prelude::*;

/// Severity of one activity entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Error,
}

/// One timestamped line in the feed.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

/// Rolling feed of recent actions and failures, provided as
/// `Signal<ActivityLog>` via context by the application root.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            message: message.into(),
        });
    }
}

/// Consume the `Signal<ActivityLog>` from context.
pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    log.write().push(level, message);
}

/// Recent activity, newest last. Renders nothing until something happens.
#[component]
pub fn ActivityFeed() -> Element {
    let log = use_activity_log();
    let entries = log().entries;
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "activity-feed",
            for (index, entry) in entries.iter().enumerate() {
                div {
                    key: "{index}",
                    class: if entry.level == LogLevel::Error { "activity-entry error" } else { "activity-entry" },
                    span { class: "activity-time", "{entry.timestamp}" }
                    span { "{entry.message}" }
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    "00:00:00".to_string()
}
