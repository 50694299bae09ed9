//! The synchronization bus: the outbound notification contract between the
//! temporal display and the external presenter/session layer.
//!
//! Each notification is a named action carrying string-encoded parameter
//! values, matching what the presenter forwards to the session manager.

use serde_json::Value;

use crate::core::time::Time;

/// An outbound state-change notification.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    VisibleTimeRangeChanged { lower: Time, upper: Time },
    SelectedTimeChanged { time: Time },
    SelectedTimeRangeChanged { lower: Time, upper: Time },
    EventTimeRangeChanged { event_id: String, start: Time, end: Time },
    SelectedEventsChanged { event_ids: Vec<String> },
    CheckBox { event_id: String, checked: bool },
    DynamicSettingChanged { settings: Value },
}

impl Notification {
    /// The action name the presenter dispatches on.
    pub fn action(&self) -> &'static str {
        match self {
            Notification::VisibleTimeRangeChanged { .. } => "VisibleTimeRangeChanged",
            Notification::SelectedTimeChanged { .. } => "SelectedTimeChanged",
            Notification::SelectedTimeRangeChanged { .. } => "SelectedTimeRangeChanged",
            Notification::EventTimeRangeChanged { .. } => "EventTimeRangeChanged",
            Notification::SelectedEventsChanged { .. } => "SelectedEventsChanged",
            Notification::CheckBox { .. } => "CheckBox",
            Notification::DynamicSettingChanged { .. } => "DynamicSettingChanged",
        }
    }

    /// The payload as string-encoded values, in positional order.
    pub fn params(&self) -> Vec<String> {
        match self {
            Notification::VisibleTimeRangeChanged { lower, upper } => {
                vec![lower.to_string(), upper.to_string()]
            }
            Notification::SelectedTimeChanged { time } => vec![time.to_string()],
            Notification::SelectedTimeRangeChanged { lower, upper } => {
                vec![lower.to_string(), upper.to_string()]
            }
            Notification::EventTimeRangeChanged { event_id, start, end } => {
                vec![event_id.clone(), start.to_string(), end.to_string()]
            }
            Notification::SelectedEventsChanged { event_ids } => event_ids.clone(),
            Notification::CheckBox { event_id, checked } => {
                vec![event_id.clone(), checked.to_string()]
            }
            Notification::DynamicSettingChanged { settings } => vec![settings.to_string()],
        }
    }
}

/// Receiver for outbound notifications; implemented by the presenter
/// adapter in the host application.
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Sink that records every notification, for assertions in tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    pub notifications: Vec<Notification>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> Vec<&'static str> {
        self.notifications.iter().map(|n| n.action()).collect()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl NotificationSink for CollectingSink {
    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_names_and_params() {
        let n = Notification::VisibleTimeRangeChanged {
            lower: 100,
            upper: 200,
        };
        assert_eq!(n.action(), "VisibleTimeRangeChanged");
        assert_eq!(n.params(), vec!["100", "200"]);

        let n = Notification::CheckBox {
            event_id: "evt1".into(),
            checked: true,
        };
        assert_eq!(n.params(), vec!["evt1", "true"]);

        let n = Notification::EventTimeRangeChanged {
            event_id: "evt1".into(),
            start: 10,
            end: 20,
        };
        assert_eq!(n.params(), vec!["evt1", "10", "20"]);
    }

    #[test]
    fn test_collecting_sink_records_in_order() {
        let mut sink = CollectingSink::new();
        sink.notify(Notification::SelectedTimeChanged { time: 1 });
        sink.notify(Notification::SelectedTimeChanged { time: 2 });
        assert_eq!(sink.actions(), vec!["SelectedTimeChanged", "SelectedTimeChanged"]);
        assert_eq!(
            sink.last(),
            Some(&Notification::SelectedTimeChanged { time: 2 })
        );
    }
}
