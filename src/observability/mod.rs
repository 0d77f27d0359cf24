//! Observability: structured JSON logging and request counters
//!
//! ```ignore
//! use bookshelf::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::BooksListed, &[("total", "5")]);
//! ```

mod events;
mod logger;
mod metrics;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};

/// Severity an event is logged at
pub fn severity_for(event: Event) -> Severity {
    if event.is_fatal() {
        Severity::Fatal
    } else if event.is_error() {
        Severity::Error
    } else if event.is_warning() {
        Severity::Warn
    } else if event.is_request() {
        Severity::Trace
    } else {
        Severity::Info
    }
}

/// Log a lifecycle or request event
pub fn log_event(event: Event) {
    Logger::log(severity_for(event), event.as_str(), &[]);
}

/// Log an event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(severity_for(event), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_for() {
        assert_eq!(severity_for(Event::BootStart), Severity::Info);
        assert_eq!(severity_for(Event::BooksListed), Severity::Trace);
        assert_eq!(severity_for(Event::BookFound), Severity::Trace);
        assert_eq!(severity_for(Event::BookNotFound), Severity::Warn);
        assert_eq!(severity_for(Event::RequestFailed), Severity::Error);
        assert_eq!(severity_for(Event::ServerFailed), Severity::Fatal);
    }

    #[test]
    fn test_log_event() {
        // no panic
        log_event(Event::BootStart);
        log_event_with_fields(Event::ConfigLoaded, &[("port", "3000")]);
    }
}
