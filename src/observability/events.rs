//! Observable events
//!
//! Every log line the service writes names one of these.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// Process startup begins
    BootStart,
    /// Configuration loaded
    ConfigLoaded,
    /// Seed catalog loaded into the store
    CatalogSeeded,
    /// Listener bound, ready to serve
    ServerListening,
    /// Listener closed
    ServerStopped,
    /// Server failed to start or crashed
    ServerFailed,

    // Requests
    /// A listing page was served
    BooksListed,
    /// A lookup found its book
    BookFound,
    /// A lookup missed
    BookNotFound,
    /// A request failed inside the store
    RequestFailed,
}

impl Event {
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::BootStart => "BOOT_START",
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::CatalogSeeded => "CATALOG_SEEDED",
            Event::ServerListening => "SERVER_LISTENING",
            Event::ServerStopped => "SERVER_STOPPED",
            Event::ServerFailed => "SERVER_FAILED",
            Event::BooksListed => "BOOKS_LISTED",
            Event::BookFound => "BOOK_FOUND",
            Event::BookNotFound => "BOOK_NOT_FOUND",
            Event::RequestFailed => "REQUEST_FAILED",
        }
    }

    /// Whether this event means the process cannot continue
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::ServerFailed)
    }

    /// Whether this event records a failed request
    pub fn is_error(&self) -> bool {
        matches!(self, Event::RequestFailed)
    }

    /// Whether this event records a request the client got wrong
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::BookNotFound)
    }

    /// Per-request events
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Event::BooksListed | Event::BookFound | Event::BookNotFound
        )
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_screaming_snake() {
        let all = [
            Event::BootStart,
            Event::ConfigLoaded,
            Event::CatalogSeeded,
            Event::ServerListening,
            Event::ServerStopped,
            Event::ServerFailed,
            Event::BooksListed,
            Event::BookFound,
            Event::BookNotFound,
            Event::RequestFailed,
        ];
        for event in all {
            let name = event.as_str();
            assert!(name.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_classification() {
        assert!(Event::ServerFailed.is_fatal());
        assert!(!Event::BookNotFound.is_fatal());
        assert!(Event::RequestFailed.is_error());
        assert!(Event::BooksListed.is_request());
        assert!(Event::BookNotFound.is_warning());
        assert!(!Event::BookFound.is_warning());
        assert!(!Event::BootStart.is_request());
    }
}
