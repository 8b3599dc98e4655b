mod watch_event;

pub use watch_event::GhWatchEvent;
