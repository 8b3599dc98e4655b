mod event;
mod hook;
mod hook_config;
mod hook_content_type;
mod hook_creation;

pub use event::GhEvent;
pub use hook::GhHook;
pub use hook_config::GhHookConfig;
pub use hook_content_type::GhHookContentType;
pub use hook_creation::GhHookCreation;
