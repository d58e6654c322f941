pub mod toml_loader;

pub use toml_loader::{builtin_messages, load_messages, load_messages_file};
