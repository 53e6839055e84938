//! Collaborator services around the navigation core.
//!
//! None of these touch the transition machinery: a failed fetch or a denied
//! clipboard write surfaces as an error value for the presentation layer
//! and leaves navigation state alone.

pub mod clipboard;
pub mod github;
pub mod i18n;
pub mod projects;
pub mod theme;

pub use clipboard::{BufferedClipboard, ClipboardError, ClipboardWriter};
pub use github::{GithubClient, RepoError, RepoInfo};
pub use i18n::{Language, Translator};
pub use projects::{projects, Project};
pub use theme::{InMemoryPersistence, Theme, ThemePersistence, ThemeProvider, SystemThemeProbe};

#[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
pub use clipboard::SystemClipboard;
