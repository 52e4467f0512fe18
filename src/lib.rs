//! Accessible Hello World: greeting catalogs, accessibility helpers, UI state
//! holders and (behind the `web` feature) the HTTP server that serves them.

pub mod a11y;
pub mod app;
pub mod greeting;
pub mod settings;

#[cfg(feature = "web")]
pub mod web;

pub use a11y::{ContrastReport, Rgb, check_contrast, contrast};
pub use app::{AccessibleHelloWorldApp, HelloWorldApp, HelloWorldComponent, HelloWorldDemo};
pub use greeting::{DEFAULT_GREETING, GreetingStyle, Language, TimeOfDay};
pub use settings::{AccessibilitySettings, FileStore, FontSize, MemoryStore, SettingsStore};
