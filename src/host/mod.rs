//! Capabilities the core borrows from whatever application hosts it:
//! user notices, an editable document, and command registration.

pub mod editor;
pub mod notifier;

pub use editor::{EditorSurface, MarkdownDocument};
pub use notifier::{ConsoleNotifier, Notifier};
