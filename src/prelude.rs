//! Commonly used types in one import.
//!
//! ```ignore
//! use postdeck::prelude::*;
//! ```

pub use crate::api::{ApiClient, ApiError};
pub use crate::app::{App, AppMessage, Screen};
pub use crate::config::{AppConfig, BuildMode};
pub use crate::models::Post;
pub use crate::settings::{Settings, Theme, ThemeSurface, ThemeToggle, THEME_KEY};
pub use crate::state::{FetchState, Resource};
pub use crate::traits::{HttpClient, HttpError, KeyValueStore, StorageError};
pub use crate::ui::{render, LayoutContext, Palette};
