//! # praisal-view
//!
//! The performance-template listing view, host-agnostic.
//!
//! [`TemplateListView`] owns everything the listing page displays: the
//! fetched rows, the loading indicator, per-template delete markers, and
//! the single user-visible notice. Role and credentials are injected at
//! construction rather than read from ambient state, so the same logic
//! drives a browser shell, the terminal front-end, and tests.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod page;
pub mod prompt;
pub mod view;

pub use page::{EmptyState, PageModel, TemplateRow};
pub use prompt::{ConfirmPrompt, Navigator, Route};
pub use view::{Notice, TemplateListView, messages};
