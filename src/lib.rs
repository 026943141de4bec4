//! Floating "Broadcast the Truth" button and share dialog for any web page.

mod dom;
mod logging;

pub mod config;
pub mod error;
pub mod mount;
pub mod platforms;
pub mod share;
pub mod state;
pub mod styles;
pub mod widget;

pub use config::{ElementIds, WidgetConfig};
pub use error::WidgetError;
pub use mount::{configure, mount, start};
pub use platforms::{PlatformDescriptor, PLATFORMS};
pub use share::{share_message, ShareMessage, REPO_URL};
pub use state::{
    click_origin, transition, ClickOrigin, FocusTarget, WidgetAction, WidgetModel, WidgetState,
};
pub use widget::{BroadcastWidget, WidgetProps};
