//! Application state definitions

use super::forms::ApplicationWizard;
use super::notifications::{Notifications, ToastLevel};
use super::publications::PublicationsState;
use std::time::Duration;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Landing page with marquee and headline animation
    #[default]
    Landing,
    /// Multi-step application wizard
    Apply,
    Publications,
}

impl View {
    pub const NAV: [View; 3] = [View::Landing, View::Apply, View::Publications];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Apply => "Apply",
            Self::Publications => "Publications",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Content
    pub wizard: ApplicationWizard,
    pub publications: PublicationsState,

    // UI state
    pub notifications: Notifications,
}

impl AppState {
    pub fn with_toast_duration(ttl: Duration) -> Self {
        Self {
            notifications: Notifications::new(ttl),
            ..Default::default()
        }
    }

    pub fn notify(
        &mut self,
        level: ToastLevel,
        title: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.notifications.push(level, title, description);
    }
}
