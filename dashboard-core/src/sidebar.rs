use tracing::debug;

/// Open/closed state of the navigation panel. Starts open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { open: true }
    }
}

impl SidebarState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        debug!(open = self.open, "sidebar toggled");
        self.open
    }

    /// Panel is translated off-screen while closed.
    pub fn panel_class(self) -> &'static str {
        if self.open {
            "sidebar sidebar-open"
        } else {
            "sidebar sidebar-closed"
        }
    }

    /// Content keeps a left margin the width of the panel while it is open.
    pub fn content_class(self) -> &'static str {
        if self.open {
            "content content-shifted"
        } else {
            "content"
        }
    }
}
