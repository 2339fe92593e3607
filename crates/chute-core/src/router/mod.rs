//! Route-to-view dispatch.
//!
//! Exactly one view is active at a time. Navigating away deactivates the
//! current view before the next one is built and activated, so a view's
//! poller never overlaps with its successor's.

use std::fmt;

use tracing::{debug, info};

use crate::views::{
    LiveStreamView, OverviewView, PhotosView, SecurityView, ViewContext, ViewError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Overview,
    LiveStream,
    Photos,
    Security,
}

impl Route {
    pub const ALL: [Route; 4] = [
        Route::Overview,
        Route::LiveStream,
        Route::Photos,
        Route::Security,
    ];

    /// Resolve a URL path. Unknown paths redirect to the overview.
    pub fn from_path(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        match path {
            "/live-stream" => Route::LiveStream,
            "/photos" => Route::Photos,
            "/security" => Route::Security,
            _ => Route::Overview,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Overview => "/",
            Route::LiveStream => "/live-stream",
            Route::Photos => "/photos",
            Route::Security => "/security",
        }
    }

    pub fn view_name(&self) -> &'static str {
        match self {
            Route::Overview => OverviewView::NAME,
            Route::LiveStream => LiveStreamView::NAME,
            Route::Photos => PhotosView::NAME,
            Route::Security => SecurityView::NAME,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// The view instance currently on screen.
pub enum ActiveView {
    Overview(OverviewView),
    LiveStream(LiveStreamView),
    Photos(PhotosView),
    Security(SecurityView),
}

impl ActiveView {
    fn build(route: Route, ctx: &ViewContext) -> Result<Self, ViewError> {
        Ok(match route {
            Route::Overview => ActiveView::Overview(OverviewView),
            Route::LiveStream => ActiveView::LiveStream(LiveStreamView::new(ctx)?),
            Route::Photos => ActiveView::Photos(PhotosView::new(ctx)),
            Route::Security => ActiveView::Security(SecurityView::new(ctx)),
        })
    }

    fn activate(&mut self) -> Result<(), ViewError> {
        match self {
            ActiveView::Photos(view) => view.activate(),
            ActiveView::Security(view) => view.activate(),
            ActiveView::Overview(_) | ActiveView::LiveStream(_) => Ok(()),
        }
    }

    fn deactivate(&mut self) -> bool {
        match self {
            ActiveView::Photos(view) => view.deactivate(),
            ActiveView::Security(view) => view.deactivate(),
            ActiveView::Overview(_) | ActiveView::LiveStream(_) => true,
        }
    }

    pub fn route(&self) -> Route {
        match self {
            ActiveView::Overview(_) => Route::Overview,
            ActiveView::LiveStream(_) => Route::LiveStream,
            ActiveView::Photos(_) => Route::Photos,
            ActiveView::Security(_) => Route::Security,
        }
    }
}

pub struct Router {
    ctx: ViewContext,
    current: Option<ActiveView>,
}

impl Router {
    pub fn new(ctx: ViewContext) -> Self {
        Self { ctx, current: None }
    }

    /// Show the view for `path`.
    ///
    /// Navigating to the route that is already shown keeps the current view
    /// instance. On activation failure no view is active.
    pub fn navigate(&mut self, path: &str) -> Result<&mut ActiveView, ViewError> {
        let route = Route::from_path(path);
        if route.path() != path {
            debug!(event = "core.router.redirected", from = path, to = route.path());
        }

        if self.current_route() == Some(route) {
            debug!(event = "core.router.navigate_skipped", route = %route, reason = "already_active");
        } else {
            if let Some(mut previous) = self.current.take() {
                previous.deactivate();
            }

            let mut view = ActiveView::build(route, &self.ctx)?;
            view.activate()?;

            info!(
                event = "core.router.navigated",
                route = %route,
                view = route.view_name()
            );
            self.current = Some(view);
        }

        self.current
            .as_mut()
            .ok_or(ViewError::Released {
                view: route.view_name(),
            })
    }

    pub fn current(&self) -> Option<&ActiveView> {
        self.current.as_ref()
    }

    pub fn current_mut(&mut self) -> Option<&mut ActiveView> {
        self.current.as_mut()
    }

    pub fn current_route(&self) -> Option<Route> {
        self.current.as_ref().map(ActiveView::route)
    }

    /// Whether `path` is the URL of the view on screen, for nav highlighting.
    pub fn is_active(&self, path: &str) -> bool {
        self.current_route().is_some_and(|route| route.path() == path)
    }

    /// Deactivate the current view, leaving none active.
    pub fn shutdown(&mut self) {
        if let Some(mut view) = self.current.take() {
            view.deactivate();
            info!(event = "core.router.shutdown_completed", route = %view.route());
        }
    }

    pub fn context(&self) -> &ViewContext {
        &self.ctx
    }
}
