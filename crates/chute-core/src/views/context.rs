use std::sync::Arc;

use crate::config::ChuteConfig;
use crate::http::HttpGet;
use crate::poller::Scheduler;

/// Collaborators handed to every view at construction.
#[derive(Clone)]
pub struct ViewContext {
    pub http: Arc<dyn HttpGet>,
    pub scheduler: Scheduler,
    pub config: Arc<ChuteConfig>,
}

impl ViewContext {
    pub fn new(http: Arc<dyn HttpGet>, scheduler: Scheduler, config: ChuteConfig) -> Self {
        Self {
            http,
            scheduler,
            config: Arc::new(config),
        }
    }
}
