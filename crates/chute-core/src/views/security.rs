//! Security status view: polls the latest status once per interval.

use tokio::sync::watch;

use crate::status::SecurityState;
use crate::views::binding::{BindingSpec, ViewBinding};
use crate::views::context::ViewContext;
use crate::views::errors::ViewError;

pub struct SecurityView {
    binding: ViewBinding<SecurityState>,
}

impl SecurityView {
    pub const NAME: &'static str = "security";

    pub fn new(ctx: &ViewContext) -> Self {
        let config = &ctx.config.security;
        let spec = BindingSpec {
            view: Self::NAME,
            endpoint: config.status_path().to_string(),
            interval: config.interval(),
            fetch_on_activate: false,
        };

        Self {
            binding: ViewBinding::new(ctx, spec, SecurityState::new(config.placeholder_image())),
        }
    }

    pub fn activate(&mut self) -> Result<(), ViewError> {
        self.binding.activate()
    }

    pub fn deactivate(&mut self) -> bool {
        self.binding.deactivate()
    }

    pub fn subscribe(&self) -> watch::Receiver<SecurityState> {
        self.binding.subscribe()
    }

    pub fn state(&self) -> SecurityState {
        self.binding.snapshot()
    }

    pub fn binding(&self) -> &ViewBinding<SecurityState> {
        &self.binding
    }
}
