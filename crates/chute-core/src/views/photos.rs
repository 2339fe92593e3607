//! Photo gallery view: loads on activation, then refreshes every minute.

use tokio::sync::watch;

use crate::photos::PhotosState;
use crate::views::binding::{BindingSpec, ViewBinding};
use crate::views::context::ViewContext;
use crate::views::errors::ViewError;

pub struct PhotosView {
    binding: ViewBinding<PhotosState>,
}

impl PhotosView {
    pub const NAME: &'static str = "photos";

    pub fn new(ctx: &ViewContext) -> Self {
        let config = &ctx.config.photos;
        let spec = BindingSpec {
            view: Self::NAME,
            endpoint: config.path().to_string(),
            interval: config.interval(),
            fetch_on_activate: true,
        };

        Self {
            binding: ViewBinding::new(ctx, spec, PhotosState::default()),
        }
    }

    pub fn activate(&mut self) -> Result<(), ViewError> {
        self.binding.activate()
    }

    pub fn deactivate(&mut self) -> bool {
        self.binding.deactivate()
    }

    pub fn subscribe(&self) -> watch::Receiver<PhotosState> {
        self.binding.subscribe()
    }

    pub fn state(&self) -> PhotosState {
        self.binding.snapshot()
    }

    pub fn binding(&self) -> &ViewBinding<PhotosState> {
        &self.binding
    }
}
