use std::sync::Arc;

use crate::application::ports::completion_port::CompletionPort;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    completion: Arc<dyn CompletionPort>,
}

impl AppServices {
    pub fn new(completion: Arc<dyn CompletionPort>) -> Self {
        Self { completion }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn completion(&self) -> Arc<dyn CompletionPort> {
        self.services.completion.clone()
    }
}
