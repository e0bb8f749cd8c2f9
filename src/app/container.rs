use std::sync::Arc;

use crate::adapters::SphinxAdapter;
use crate::app::docs_interactor::DocsInteractor;
use crate::ports::DocsPort;

pub trait AppContainer: Send + Sync {
    fn docs_interactor(&self) -> Arc<DocsInteractor>;
}

pub struct DefaultAppContainer {
    docs_interactor: Arc<DocsInteractor>,
}

impl DefaultAppContainer {
    pub fn new() -> Self {
        let docs_port = Arc::new(SphinxAdapter::new());
        let docs_interactor = Arc::new(DocsInteractor::new(docs_port as Arc<dyn DocsPort>));
        Self { docs_interactor }
    }
}

impl Default for DefaultAppContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContainer for DefaultAppContainer {
    fn docs_interactor(&self) -> Arc<DocsInteractor> {
        Arc::clone(&self.docs_interactor)
    }
}
