use std::sync::Arc;

use infra::repos::PlayerGraph;

#[derive(Clone)]
pub struct AppState {
    pub graph: Arc<dyn PlayerGraph>,
}

impl AppState {
    pub fn new(graph: impl PlayerGraph + 'static) -> Self {
        Self {
            graph: Arc::new(graph),
        }
    }
}
