use std::sync::Arc;

use crate::corrector::CorrectionService;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    corrector: Arc<dyn CorrectionService>,
}

impl AppState {
    pub fn new(corrector: Arc<dyn CorrectionService>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { corrector }),
        }
    }

    pub fn corrector(&self) -> Arc<dyn CorrectionService> {
        self.inner.corrector.clone()
    }
}
