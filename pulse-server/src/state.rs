use crate::generator::GeneratorConfig;
use crate::store::DataStore;

#[derive(Clone)]
pub struct AppState {
    pub store: DataStore,
    /// Kept so the refresh endpoint regenerates with the same knobs the
    /// process started with.
    pub generator: GeneratorConfig,
}

impl AppState {
    pub fn new(store: DataStore, generator: GeneratorConfig) -> Self {
        Self { store, generator }
    }
}
