pub mod conflict;
pub mod courses;
pub mod docs;
pub mod roadmap;

pub use conflict::*;
pub use courses::*;
pub use docs::*;
pub use roadmap::*;

use std::sync::Arc;

use crate::config::PlannerConfig;
use crate::error::PlannerError;
use crate::providers::DataSource;

/// Abre una fuente de datos fresca para cada pedido.
pub type StoreFactory = Arc<dyn Fn() -> Result<Box<dyn DataSource>, PlannerError> + Send + Sync>;

/// Estado compartido por los handlers (solo lectura).
#[derive(Clone)]
pub struct AppState {
    pub planner: PlannerConfig,
    pub open_store: StoreFactory,
}
