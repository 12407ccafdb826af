use portfolio_shared_contracts::id::IdService;
use uuid::Uuid;

/// Generates time-ordered (v7) UUIDs, so ids sort by creation time.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdServiceImpl;

impl IdService for IdServiceImpl {
    fn generate<I: From<Uuid> + 'static>(&self) -> I {
        let id = Uuid::now_v7();
        tracing::trace!(%id, "generated id");
        id.into()
    }
}
