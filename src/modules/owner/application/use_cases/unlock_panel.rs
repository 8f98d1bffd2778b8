use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::owner::application::services::{OwnerGate, OwnerGateError, PanelRegistry};

#[derive(Debug, Clone)]
pub enum UnlockPanelError {
    IncorrectPassword,
}

#[async_trait]
pub trait IUnlockPanelUseCase: Send + Sync {
    async fn execute(&self, password: &str) -> Result<Uuid, UnlockPanelError>;
}

pub struct UnlockPanelUseCase {
    gate: OwnerGate,
    registry: Arc<PanelRegistry>,
}

impl UnlockPanelUseCase {
    pub fn new(gate: OwnerGate, registry: Arc<PanelRegistry>) -> Self {
        Self { gate, registry }
    }
}

#[async_trait]
impl IUnlockPanelUseCase for UnlockPanelUseCase {
    async fn execute(&self, password: &str) -> Result<Uuid, UnlockPanelError> {
        let credential = self.gate.unlock(password).map_err(|err| match err {
            OwnerGateError::IncorrectPassword => UnlockPanelError::IncorrectPassword,
        })?;

        Ok(self.registry.open(credential).await)
    }
}
