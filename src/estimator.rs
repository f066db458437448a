use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info, warn};

use crate::clipboard::ClipboardSink;
use crate::core::{
    EngineError, FutureValueEngine, Inputs, ProjectionEngine, ProjectionReport, ValidationError,
    render, validate,
};

enum EngineState {
    Loading,
    Ready(Arc<dyn ProjectionEngine>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineStatusKind {
    Loading,
    Ready,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineStatus {
    pub state: EngineStatusKind,
    pub message: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Engine still loading.")]
    EngineNotReady,
    #[error("Calculation already in progress.")]
    CalculationInFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("Calculation failed: {0}")]
    Calculation(#[from] EngineError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportStatus {
    Copied,
    NothingToCopy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Clipboard not available.")]
    ClipboardUnavailable,
}

pub async fn load_default_engine() -> Result<Arc<dyn ProjectionEngine>, String> {
    Ok(Arc::new(FutureValueEngine))
}

pub struct Estimator {
    engine: RwLock<EngineState>,
    summary: RwLock<Option<String>>,
    calc_gate: Mutex<()>,
    clipboard: Arc<dyn ClipboardSink>,
}

impl Estimator {
    pub fn new(clipboard: Arc<dyn ClipboardSink>) -> Self {
        Self {
            engine: RwLock::new(EngineState::Loading),
            summary: RwLock::new(None),
            calc_gate: Mutex::new(()),
            clipboard,
        }
    }

    // Settles Loading into Ready or Failed, terminal either way. Once
    // settled, later calls return without polling their loader.
    pub async fn initialize<F>(&self, loader: F)
    where
        F: Future<Output = Result<Arc<dyn ProjectionEngine>, String>>,
    {
        {
            let state = self.engine.read().await;
            if !matches!(*state, EngineState::Loading) {
                return;
            }
        }

        match loader.await {
            Ok(engine) => {
                let mut state = self.engine.write().await;
                if matches!(*state, EngineState::Loading) {
                    info!("projection engine ready");
                    *state = EngineState::Ready(engine);
                }
            }
            Err(reason) => {
                let mut state = self.engine.write().await;
                if matches!(*state, EngineState::Loading) {
                    error!("engine initialization failed: {reason}");
                    *state = EngineState::Failed(reason);
                }
            }
        }
    }

    pub async fn engine_status(&self) -> EngineStatus {
        match &*self.engine.read().await {
            EngineState::Loading => EngineStatus {
                state: EngineStatusKind::Loading,
                message: "Loading projection engine...".to_string(),
                error: None,
            },
            EngineState::Ready(_) => EngineStatus {
                state: EngineStatusKind::Ready,
                message: "Projection engine loaded.".to_string(),
                error: None,
            },
            EngineState::Failed(reason) => EngineStatus {
                state: EngineStatusKind::Failed,
                message: "Engine failed to load.".to_string(),
                error: Some(format!("Initialization failed: {reason}")),
            },
        }
    }

    // Only a successful calculation overwrites the summary cache.
    pub async fn submit(&self, inputs: Inputs) -> Result<ProjectionReport, SubmitError> {
        let Ok(_gate) = self.calc_gate.try_lock() else {
            return Err(SubmitError::CalculationInFlight);
        };

        let engine = {
            let state = self.engine.read().await;
            match &*state {
                EngineState::Ready(engine) => Arc::clone(engine),
                _ => return Err(SubmitError::EngineNotReady),
            }
        };

        validate(&inputs)?;

        let projection = engine.calculate(&inputs)?;
        let report = render(&projection);
        *self.summary.write().await = Some(report.summary.clone());
        Ok(report)
    }

    pub async fn cached_summary(&self) -> Option<String> {
        self.summary.read().await.clone()
    }

    pub async fn export_results(&self) -> Result<ExportStatus, ExportError> {
        let summary = {
            let cached = self.summary.read().await;
            match &*cached {
                Some(summary) => summary.clone(),
                None => return Ok(ExportStatus::NothingToCopy),
            }
        };

        let clipboard = Arc::clone(&self.clipboard);
        match tokio::task::spawn_blocking(move || clipboard.copy(&summary)).await {
            Ok(Ok(())) => Ok(ExportStatus::Copied),
            Ok(Err(reason)) => {
                warn!("clipboard write failed: {reason}");
                Err(ExportError::ClipboardUnavailable)
            }
            Err(join_error) => {
                warn!("clipboard task failed: {join_error}");
                Err(ExportError::ClipboardUnavailable)
            }
        }
    }
}
