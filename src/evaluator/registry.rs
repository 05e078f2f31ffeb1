use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::config::{EvaluatorConfig, EvaluatorConfigs};

use super::{
    evaluator::{Evaluator, EvaluatorType},
    local::LocalEvaluator,
    types::{EvalError, EvalResult},
};

/// A registered evaluator together with the config that produced it.
#[derive(Clone)]
pub struct EvaluatorInstance {
    pub config: EvaluatorConfig,
    pub evaluator: Arc<dyn Evaluator>,
}

/// Named evaluator instances with a primary selection.
///
/// Sessions are wired to the primary by default; callers may look up
/// any registered evaluator by name.
pub struct EvaluatorRegistry {
    configs: EvaluatorConfigs,
    evaluators: Arc<DashMap<String, Arc<EvaluatorInstance>>>,
    primary: Arc<RwLock<Option<String>>>,
}

impl EvaluatorRegistry {
    pub fn new(configs: EvaluatorConfigs) -> Self {
        let primary = Arc::new(RwLock::new(configs.primary_evaluator.clone()));
        Self {
            configs,
            evaluators: Arc::new(DashMap::new()),
            primary,
        }
    }

    /// Register every evaluator named in the configuration.
    #[instrument(level = "debug", skip(self))]
    pub async fn register_evaluators(&self) -> EvalResult<()> {
        for (name, config) in self.configs.evaluators.iter() {
            self.register_evaluator(name, config.evaluator_type.clone())
                .await?;
        }
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub async fn register_evaluator(
        &self,
        name: &str,
        evaluator_type: EvaluatorType,
    ) -> EvalResult<()> {
        let config = self.configs.evaluators.get(name).ok_or_else(|| {
            EvalError::Configuration(format!("Evaluator config not found: {}", name))
        })?;
        let evaluator = Self::create_evaluator(name, &evaluator_type)?;
        self.evaluators.insert(
            name.to_string(),
            Arc::new(EvaluatorInstance {
                config: config.clone(),
                evaluator,
            }),
        );
        debug!(evaluator = name, %evaluator_type, "registered");
        Ok(())
    }

    fn create_evaluator(
        name: &str,
        evaluator_type: &EvaluatorType,
    ) -> EvalResult<Arc<dyn Evaluator>> {
        match evaluator_type {
            EvaluatorType::Local => Ok(Arc::new(LocalEvaluator::new(name))),
            EvaluatorType::Unknown => Err(EvalError::Unsupported(format!(
                "Unknown evaluator type: {}",
                name
            ))),
        }
    }

    pub fn get_evaluator(&self, name: &str) -> EvalResult<Arc<EvaluatorInstance>> {
        self.evaluators
            .get(name)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| EvalError::EvaluatorNotFound(name.to_string()))
    }

    /// The evaluator sessions are wired to by default.
    pub async fn get_primary(&self) -> EvalResult<Arc<dyn Evaluator>> {
        let primary = self.primary.read().await;
        let name = primary
            .as_ref()
            .ok_or_else(|| EvalError::Configuration("No primary evaluator set".to_string()))?;
        Ok(self.get_evaluator(name)?.evaluator.clone())
    }

    pub async fn set_primary(&self, name: &str) -> EvalResult<()> {
        let _ = self.get_evaluator(name)?;
        let mut primary = self.primary.write().await;
        *primary = Some(name.to_string());
        Ok(())
    }

    pub async fn shutdown_all(&self) -> EvalResult<()> {
        for entry in self.evaluators.iter() {
            entry.value().evaluator.shutdown().await?;
        }
        Ok(())
    }
}
