use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

use super::{ChartChild, ChartEngine, ChartEngineConfig, ChartLayout, TextMetrics};

pub const LAYOUT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable chart input: engine settings, rows, and the chart tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDocument {
    pub config: ChartEngineConfig,
    #[serde(default)]
    pub data: Vec<DataPoint>,
    #[serde(default)]
    pub children: Vec<ChartChild>,
}

impl ChartDocument {
    #[must_use]
    pub fn new(config: ChartEngineConfig) -> Self {
        Self {
            config,
            data: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse chart document: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize chart document: {e}"))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayoutJsonContractV1 {
    pub schema_version: u32,
    pub layout: ChartLayout,
}

impl ChartLayout {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartLayoutJsonContractV1 {
            schema_version: LAYOUT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::Serialization(format!("failed to serialize layout contract v1: {e}"))
        })
    }

    /// Accepts both a bare layout and a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(layout) = serde_json::from_str::<ChartLayout>(input) {
            return Ok(layout);
        }
        let payload: ChartLayoutJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::Serialization(format!("failed to parse layout json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_JSON_SCHEMA_V1 {
            return Err(ChartError::Serialization(format!(
                "unsupported layout schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}

impl<M: TextMetrics> ChartEngine<M> {
    /// Builds an engine preloaded with the document's rows and tree.
    pub fn from_document(metrics: M, document: ChartDocument) -> ChartResult<Self> {
        let mut engine = Self::new(metrics, document.config)?;
        engine.set_data(document.data);
        engine.set_children(document.children);
        Ok(engine)
    }

    #[must_use]
    pub fn to_document(&self) -> ChartDocument {
        ChartDocument {
            config: self.config().clone(),
            data: self.data().to_vec(),
            children: self.children().to_vec(),
        }
    }

    pub fn layout_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.layout().to_json_contract_v1_pretty()
    }
}
