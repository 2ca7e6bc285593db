//! Catalog of causative agents per pollution category.
//!
//! Loaded from `agents.json` with support for an environment variable
//! override (`CAUSAL_AGENTS_CONFIG`). The catalog is validated once at
//! construction and read-only afterwards: agent ids must be unique across
//! the whole catalog and every category must carry positive total weight.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::{env, fs, io, path::Path, path::PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::scalar::Scalar;

pub const BUILTIN_AGENTS_CONFIG: &str = include_str!("data/agents.json");

/// One of the three independent pollution dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseCategory {
    Air,
    Water,
    Soil,
}

impl CauseCategory {
    pub const VARIANTS: [CauseCategory; 3] =
        [CauseCategory::Air, CauseCategory::Water, CauseCategory::Soil];

    pub const fn as_str(&self) -> &'static str {
        match self {
            CauseCategory::Air => "air",
            CauseCategory::Water => "water",
            CauseCategory::Soil => "soil",
        }
    }

    pub const fn variants() -> &'static [CauseCategory; 3] {
        &Self::VARIANTS
    }
}

impl fmt::Display for CauseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named contributing cause within a category.
///
/// The weight is its fixed relative share of the category factor; the
/// user-adjustable part lives in [`crate::multipliers::MultiplierBoard`].
#[derive(Debug, Clone)]
pub struct CausativeAgent {
    pub id: String,
    pub label: String,
    pub weight: Scalar,
}

#[derive(Debug, Clone, Deserialize)]
struct RawAgent {
    id: String,
    label: String,
    weight: f32,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawCatalog {
    #[serde(default)]
    air: Vec<RawAgent>,
    #[serde(default)]
    water: Vec<RawAgent>,
    #[serde(default)]
    soil: Vec<RawAgent>,
}

/// Error raised while constructing the agent catalog.
///
/// These are build-time configuration defects: none of them is recoverable
/// at runtime and any of them prevents engine construction.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse agent catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read agent catalog from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("agent id {id:?} appears more than once in the catalog")]
    DuplicateAgent { id: String },
    #[error("agent {id:?} in category {category} has non-positive weight")]
    NonPositiveWeight { category: CauseCategory, id: String },
    #[error("category {0} has no agents")]
    EmptyCategory(CauseCategory),
}

/// Validated, read-only catalog of causative agents.
#[derive(Debug, Clone)]
pub struct AgentCatalog {
    categories: BTreeMap<CauseCategory, Vec<CausativeAgent>>,
}

impl AgentCatalog {
    /// Catalog baked into the binary.
    pub fn builtin() -> Self {
        Self::from_json_str(BUILTIN_AGENTS_CONFIG).expect("builtin agent catalog should validate")
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        Self::validate(raw)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Load the catalog from `CAUSAL_AGENTS_CONFIG` when set, otherwise the
    /// builtin. A broken override file is a hard error, not a silent
    /// fallback, since the engine must not start against the wrong catalog.
    pub fn load_with_env_override() -> Result<Self, CatalogError> {
        match env::var("CAUSAL_AGENTS_CONFIG").ok().map(PathBuf::from) {
            Some(path) => {
                let catalog = Self::from_file(&path)?;
                tracing::info!(
                    target: "pollution::config",
                    path = %path.display(),
                    "agent_catalog.loaded=file"
                );
                Ok(catalog)
            }
            None => {
                tracing::info!(target: "pollution::config", "agent_catalog.loaded=builtin");
                Ok(Self::builtin())
            }
        }
    }

    fn validate(raw: RawCatalog) -> Result<Self, CatalogError> {
        let mut categories = BTreeMap::new();
        let mut seen: HashSet<String> = HashSet::new();
        let raw_categories = [
            (CauseCategory::Air, raw.air),
            (CauseCategory::Water, raw.water),
            (CauseCategory::Soil, raw.soil),
        ];
        for (category, raw_agents) in raw_categories {
            if raw_agents.is_empty() {
                return Err(CatalogError::EmptyCategory(category));
            }
            let mut agents = Vec::with_capacity(raw_agents.len());
            for agent in raw_agents {
                if !seen.insert(agent.id.clone()) {
                    return Err(CatalogError::DuplicateAgent { id: agent.id });
                }
                let weight = Scalar::from_f32(agent.weight);
                if !weight.is_positive() {
                    return Err(CatalogError::NonPositiveWeight {
                        category,
                        id: agent.id,
                    });
                }
                agents.push(CausativeAgent {
                    id: agent.id,
                    label: agent.label,
                    weight,
                });
            }
            categories.insert(category, agents);
        }
        Ok(Self { categories })
    }

    /// Agents for a category, in display order.
    pub fn agents_for(&self, category: CauseCategory) -> &[CausativeAgent] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All agent ids across every category.
    pub fn agent_ids(&self) -> impl Iterator<Item = &str> {
        self.categories
            .values()
            .flat_map(|agents| agents.iter().map(|agent| agent.id.as_str()))
    }

    pub fn contains(&self, agent_id: &str) -> bool {
        self.agent_ids().any(|id| id == agent_id)
    }

    /// The category an agent belongs to, if it exists.
    pub fn category_of(&self, agent_id: &str) -> Option<CauseCategory> {
        self.categories.iter().find_map(|(category, agents)| {
            agents
                .iter()
                .any(|agent| agent.id == agent_id)
                .then_some(*category)
        })
    }

    /// Total registry weight for a category. Positive by construction.
    pub fn total_weight(&self, category: CauseCategory) -> Scalar {
        self.agents_for(category)
            .iter()
            .fold(Scalar::zero(), |acc, agent| acc + agent.weight)
    }
}
