//! ==============================================================================
//! lib.rs - shared types for the medicine advisor
//! ==============================================================================
//!
//! purpose:
//!     defines the wire types exchanged with the advisor api and the
//!     display rules applied to them. kept free of any browser dependency
//!     so the behaviour can be unit tested on the host.
//!
//! relationships:
//!     - used by: dashboard (request bodies, response types, error messages)
//!     - talks to: the advisor backend (POST /query, POST /check-interaction,
//!       GET /health)
//!
//! design rationale:
//!     the backend is an opaque service. responses are displayed as-is:
//!     nothing here validates or mutates them beyond optional-field access.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

mod error;

pub use error::{ApiError, ErrorBody, FALLBACK_ERROR};

/// shown under every answer
pub const DISCLAIMER: &str = "This information is for educational purposes only. \
Always consult with a healthcare professional before making any decisions about medications.";

/// sample questions offered on the general tab
pub const EXAMPLE_QUERIES: [&str; 4] = [
    "What is ibuprofen used for?",
    "Side effects of amoxicillin",
    "How much acetaminophen can I take?",
    "Metformin warnings and precautions",
];

// ==============================================================================
// request bodies
// ==============================================================================

/// body of POST /query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
}

/// body of POST /check-interaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionRequest {
    pub drug1: String,
    pub drug2: String,
}

// ==============================================================================
// response bodies
// ==============================================================================

/// answer to a general medication question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// the question as the service received it
    pub query: String,
    /// drug names the service extracted from the question
    pub drugs_identified: Vec<String>,
    /// service classification (side_effects, dosage, usage, ...)
    pub query_type: String,
    /// free-text answer
    pub response: String,
    /// number of sources consulted
    pub sources_used: u32,
}

/// answer to a two-drug interaction check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteractionResponse {
    pub drug1: String,
    pub drug2: String,
    pub interaction_found: bool,
    /// interaction records, passed through unvalidated
    pub interactions: Vec<serde_json::Value>,
    pub response: String,
    /// source identifiers (e.g. "DrugBank")
    pub sources: Vec<String>,
}

/// GET /health payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub vector_db_stats: serde_json::Value,
}

impl HealthResponse {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// whichever answer was received last
#[derive(Debug, Clone, PartialEq)]
pub enum AdvisorResponse {
    General(QueryResponse),
    Interaction(InteractionResponse),
}

impl From<QueryResponse> for AdvisorResponse {
    fn from(resp: QueryResponse) -> Self {
        Self::General(resp)
    }
}

impl From<InteractionResponse> for AdvisorResponse {
    fn from(resp: InteractionResponse) -> Self {
        Self::Interaction(resp)
    }
}

/// one "label: value" row under an answer
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataLine {
    pub label: &'static str,
    pub value: String,
}

impl MetadataLine {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, value: value.into() }
    }
}

impl std::fmt::Display for MetadataLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

impl AdvisorResponse {
    /// the free-text answer
    pub fn text(&self) -> &str {
        match self {
            Self::General(r) => &r.response,
            Self::Interaction(r) => &r.response,
        }
    }

    /// metadata rows shown below the answer.
    ///
    /// general answers only get metadata when at least one drug was
    /// identified; interaction answers always do.
    pub fn metadata(&self) -> Vec<MetadataLine> {
        match self {
            Self::General(r) if r.drugs_identified.is_empty() => Vec::new(),
            Self::General(r) => vec![
                MetadataLine::new("Drugs identified", r.drugs_identified.join(", ")),
                MetadataLine::new("Query type", r.query_type.clone()),
                MetadataLine::new("Sources used", r.sources_used.to_string()),
            ],
            Self::Interaction(r) => vec![
                MetadataLine::new(
                    "Interaction found",
                    if r.interaction_found { "Yes" } else { "No" },
                ),
                MetadataLine::new("Sources", r.sources.join(", ")),
            ],
        }
    }
}

// ==============================================================================
// tests
// ==============================================================================
