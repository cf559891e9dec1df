//! ==============================================================================
//! state.rs - view state of the advisor page
//! ==============================================================================
//!
//! purpose:
//!     plain-rust view model behind the leptos components. components keep
//!     one signal of [`AdvisorState`] and call these methods from their
//!     event handlers; the network call itself happens in between
//!     `begin_*` and `settle`.
//!
//! ordering:
//!     there is no request token. a call that settles after a tab switch or
//!     after a newer call still overwrites the state (last response wins).
//!
//! ==============================================================================

use advisor_shared::{AdvisorResponse, ApiError, InteractionRequest, QueryRequest};

/// which form is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    General,
    Interaction,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::General, Tab::Interaction];

    pub fn label(self) -> &'static str {
        match self {
            Tab::General => "General Query",
            Tab::Interaction => "Check Drug Interaction",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvisorState {
    pub tab: Tab,
    pub query: String,
    pub drug1: String,
    pub drug2: String,
    pub loading: bool,
    /// empty means no error
    pub error: String,
    pub response: Option<AdvisorResponse>,
}

impl AdvisorState {
    /// Show another form; drops the displayed answer and error
    pub fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.response = None;
        self.error.clear();
    }

    /// Start a general query. Returns `None` and leaves the state alone
    /// when the question is blank.
    pub fn begin_general_query(&mut self) -> Option<QueryRequest> {
        if self.query.trim().is_empty() {
            return None;
        }
        self.start();
        Some(QueryRequest { query: self.query.clone() })
    }

    /// Start an interaction check; both names must be non-blank.
    pub fn begin_interaction_check(&mut self) -> Option<InteractionRequest> {
        if self.drug1.trim().is_empty() || self.drug2.trim().is_empty() {
            return None;
        }
        self.start();
        Some(InteractionRequest {
            drug1: self.drug1.clone(),
            drug2: self.drug2.clone(),
        })
    }

    /// Apply the outcome of a call. A failure keeps the previous answer.
    pub fn settle(&mut self, result: Result<AdvisorResponse, ApiError>) {
        match result {
            Ok(response) => self.response = Some(response),
            Err(e) => self.error = e.user_message(),
        }
        self.loading = false;
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    fn start(&mut self) {
        self.loading = true;
        self.error.clear();
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use advisor_shared::{InteractionResponse, QueryResponse, FALLBACK_ERROR};

    fn metformin() -> QueryResponse {
        serde_json::from_str(
            r#"{
                "query": "What are the side effects of metformin?",
                "drugs_identified": ["metformin"],
                "query_type": "side_effects",
                "response": "Common side effects include...",
                "sources_used": 2
            }"#,
        )
        .unwrap()
    }

    fn ibuprofen_warfarin() -> InteractionResponse {
        serde_json::from_str(
            r#"{
                "drug1": "ibuprofen",
                "drug2": "warfarin",
                "interaction_found": true,
                "interactions": [],
                "response": "Increased bleeding risk.",
                "sources": ["DrugBank"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_blank_query_is_noop() {
        let mut state = AdvisorState {
            query: "   \t".to_string(),
            error: "old error".to_string(),
            ..Default::default()
        };
        let before = state.clone();

        assert_eq!(state.begin_general_query(), None);
        assert_eq!(state, before);

        state.query.clear();
        assert_eq!(state.begin_general_query(), None);
        assert!(!state.loading);
    }

    #[test]
    fn test_blank_drug_is_noop() {
        let mut state = AdvisorState {
            tab: Tab::Interaction,
            drug1: "ibuprofen".to_string(),
            drug2: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(state.begin_interaction_check(), None);

        state.drug1.clear();
        state.drug2 = "warfarin".to_string();
        assert_eq!(state.begin_interaction_check(), None);
        assert!(!state.loading);
    }

    #[test]
    fn test_general_query_round_trip() {
        let mut state = AdvisorState {
            query: "What are the side effects of metformin?".to_string(),
            ..Default::default()
        };

        let req = state.begin_general_query().unwrap();
        assert_eq!(req.query, "What are the side effects of metformin?");
        assert!(state.loading);

        state.settle(Ok(metformin().into()));
        assert!(!state.loading);
        assert!(!state.has_error());

        let response = state.response.as_ref().unwrap();
        assert_eq!(response, &AdvisorResponse::General(metformin()));
        let rows: Vec<String> = response.metadata().iter().map(|m| m.to_string()).collect();
        assert!(rows.contains(&"Drugs identified: metformin".to_string()));
        assert!(rows.contains(&"Query type: side_effects".to_string()));
        assert!(rows.contains(&"Sources used: 2".to_string()));
    }

    #[test]
    fn test_interaction_check_round_trip() {
        let mut state = AdvisorState {
            tab: Tab::Interaction,
            drug1: "ibuprofen".to_string(),
            drug2: "warfarin".to_string(),
            ..Default::default()
        };

        let req = state.begin_interaction_check().unwrap();
        assert_eq!(req.drug1, "ibuprofen");
        assert_eq!(req.drug2, "warfarin");

        state.settle(Ok(ibuprofen_warfarin().into()));
        let rows: Vec<String> = state
            .response
            .as_ref()
            .unwrap()
            .metadata()
            .iter()
            .map(|m| m.to_string())
            .collect();
        assert_eq!(rows, vec!["Interaction found: Yes", "Sources: DrugBank"]);
    }

    #[test]
    fn test_failure_shows_detail_and_keeps_previous_response() {
        let mut state = AdvisorState {
            query: "metformin".to_string(),
            response: Some(metformin().into()),
            ..Default::default()
        };

        state.begin_general_query().unwrap();
        state.settle(Err(ApiError::from_status(
            404,
            r#"{"detail": "drug name not recognized"}"#,
        )));

        assert_eq!(state.error, "drug name not recognized");
        assert!(!state.loading);
        assert!(state.response.is_some());
    }

    #[test]
    fn test_failure_without_detail_uses_fallback() {
        let mut state = AdvisorState {
            query: "metformin".to_string(),
            ..Default::default()
        };
        state.begin_general_query().unwrap();
        state.settle(Err(ApiError::Network("connection refused".to_string())));
        assert_eq!(state.error, FALLBACK_ERROR);
    }

    #[test]
    fn test_new_submit_clears_error() {
        let mut state = AdvisorState {
            query: "aspirin".to_string(),
            error: FALLBACK_ERROR.to_string(),
            ..Default::default()
        };
        state.begin_general_query().unwrap();
        assert!(!state.has_error());
    }

    #[test]
    fn test_switch_tab_clears_response_and_error() {
        let mut state = AdvisorState {
            query: "metformin".to_string(),
            error: "drug name not recognized".to_string(),
            response: Some(metformin().into()),
            ..Default::default()
        };

        state.switch_tab(Tab::Interaction);
        assert_eq!(state.tab, Tab::Interaction);
        assert!(state.response.is_none());
        assert!(!state.has_error());
        // inputs survive a tab switch
        assert_eq!(state.query, "metformin");

        state.switch_tab(Tab::General);
        assert_eq!(state.tab, Tab::General);
        assert!(state.response.is_none());
    }

    #[test]
    fn test_late_response_overwrites_after_tab_switch() {
        let mut state = AdvisorState {
            query: "metformin".to_string(),
            ..Default::default()
        };
        state.begin_general_query().unwrap();
        state.switch_tab(Tab::Interaction);

        state.settle(Ok(metformin().into()));
        assert_eq!(state.tab, Tab::Interaction);
        assert!(matches!(state.response, Some(AdvisorResponse::General(_))));
    }
}
