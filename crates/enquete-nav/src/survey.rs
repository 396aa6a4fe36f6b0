//! The questionnaire application's route table
//!
//! One entry per screen of the survey SPA, plus the root redirect and the
//! catch-all not-found fallback. The table is built once at startup and
//! handed to the [`Dispatcher`](crate::Dispatcher).

use crate::error::Result;
use crate::route::StaticProps;
use crate::table::RouteTable;

/// Screens of the questionnaire SPA
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Questionnaires targeting the current user
    Targeted,
    /// Questionnaires the current user administers
    Administrates,
    /// The current user's past responses
    Responses,
    /// Browse all questionnaires
    Explorer,
    /// Detail page for one questionnaire
    QuestionnaireDetails,
    /// Aggregated results for one questionnaire
    Results,
    /// Compose a new response to a questionnaire
    EditResponse,
    /// Fallback for unknown paths
    NotFound,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Targeted => "Targeted",
            View::Administrates => "Administrates",
            View::Responses => "Responses",
            View::Explorer => "Explorer",
            View::QuestionnaireDetails => "QuestionnaireDetails",
            View::Results => "Results",
            View::EditResponse => "EditResponse",
            View::NotFound => "NotFound",
        }
    }
}

/// Build the application route table
///
/// The `traqId` prop on `/targeted` is declared but always empty: the value
/// it was meant to carry is not known before any view exists, so the entry
/// pins it to the empty string rather than a stale identifier.
pub fn route_table() -> Result<RouteTable<View>> {
    RouteTable::builder()
        .redirect("/", "/targeted")
        .route_with_props(
            "Targeted",
            "/targeted",
            View::Targeted,
            StaticProps::new().with("traqId", ""),
        )
        .route("Administrates", "/administrates", View::Administrates)
        .route("Responses", "/responses", View::Responses)
        .route("Explorer", "/explorer", View::Explorer)
        .route(
            "QuestionnaireDetails",
            "/questionnaires/:id",
            View::QuestionnaireDetails,
        )
        .route("Results", "/results/:id", View::Results)
        .route(
            "EditResponse",
            "/questionnaires/:id/new-response",
            View::EditResponse,
        )
        .fallback("NotFound", View::NotFound)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_root_redirects_to_targeted() {
        let table = route_table().unwrap();
        let root = table.resolve("/");
        assert_eq!(root.view, View::Targeted);
        assert_eq!(root, table.resolve("/targeted"));
    }

    #[test]
    fn test_static_screens() {
        let table = route_table().unwrap();
        assert_eq!(table.resolve("/administrates").view, View::Administrates);
        assert_eq!(table.resolve("/responses").view, View::Responses);
        assert_eq!(table.resolve("/explorer").view, View::Explorer);
    }

    #[test]
    fn test_questionnaire_details() {
        let table = route_table().unwrap();
        let r = table.resolve("/questionnaires/42");
        assert_eq!(r.view, View::QuestionnaireDetails);
        assert_eq!(r.params.get("id"), Some("42"));
    }

    #[test]
    fn test_results() {
        let table = route_table().unwrap();
        let r = table.resolve("/results/7");
        assert_eq!(r.view, View::Results);
        assert_eq!(r.params.get("id"), Some("7"));
    }

    #[test]
    fn test_new_response_not_shadowed() {
        let table = route_table().unwrap();
        let r = table.resolve("/questionnaires/42/new-response");
        assert_eq!(r.view, View::EditResponse);
        assert_eq!(r.params.get("id"), Some("42"));
    }

    #[test]
    fn test_unknown_paths_fall_back() {
        let table = route_table().unwrap();
        assert_eq!(table.resolve("/nonexistent/path").view, View::NotFound);
        assert_eq!(table.resolve("").view, View::Targeted); // empty path is the root
        assert_eq!(table.resolve("/questionnaires").view, View::NotFound);
    }

    #[test]
    fn test_resolution_is_total() {
        let table = route_table().unwrap();
        for path in [
            "/", "/targeted", "/targeted/", "/explorer", "/results/0",
            "/questionnaires/abc", "/questionnaires/abc/new-response",
            "/deep/unknown/path", "///", "no-leading-slash",
        ] {
            // Must not panic, must yield exactly one view
            let _ = table.resolve(path);
        }
    }

    #[test]
    fn test_targeted_prop_is_empty_string() {
        let table = route_table().unwrap();
        let r = table.resolve("/targeted");
        assert_eq!(r.props.get("traqId"), Some(&json!("")));
    }

    #[test]
    fn test_route_names_mirror_views() {
        let table = route_table().unwrap();
        for path in [
            "/targeted",
            "/administrates",
            "/responses",
            "/explorer",
            "/questionnaires/1",
            "/results/1",
            "/questionnaires/1/new-response",
            "/no/such/page",
        ] {
            let r = table.resolve(path);
            assert_eq!(r.name, r.view.as_str());
        }
    }

    #[test]
    fn test_route_names_are_distinct() {
        let table = route_table().unwrap();
        let names: Vec<&str> = table.entries().filter_map(|e| e.name()).collect();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len());
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn test_reverse_routing() {
        let table = route_table().unwrap();
        assert_eq!(
            table.path_for("EditResponse", &[("id", "42")]).unwrap(),
            "/questionnaires/42/new-response"
        );
        assert_eq!(table.path_for("Explorer", &[]).unwrap(), "/explorer");
    }
}
