use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CompletionViewModel {
    pub partial: String,
    pub suggestions: Vec<String>,
}
