use skim_extract::AnalysisManager;

pub struct AppState {
    pub manager: AnalysisManager,
}
