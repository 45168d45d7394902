use vadgor_core::PhraseAnalysis;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A new value of the phrase being edited
    TextInput(String),
    ShowAnalysis(PhraseAnalysis),
    /// Input source reached EOF
    InputClosed,
}
