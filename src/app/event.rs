/// Application events
#[derive(Debug, PartialEq, Clone)]
pub enum AppEvent {
    /// Analyze the sentence
    Submit(String),
    /// Send the reference link of the selected tag to the link target
    CopyLink,
    Quit,
    Help,
    Invalid(String),
    None,
}
