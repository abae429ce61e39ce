#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Editing the sentence
    Input,
    /// Moving through the tags of the analysis
    Browse,
    Help,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appmode_enum_exists() {
        let _mode = AppMode::Input;
        let _mode = AppMode::Browse;
        let _mode = AppMode::Help;
        let _mode = AppMode::Quit;
    }
}
