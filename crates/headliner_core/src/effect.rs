use crate::Route;

/// One-shot outputs of the headline list view-model, consumed exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlinesEffect {
    NavigateTo(Route),
}

/// One-shot outputs of the splash view-model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplashEffect {
    NavigateTo(Route),
    ShowBiometricPrompt,
}
