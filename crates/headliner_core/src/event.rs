use crate::Headline;

/// Inputs accepted by the headline list view-model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlinesEvent {
    /// Screen became visible; fetches unless a list is already cached.
    Started,
    /// User edited the search box (raw text, debounced downstream).
    SearchQueryChanged(String),
    /// User tapped a headline card.
    CardClicked(Headline),
}

/// Inputs accepted by the splash view-model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashEvent {
    Started,
    /// Outcome of the platform biometric prompt.
    BiometricResult { success: bool },
}
