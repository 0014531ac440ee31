use std::sync::Arc;

use headliner_core::{Route, SplashEffect, SplashEvent};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::biometric::BiometricGate;

/// Hold on the splash screen before deciding where to go.
const SPLASH_DELAY: Duration = Duration::from_millis(2000);

const EFFECT_BUFFER: usize = 4;

/// Splash flow: wait, probe biometric capability, then either request the
/// prompt or navigate straight to the list. Effects only, no state.
///
/// Must be constructed inside a tokio runtime.
pub struct SplashViewModel {
    effect_tx: mpsc::Sender<SplashEffect>,
    biometrics: Arc<dyn BiometricGate>,
    scope: CancellationToken,
}

impl SplashViewModel {
    pub fn new(biometrics: Arc<dyn BiometricGate>) -> (Self, mpsc::Receiver<SplashEffect>) {
        let (effect_tx, effect_rx) = mpsc::channel(EFFECT_BUFFER);
        (
            Self {
                effect_tx,
                biometrics,
                scope: CancellationToken::new(),
            },
            effect_rx,
        )
    }

    pub fn handle(&self, event: SplashEvent) {
        match event {
            SplashEvent::Started => self.on_started(),
            SplashEvent::BiometricResult { success } => self.on_biometric_result(success),
        }
    }

    fn on_started(&self) {
        let effect_tx = self.effect_tx.clone();
        let biometrics = self.biometrics.clone();
        let scope = self.scope.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = scope.cancelled() => return,
                _ = tokio::time::sleep(SPLASH_DELAY) => {}
            }
            let effect = if biometrics.strong_biometrics_available() {
                SplashEffect::ShowBiometricPrompt
            } else {
                SplashEffect::NavigateTo(Route::HeadlineList)
            };
            let _ = effect_tx.send(effect).await;
        });
    }

    fn on_biometric_result(&self, success: bool) {
        // On failure the prompt's owner terminates the flow; nothing more
        // to emit here.
        if !success {
            return;
        }
        let _ = self
            .effect_tx
            .try_send(SplashEffect::NavigateTo(Route::HeadlineList));
    }
}

impl Drop for SplashViewModel {
    fn drop(&mut self) {
        self.scope.cancel();
    }
}
