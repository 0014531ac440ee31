/// Capability probe for strong biometric authentication.
///
/// The splash flow only asks whether a prompt is worth showing; invoking
/// the actual prompt belongs to the platform layer that owns the screen.
pub trait BiometricGate: Send + Sync {
    fn strong_biometrics_available(&self) -> bool;
}

/// Gate for platforms without biometric hardware.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedBiometricGate;

impl BiometricGate for UnsupportedBiometricGate {
    fn strong_biometrics_available(&self) -> bool {
        false
    }
}
