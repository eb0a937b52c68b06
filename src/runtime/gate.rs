/// Answer from the external authorization step. Only a permission crosses
/// this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Proceed,
    Deny,
}

impl From<bool> for GateDecision {
    fn from(allowed: bool) -> Self {
        if allowed {
            GateDecision::Proceed
        } else {
            GateDecision::Deny
        }
    }
}

/// Consulted once, before the workspace is constructed.
pub trait EntryGate {
    fn authorize(&mut self) -> GateDecision;
}

impl<F> EntryGate for F
where
    F: FnMut() -> GateDecision,
{
    fn authorize(&mut self) -> GateDecision {
        self()
    }
}

/// Lets everyone in; for local use and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenGate;

impl EntryGate for OpenGate {
    fn authorize(&mut self) -> GateDecision {
        GateDecision::Proceed
    }
}
