use serde::Serialize;

/// Guided breathing cycle: in, hold, out, repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathPhase {
    In,
    Hold,
    Out,
}

impl BreathPhase {
    pub fn next(self) -> Self {
        match self {
            BreathPhase::In => BreathPhase::Hold,
            BreathPhase::Hold => BreathPhase::Out,
            BreathPhase::Out => BreathPhase::In,
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            BreathPhase::In => "breatheIn",
            BreathPhase::Hold => "hold",
            BreathPhase::Out => "breatheOut",
        }
    }
}
