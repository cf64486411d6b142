use serde::{Deserialize, Serialize};

/// Kind of activity a step asks of the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepType {
    Breathing,
    Memory,
    Recall,
    Reflection,
}

impl StepType {
    /// Whether the step embeds a digit drill.
    pub fn has_drill(self) -> bool {
        matches!(self, StepType::Memory | StepType::Recall)
    }

    /// Translation key for the step title.
    pub fn label_key(self) -> &'static str {
        match self {
            StepType::Breathing => "calmBreathing",
            StepType::Memory => "workingMemory",
            StepType::Recall => "activeRecall",
            StepType::Reflection => "reflection",
        }
    }

    /// Translation key for the one-line step description.
    pub fn description_key(self) -> &'static str {
        match self {
            StepType::Breathing => "calmBreathingDesc",
            StepType::Memory => "workingMemoryDesc",
            StepType::Recall => "activeRecallDesc",
            StepType::Reflection => "reflectionDesc",
        }
    }
}

/// One timed activity within a day's session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(rename = "type")]
    pub step_type: StepType,
    pub duration_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<u8>,
}

impl Step {
    pub const fn new(step_type: StepType, duration_minutes: u32) -> Self {
        Self {
            step_type,
            duration_minutes,
            difficulty: None,
        }
    }

    pub const fn with_difficulty(step_type: StepType, duration_minutes: u32, difficulty: u8) -> Self {
        Self {
            step_type,
            duration_minutes,
            difficulty: Some(difficulty),
        }
    }

    /// Effective drill difficulty; absent means 1.
    pub fn difficulty(&self) -> u8 {
        self.difficulty.unwrap_or(1).max(1)
    }

    /// Get step duration in seconds.
    ///
    /// Uses saturating arithmetic to prevent overflow with large values.
    pub fn duration_secs(&self) -> u64 {
        u64::from(self.duration_minutes).saturating_mul(60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_defaults_to_one() {
        let step = Step::new(StepType::Memory, 5);
        assert_eq!(step.difficulty(), 1);
        let step = Step::with_difficulty(StepType::Recall, 5, 3);
        assert_eq!(step.difficulty(), 3);
    }

    #[test]
    fn duration_in_seconds() {
        assert_eq!(Step::new(StepType::Breathing, 3).duration_secs(), 180);
    }

    #[test]
    fn only_memory_and_recall_drill() {
        assert!(StepType::Memory.has_drill());
        assert!(StepType::Recall.has_drill());
        assert!(!StepType::Breathing.has_drill());
        assert!(!StepType::Reflection.has_drill());
    }

    #[test]
    fn serializes_with_program_field_names() {
        let json = serde_json::to_value(Step::with_difficulty(StepType::Memory, 5, 2)).unwrap();
        assert_eq!(json["type"], "memory");
        assert_eq!(json["durationMinutes"], 5);
        assert_eq!(json["difficulty"], 2);
    }
}
