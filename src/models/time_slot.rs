use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum TimeSlot {
    Morning,
    Evening,
}

impl TimeSlot {
    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::Morning => "Morning",
            TimeSlot::Evening => "Evening",
        }
    }

    /// Inverse of [`TimeSlot::label`]. Only the exact label is accepted, so
    /// every slot has a single stored spelling.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Morning" => Some(TimeSlot::Morning),
            "Evening" => Some(TimeSlot::Evening),
            _ => None,
        }
    }
}
