//! Closed status enums for appointments, rooms and admissions.
//!
//! Each status is stored as its display string (`"Scheduled"`, `"Occupied"`, ...).
//! Parsing is exact: any other stored string is rejected.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown {kind} status '{value}' (expected one of: {expected})")]
pub struct StatusParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Stored representation.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = StatusParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|status| status.as_str() == s)
                    .ok_or_else(|| StatusParseError {
                        kind: $kind,
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|status| status.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

status_enum! {
    /// Lifecycle of an appointment.
    AppointmentStatus, "appointment" {
        #[default]
        Scheduled => "Scheduled",
        Completed => "Completed",
        Cancelled => "Cancelled",
    }
}

status_enum! {
    /// Whether a room can take a new admission.
    RoomStatus, "room" {
        #[default]
        Available => "Available",
        Occupied => "Occupied",
    }
}

status_enum! {
    /// Lifecycle of an admission.
    AdmissionStatus, "admission" {
        #[default]
        Admitted => "Admitted",
        Discharged => "Discharged",
    }
}

impl AppointmentStatus {
    /// Only scheduled appointments move, and only to a terminal state.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (AppointmentStatus::Scheduled, AppointmentStatus::Completed)
                | (AppointmentStatus::Scheduled, AppointmentStatus::Cancelled)
        )
    }

    /// Whether the appointment still holds its doctor's time slot.
    pub fn occupies_slot(&self) -> bool {
        !matches!(self, AppointmentStatus::Cancelled)
    }
}

impl AdmissionStatus {
    pub fn can_transition_to(&self, next: AdmissionStatus) -> bool {
        matches!(
            (self, next),
            (AdmissionStatus::Admitted, AdmissionStatus::Discharged)
        )
    }
}
