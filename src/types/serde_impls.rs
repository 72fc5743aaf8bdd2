//! Serde support for outcomes and faults.
//!
//! An outcome serializes as a tagged structure:
//!
//! ```json
//! { "status": "success", "value": 42 }
//! { "status": "failure", "fault": { "message": "boom", "captured": false } }
//! ```
//!
//! Faults carry an opaque error object, so deserialization reconstitutes a
//! message-only fault with the original rendering and captured marker; the
//! concrete error type does not survive the round trip.

use alloc::string::String;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::fault::Fault;
use crate::types::outcome::{Outcome, State};

#[derive(Serialize, Deserialize)]
struct FaultRepr {
    message: String,
    captured: bool,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum OutcomeRepr<T> {
    Success { value: T },
    Failure { fault: FaultRepr },
}

impl Serialize for Fault {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FaultRepr { message: self.message(), captured: self.captured() }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Fault {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = FaultRepr::deserialize(deserializer)?;
        Ok(Fault::from_text(repr.message, repr.captured))
    }
}

impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.state {
            State::Success(value) => OutcomeRepr::Success { value }.serialize(serializer),
            State::Failure(fault) => OutcomeRepr::<&T>::Failure {
                fault: FaultRepr { message: fault.message(), captured: fault.captured() },
            }
            .serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match OutcomeRepr::<T>::deserialize(deserializer)? {
            OutcomeRepr::Success { value } => Outcome::from_value(value),
            OutcomeRepr::Failure { fault } => {
                Outcome::from_fault(Fault::from_text(fault.message, fault.captured))
            },
        })
    }
}
