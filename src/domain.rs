use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// What a delivery note confirms.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
    ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NoteKind {
    Order,
    Supply,
    Dispatch,
    Return,
}

/// Whether a note moves goods between own units or to/from a contractor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
    ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Handover {
    Internal,
    External,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
    ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ContractorKind {
    Client,
    Supplier,
}

/// ABC classification of a product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
    ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ProductGroup {
    A,
    B,
    C,
}

/// Lifecycle state of an invoice or advance invoice.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
    ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DocumentState {
    InProgress,
    Executed,
    Delayed,
    Cancelled,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
    ToSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Transfer,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn wire_representation_is_snake_case() {
        assert_eq!(NoteKind::Dispatch.to_string(), "dispatch");
        assert_eq!(Handover::External.to_string(), "external");
        assert_eq!(DocumentState::InProgress.to_string(), "in_progress");
        assert_eq!(
            DocumentState::from_str("cancelled").unwrap(),
            DocumentState::Cancelled
        );
        assert!(DocumentState::from_str("unknown").is_err());
    }

    #[test]
    fn serde_round_trip_matches_strum() {
        let json = serde_json::to_string(&NoteKind::Return).unwrap();
        assert_eq!(json, "\"return\"");
        let back: NoteKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, NoteKind::Return);
    }
}
