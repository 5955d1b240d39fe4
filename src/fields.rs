// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldId {
    Position,
    Residue,
    Count,
}

impl FieldId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Position => "position",
            FieldId::Residue => "residue",
            FieldId::Count => "count",
        }
    }

    pub fn from_name(name: &str) -> Option<FieldId> {
        match name {
            "position" => Some(FieldId::Position),
            "residue" => Some(FieldId::Residue),
            "count" => Some(FieldId::Count),
            _ => None,
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// A field as named by the host. Unknown names are kept until resolution; `project()` gives them a
// blank value if they get that far.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestedField {
    Known(FieldId),
    Unknown(String),
}

impl From<&str> for RequestedField {
    fn from(name: &str) -> Self {
        match FieldId::from_name(name) {
            Some(id) => RequestedField::Known(id),
            None => RequestedField::Unknown(String::from(name)),
        }
    }
}

/// Ordered selection of the columns the host wants back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldRequest {
    fields: Vec<RequestedField>,
}

impl FieldRequest {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        FieldRequest {
            fields: names
                .into_iter()
                .map(|n| RequestedField::from(n.as_ref()))
                .collect(),
        }
    }

    pub fn fields(&self) -> &[RequestedField] {
        &self.fields
    }

    /// The same request without the names the connector doesn't know, which are silently
    /// left out of both schema and rows.
    pub fn known(&self) -> FieldRequest {
        FieldRequest {
            fields: self
                .fields
                .iter()
                .filter(|field| match field {
                    RequestedField::Known(_) => true,
                    RequestedField::Unknown(name) => {
                        debug!("Ignoring unknown field '{}'", name);
                        false
                    }
                })
                .cloned()
                .collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FieldType {
    Number,
    #[serde(rename = "STRING")]
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConceptType {
    Dimension,
    Metric,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AggregationType {
    Sum,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Semantics {
    pub concept_type: ConceptType,
}

/// A field definition as the host expects it in a schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub name: String,
    pub label: String,
    pub data_type: FieldType,
    pub semantics: Semantics,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub default_aggregation_type: Option<AggregationType>,
}

impl FieldDef {
    fn dimension(id: FieldId, label: &str, data_type: FieldType) -> Self {
        FieldDef {
            name: String::from(id.as_str()),
            label: String::from(label),
            data_type,
            semantics: Semantics {
                concept_type: ConceptType::Dimension,
            },
            default_aggregation_type: None,
        }
    }

    fn metric(id: FieldId, label: &str, data_type: FieldType, agg: AggregationType) -> Self {
        FieldDef {
            name: String::from(id.as_str()),
            label: String::from(label),
            data_type,
            semantics: Semantics {
                concept_type: ConceptType::Metric,
            },
            default_aggregation_type: Some(agg),
        }
    }
}

/// The fixed set of fields this connector knows about.
#[derive(Clone, Debug)]
pub struct FieldRegistry {
    defs: Vec<(FieldId, FieldDef)>,
}

impl Default for FieldRegistry {
    fn default() -> Self {
        FieldRegistry {
            defs: vec![
                (
                    FieldId::Position,
                    FieldDef::dimension(FieldId::Position, "Position", FieldType::Number),
                ),
                (
                    FieldId::Residue,
                    FieldDef::dimension(FieldId::Residue, "Residue", FieldType::Text),
                ),
                (
                    FieldId::Count,
                    FieldDef::metric(
                        FieldId::Count,
                        "Count",
                        FieldType::Number,
                        AggregationType::Sum,
                    ),
                ),
            ],
        }
    }
}

impl FieldRegistry {
    pub fn all(&self) -> Vec<FieldDef> {
        self.defs.iter().map(|(_, def)| def.clone()).collect()
    }

    pub fn get(&self, id: FieldId) -> Option<&FieldDef> {
        self.defs
            .iter()
            .find(|(fid, _)| *fid == id)
            .map(|(_, def)| def)
    }

    /// Definitions for the requested fields, in request order. Unknown names have no
    /// definition and are skipped.
    pub fn for_request(&self, request: &FieldRequest) -> Vec<FieldDef> {
        request
            .fields()
            .iter()
            .filter_map(|field| match field {
                RequestedField::Known(id) => self.get(*id).cloned(),
                RequestedField::Unknown(_) => None,
            })
            .collect()
    }
}

/// One cell of an output row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(usize),
    Text(String),
}

impl FieldValue {
    pub fn blank() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Picks the requested columns of `row`, in request order.
pub fn project(row: &FrequencyRow, request: &FieldRequest) -> Vec<FieldValue> {
    request
        .fields()
        .iter()
        .map(|field| match field {
            RequestedField::Known(FieldId::Position) => FieldValue::Number(row.position),
            RequestedField::Known(FieldId::Residue) => FieldValue::Text(row.residue.to_string()),
            RequestedField::Known(FieldId::Count) => FieldValue::Number(row.count),
            RequestedField::Unknown(_) => FieldValue::blank(),
        })
        .collect()
}
