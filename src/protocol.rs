// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

// Request and response records exchanged with the reporting host, in the host's JSON shapes.

use serde::{Deserialize, Serialize};

use crate::config::ConfigParams;
use crate::fields::{FieldDef, FieldRequest, FieldValue};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldName {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataRequest {
    #[serde(default)]
    pub config_params: Option<ConfigParams>,
    #[serde(default)]
    pub fields: Vec<FieldName>,
}

impl DataRequest {
    pub fn new<I, S>(accession: Option<&str>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        DataRequest {
            config_params: accession.map(ConfigParams::with_accession),
            fields: fields
                .into_iter()
                .map(|name| FieldName { name: name.into() })
                .collect(),
        }
    }

    pub fn field_request(&self) -> FieldRequest {
        FieldRequest::new(self.fields.iter().map(|f| f.name.as_str()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<FieldValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataResponse {
    pub schema: Vec<FieldDef>,
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaResponse {
    pub schema: Vec<FieldDef>,
}
