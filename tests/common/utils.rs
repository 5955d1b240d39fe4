// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::cell::RefCell;

use pfam_msa_freq::{
    config::ConnectorConfig,
    connector::Connector,
    errors::ConnectorError,
    fetch::AlignmentSource,
    fields::FieldValue,
    protocol::DataResponse,
};

// In-memory stand-in for the Pfam server; records every accession it is asked for.
pub struct StaticSource {
    text: String,
    pub requested: RefCell<Vec<String>>,
}

impl StaticSource {
    pub fn new(text: &str) -> Self {
        StaticSource {
            text: String::from(text),
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl AlignmentSource for StaticSource {
    fn fetch(&self, accession: &str) -> Result<String, ConnectorError> {
        self.requested.borrow_mut().push(String::from(accession));
        Ok(self.text.clone())
    }
}

// Simulates a server that is down.
pub struct UnreachableSource;

impl AlignmentSource for UnreachableSource {
    fn fetch(&self, _accession: &str) -> Result<String, ConnectorError> {
        Err(ConnectorError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        )))
    }
}

#[allow(dead_code)]
pub fn connector_for(text: &str) -> Connector<StaticSource> {
    Connector::new(ConnectorConfig::default(), StaticSource::new(text))
}

#[allow(dead_code)]
pub fn number(value: &FieldValue) -> usize {
    match value {
        FieldValue::Number(n) => *n,
        other => panic!("expected a number, got {:?}", other),
    }
}

#[allow(dead_code)]
pub fn text(value: &FieldValue) -> &str {
    match value {
        FieldValue::Text(s) => s.as_str(),
        other => panic!("expected text, got {:?}", other),
    }
}

// (position, residue, count) triples, assuming the response was requested with exactly those
// three fields in that order.
#[allow(dead_code)]
pub fn triples(resp: &DataResponse) -> Vec<(usize, String, usize)> {
    resp.rows
        .iter()
        .map(|row| {
            (
                number(&row.values[0]),
                String::from(text(&row.values[1])),
                number(&row.values[2]),
            )
        })
        .collect()
}
