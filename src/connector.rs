// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use itertools::Itertools;
use log::{debug, info};

use crate::{
    config::{ConfigSchema, ConnectorConfig},
    errors::{ConnectorError, UserError},
    fetch::AlignmentSource,
    fields::{project, FieldRegistry, FieldRequest},
    frequency::tabulate,
    protocol::{DataRequest, DataResponse, Row, SchemaResponse},
    seq::fasta::parse_fasta,
};

/// Turns raw FastA text into output rows restricted to the requested fields.
pub fn format_rows(text: &str, request: &FieldRequest) -> Vec<Row> {
    let records = parse_fasta(text);
    debug!("Parsed {} records", records.len());
    tabulate(&records)
        .iter()
        .map(|row| Row {
            values: project(row, request),
        })
        .collect()
}

/// The four entry points the reporting host calls. Holds no mutable state, so one value can
/// serve any number of requests.
///
/// Only `get_data` needs a source; `Connector<()>` answers the other three.
pub struct Connector<S> {
    config: ConnectorConfig,
    registry: FieldRegistry,
    source: S,
}

impl<S> Connector<S> {
    pub fn new(config: ConnectorConfig, source: S) -> Self {
        Connector {
            config,
            registry: FieldRegistry::default(),
            source,
        }
    }

    pub fn config(&self) -> &ConnectorConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn get_config(&self) -> ConfigSchema {
        ConfigSchema::new(&self.config.default_accession)
    }

    pub fn get_schema(&self) -> SchemaResponse {
        SchemaResponse {
            schema: self.registry.all(),
        }
    }

    pub fn is_admin_user(&self) -> bool {
        false
    }
}

impl<S: AlignmentSource> Connector<S> {
    /// Fetches, tabulates and projects. Any failure along the way comes back as the one generic
    /// `UserError`; rows are never partially returned.
    pub fn get_data(&self, request: &DataRequest) -> Result<DataResponse, UserError> {
        self.try_get_data(request).map_err(|e| {
            let err = UserError::from(e);
            debug!("{}", err.debug_text);
            err
        })
    }

    fn try_get_data(&self, request: &DataRequest) -> Result<DataResponse, ConnectorError> {
        let accession = self.config.validate(request.config_params.as_ref());

        let fields = request.field_request().known();
        let schema = self.registry.for_request(&fields);
        info!(
            "Data request for {} [{}]",
            accession,
            schema.iter().map(|f| f.name.as_str()).join(",")
        );

        let text = self.source.fetch(&accession)?;
        let rows = format_rows(&text, &fields);
        info!("{} rows", rows.len());

        Ok(DataResponse { schema, rows })
    }
}
