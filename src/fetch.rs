// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use log::{debug, info};

use crate::config::ConnectorConfig;
use crate::errors::ConnectorError;

const ALIGNMENT_QUERY: &str =
    "format=fasta&alnType=seed&order=t&case=u&gaps=dashes&download=0";

/// Anything that can hand over the raw FastA text of a family's seed alignment.
pub trait AlignmentSource {
    fn fetch(&self, accession: &str) -> Result<String, ConnectorError>;
}

// The accession is pasted in as-is: no escaping, no validation (bad accessions are the server's
// problem).
pub fn alignment_url(base_url: &str, accession: &str) -> String {
    format!(
        "{}/family/{}/alignment/seed/format?{}",
        base_url.trim_end_matches('/'),
        accession,
        ALIGNMENT_QUERY
    )
}

/// Fetches seed alignments over HTTP. One GET per call, no retries, no caching.
pub struct PfamClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl PfamClient {
    pub fn new(config: &ConnectorConfig) -> Result<Self, ConnectorError> {
        let mut builder = reqwest::blocking::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(PfamClient {
            base_url: config.base_url.clone(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AlignmentSource for PfamClient {
    fn fetch(&self, accession: &str) -> Result<String, ConnectorError> {
        let url = alignment_url(&self.base_url, accession);
        info!("GET {}", url);
        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ConnectorError::Status {
                url,
                status: status.as_u16(),
            });
        }
        let text = response.text()?;
        debug!("Received {} bytes", text.len());
        Ok(text)
    }
}

/// Reads the alignment from a local FastA file instead; the accession is ignored.
pub struct FastaFileSource {
    path: PathBuf,
}

impl FastaFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FastaFileSource {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl AlignmentSource for FastaFileSource {
    fn fetch(&self, accession: &str) -> Result<String, ConnectorError> {
        info!(
            "Reading {} from {} (no network)",
            accession,
            self.path.display()
        );
        Ok(std::fs::read_to_string(&self.path)?)
    }
}
