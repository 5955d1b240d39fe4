// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{
    fs::File,
    io::{self, stdout, BufReader, Read, Write},
};

use clap::{Parser, Subcommand};
use log::{debug, info};
use serde::Serialize;

use crate::{
    config::ConnectorConfig,
    connector::Connector,
    errors::ConnectorError,
    fetch::{FastaFileSource, PfamClient},
    protocol::DataRequest,
};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pretty: bool,

    /// Pfam host (overrides the config file)
    #[arg(long = "base-url", global = true)]
    base_url: Option<String>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the config screen description
    Config,

    /// Print the field schema
    Schema,

    /// Report whether the current user is an admin (never)
    IsAdmin,

    /// Fetch an alignment and print its residue frequency table
    Data {
        /// Data request (JSON); '-' reads stdin
        #[arg(short, long, conflicts_with_all = ["accession", "fields"])]
        request: Option<String>,

        /// Family accession (defaults to the configured one)
        #[arg(short, long)]
        accession: Option<String>,

        /// Requested fields, in order
        #[arg(short, long, value_delimiter = ',', default_value = "position,residue,count")]
        fields: Vec<String>,

        /// Read the alignment from a local FastA file instead of fetching it
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn read_request(path: &str) -> Result<DataRequest, ConnectorError> {
    let mut text = String::new();
    if path == "-" {
        io::stdin().read_to_string(&mut text)?;
    } else {
        BufReader::new(File::open(path)?).read_to_string(&mut text)?;
    }
    Ok(serde_json::from_str(&text)?)
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), ConnectorError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut out = stdout().lock();
    writeln!(out, "{}", json)?;
    Ok(())
}

pub fn run() -> Result<(), ConnectorError> {
    env_logger::init();
    info!("Starting log");

    let cli = Cli::parse();

    let mut config = ConnectorConfig::load();
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    debug!("Config: {:?}", config);

    match cli.command {
        Command::Config => print_json(&Connector::new(config, ()).get_config(), cli.pretty),
        Command::Schema => print_json(&Connector::new(config, ()).get_schema(), cli.pretty),
        Command::IsAdmin => print_json(&Connector::new(config, ()).is_admin_user(), cli.pretty),
        Command::Data {
            request,
            accession,
            fields,
            input,
        } => {
            let request = match request {
                Some(path) => read_request(&path)?,
                None => DataRequest::new(accession.as_deref(), fields),
            };
            let response = match input {
                Some(path) => {
                    Connector::new(config, FastaFileSource::new(path)).get_data(&request)?
                }
                None => {
                    let client = PfamClient::new(&config)?;
                    Connector::new(config, client).get_data(&request)?
                }
            };
            print_json(&response, cli.pretty)
        }
    }
}
