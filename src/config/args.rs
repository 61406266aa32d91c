use crate::Error;

use serde_yaml::{Mapping, Value};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::debug;

const ENVELOPE_KEY: &str = "ANSIBLE_MODULE_ARGS";

/// Loads the module arguments from the file Ansible hands to binary modules,
/// or from stdin when no path is given.
pub fn read_args<P: AsRef<Path>>(path: Option<P>) -> Result<Mapping, Error> {
    let content = match path {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };
    parse_args(&content)
}

fn read_file<P: AsRef<Path>>(path: P) -> Result<String, Error> {
    debug!("Reading module arguments from {}", path.as_ref().display());
    fs::read_to_string(&path).map_err(|source| Error::Read {
        path: path.as_ref().to_string_lossy().into_owned(),
        source,
    })
}

fn read_stdin() -> Result<String, Error> {
    debug!("Reading module arguments from stdin");
    let mut content = String::new();
    io::stdin()
        .read_to_string(&mut content)
        .map_err(|source| Error::Read {
            path: "<stdin>".into(),
            source,
        })?;
    Ok(content)
}

fn parse_args(content: &str) -> Result<Mapping, Error> {
    // JSON is valid YAML, so both Ansible's payload and hand-written files parse here.
    let value: Value = serde_yaml::from_str(content)?;

    let mut args = match value {
        Value::Mapping(args) => args,
        Value::Null => Mapping::new(),
        _ => return Err(Error::NotMapping),
    };

    match args.remove(ENVELOPE_KEY) {
        Some(Value::Mapping(inner)) => Ok(inner),
        Some(_) => Err(Error::NotMapping),
        None => Ok(args),
    }
}
