//! JSON reading and writing of service representations.

use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::core::{Contract, Service};
use crate::errors::{Result, VauntError};

/// Parses a service representation document.
pub fn parse_service(json: &str) -> Result<Service> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a JSON array of contracts.
pub fn parse_contracts(json: &str) -> Result<Vec<Contract>> {
    Ok(serde_json::from_str(json)?)
}

/// Reads a service representation file.
pub fn read_service(path: impl AsRef<Path>) -> Result<Service> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let service = parse_service(&text)?;
    debug!(path = %path.display(), service = %service.name, "Read service representation");
    Ok(service)
}

/// Serializes a service to pretty-printed JSON.
pub fn to_json_string(service: &Service) -> Result<String> {
    Ok(serde_json::to_string_pretty(service)?)
}

/// File name for a service; the name must be a single plain path component.
fn file_name(name: &str) -> Result<String> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(['/', '\\']) => {
            Ok(format!("{name}.json"))
        }
        _ => Err(VauntError::InvalidServiceName(name.to_string())),
    }
}

/// Writes `service` to `<dir>/<service name>.json`, creating `dir` when
/// needed, and returns the written path.
///
/// Names that are empty or contain path separators or `.`/`..` are
/// rejected before anything touches the filesystem.
pub fn write_service(service: &Service, dir: impl AsRef<Path>) -> Result<PathBuf> {
    let dir = dir.as_ref();
    let file_name = file_name(&service.name)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(file_name);
    fs::write(&path, to_json_string(service)?)?;
    debug!(path = %path.display(), service = %service.name, "Wrote service representation");
    Ok(path)
}
