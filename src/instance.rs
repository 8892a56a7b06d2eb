use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::ini::{ConfigFile, Section};

pub const INSTANCE_SECTION_PREFIX: &str = "instance-";
pub const DEFAULT_INSTANCE_SECTION: &str = "default-instance";
pub const DEFAULT_INSTANCE_KEY: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstanceProfile {
    options: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InstanceTable {
    instances: BTreeMap<String, InstanceProfile>,
}

impl InstanceProfile {
    fn from_section(section: &Section) -> Self {
        Self {
            options: section.options().clone(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn hostname(&self) -> Option<&str> {
        self.get("hostname")
    }

    pub fn username(&self) -> Option<&str> {
        self.get("username")
    }

    pub fn password(&self) -> Option<&str> {
        self.get("password")
    }

    pub fn jira_protocol(&self) -> Option<&str> {
        self.get("jira_protocol")
    }

    pub fn jira_port(&self) -> Option<&str> {
        self.get("jira_port")
    }

    pub fn soap_protocol(&self) -> Option<&str> {
        self.get("soap_protocol")
    }

    pub fn soap_port(&self) -> Option<&str> {
        self.get("soap_port")
    }
}

impl InstanceTable {
    pub fn get(&self, name: &str) -> Option<&InstanceProfile> {
        self.instances.get(name)
    }

    pub fn resolve(&self, name: Option<&str>) -> AppResult<&InstanceProfile> {
        let key = resolve_name(name);
        self.instances
            .get(key)
            .ok_or_else(|| AppError::MissingInstance(key.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.instances.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.instances.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InstanceProfile)> {
        self.instances
            .iter()
            .map(|(name, profile)| (name.as_str(), profile))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

pub fn list_instances(config: &ConfigFile) -> AppResult<InstanceTable> {
    let mut instances = BTreeMap::new();
    for section in config.sections() {
        let Some(name) = section.name().strip_prefix(INSTANCE_SECTION_PREFIX) else {
            continue;
        };

        instances.insert(name.to_string(), InstanceProfile::from_section(section));
    }

    if let Some(default_name) = configured_default(config) {
        let Some(profile) = instances.get(default_name).cloned() else {
            return Err(AppError::MissingInstance(default_name.to_string()));
        };

        // The alias is an equal-value copy of the profile it names.
        instances.insert(DEFAULT_INSTANCE_KEY.to_string(), profile);
    }

    debug!(instances = instances.len(), "built instance table");
    Ok(InstanceTable { instances })
}

pub fn get_instance(config: &ConfigFile, name: Option<&str>) -> AppResult<InstanceProfile> {
    let table = list_instances(config)?;
    Ok(table.resolve(name)?.clone())
}

pub fn resolve_name(name: Option<&str>) -> &str {
    match name {
        Some(requested) if !requested.trim().is_empty() => requested,
        _ => DEFAULT_INSTANCE_KEY,
    }
}

fn configured_default(config: &ConfigFile) -> Option<&str> {
    let name = config.get(DEFAULT_INSTANCE_SECTION, "name")?;
    if name.is_empty() {
        return None;
    }

    Some(name)
}
