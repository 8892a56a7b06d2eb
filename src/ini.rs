use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::AppResult;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFile {
    sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: String,
    options: BTreeMap<String, String>,
}

impl ConfigFile {
    pub fn parse(text: &str) -> Self {
        let mut sections: Vec<Section> = Vec::new();
        let mut current: Option<usize> = None;

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if let Some(name) = section_header(line) {
                current = Some(open_section(&mut sections, name));
                continue;
            }

            let Some((key, value)) = option_pair(line) else {
                continue;
            };

            let Some(index) = current else {
                continue;
            };
            sections[index].options.insert(key, value);
        }

        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl Section {
    fn new(name: String) -> Self {
        Self {
            name,
            options: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }
}

pub fn load(path: PathBuf) -> AppResult<ConfigFile> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, treating as empty");
        return Ok(ConfigFile::default());
    }

    let raw = fs::read_to_string(&path)?;
    let config = ConfigFile::parse(&raw);
    debug!(path = %path.display(), sections = config.len(), "loaded config file");
    Ok(config)
}

fn section_header(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let name = rest[..rest.find(']')?].trim();
    if name.is_empty() {
        return None;
    }

    Some(name)
}

fn open_section(sections: &mut Vec<Section>, name: &str) -> usize {
    if let Some(index) = sections.iter().position(|section| section.name == name) {
        return index;
    }

    sections.push(Section::new(name.to_string()));
    sections.len() - 1
}

fn option_pair(line: &str) -> Option<(String, String)> {
    let delimiter = line.find(['=', ':'])?;
    let key = line[..delimiter].trim().to_ascii_lowercase();
    if key.is_empty() {
        return None;
    }

    let value = strip_inline_comment(&line[delimiter + 1..]).trim();
    Some((key, value.to_string()))
}

fn strip_inline_comment(raw: &str) -> &str {
    let Some(pos) = raw.find(';') else {
        return raw;
    };

    let preceded_by_space = raw[..pos]
        .chars()
        .next_back()
        .is_some_and(char::is_whitespace);
    if preceded_by_space { &raw[..pos] } else { raw }
}
