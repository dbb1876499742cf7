use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

/// Repository configuration: named sections, each mapping keys to string
/// values.
///
/// The format is a simple INI dialect. Blank lines and lines starting
/// with `#` or `;` are ignored; `[section]` opens a section; `key=value`
/// lines are trimmed and assigned into the current section, with later
/// assignments overwriting earlier ones. There is no escaping, no nested
/// sections, and no type coercion; callers interpret the string values.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Config {
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl Config {
    /// Parse configuration text. Lines that fit no rule are skipped, so
    /// parsing is total.
    pub fn parse(text: &str) -> Config {
        let mut config = Config::default();
        let mut section = String::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                section = line[1..line.len() - 1].trim().to_string();
                config.sections.entry(section.clone()).or_default();
                continue;
            }

            if let Some(eq) = line.find('=') {
                let key = line[..eq].trim().to_string();
                let value = line[eq + 1..].trim().to_string();
                config
                    .sections
                    .entry(section.clone())
                    .or_default()
                    .insert(key, value);
            }
        }

        config
    }

    /// The default configuration written by repository creation.
    pub fn initial() -> Config {
        let mut config = Config::default();
        config.set("core", "repoformatversion", "0");
        config.set("core", "bare", "false");
        config
    }

    /// Look up a value.
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|kv| kv.get(key))
            .map(String::as_str)
    }

    /// Assign a value, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }
}

impl Display for Config {
    /// Render as configuration text: `[section]`, one indented
    /// `key = value` line per entry, then a blank line.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (section, kv) in &self.sections {
            writeln!(f, "[{}]", section)?;
            for (key, value) in kv {
                writeln!(f, "\t{} = {}", key, value)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
