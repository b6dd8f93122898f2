//! Sentinel-delimited generated blocks.

use regex::Regex;
use tracing::warn;

use crate::config::Config;
use crate::error::{Error, Result};

/// Finds, removes and writes generated blocks for one marker pair.
#[derive(Debug, Clone)]
pub struct Markers {
    begin: String,
    end: String,
    block: Regex,
    stray: Regex,
}

impl Markers {
    pub fn new(config: &Config) -> Result<Self> {
        let begin = regex::escape(&config.begin_marker);
        let end = regex::escape(&config.end_marker);

        Ok(Self {
            begin: config.begin_marker.clone(),
            end: config.end_marker.clone(),
            block: Regex::new(&format!(r"(?is)//[ \t]*{}.*?//[ \t]*{}", begin, end))?,
            stray: Regex::new(&format!(r"(?i)//[ \t]*(?:({})|{})", begin, end))?,
        })
    }

    /// Removes every generated block and trailing whitespace.
    ///
    /// A marker left behind once all complete pairs are gone means the file
    /// was hand-edited into an inconsistent state; regenerating it would
    /// duplicate code, so it is an error.
    pub fn strip(&self, source: &str) -> Result<String> {
        let blocks = self.block.find_iter(source).count();
        if blocks > 1 {
            warn!("found {} generated blocks, collapsing into one", blocks);
        }

        let stripped = self.block.replace_all(source, "");

        let (mut begin, mut end) = (0, 0);
        for caps in self.stray.captures_iter(&stripped) {
            if caps.get(1).is_some() {
                begin += 1;
            } else {
                end += 1;
            }
        }
        if begin + end > 0 {
            return Err(Error::UnbalancedMarkers { begin, end });
        }

        Ok(stripped.trim_end().to_string())
    }

    /// Wraps rendered records in a single block. The result ends with a
    /// newline.
    pub fn wrap(&self, records: &[String], tool_name: &str) -> String {
        format!(
            "// {begin}\n\n//\n// DO NOT CHANGE\n// This section has been generated by {tool}.\n//\n\n{body}\n\n// {end}\n",
            begin = self.begin,
            end = self.end,
            tool = tool_name,
            body = records.join("\n\n"),
        )
    }
}
