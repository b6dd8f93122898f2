#[derive(Debug, Clone)]
pub struct Config {
    /// Crate path that marks candidate files and qualifies `Time`,
    /// `Duration` and `String` field types.
    pub library: String,
    /// Extension (without the dot) of files considered by the walker.
    pub extension: String,
    pub begin_marker: String,
    pub end_marker: String,
    /// Named in the header of every generated block.
    pub tool_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            library: "raw".to_string(),
            extension: "rs".to_string(),
            begin_marker: "raw:codegen:begin".to_string(),
            end_marker: "raw:codegen:end".to_string(),
            tool_name: "rawgen".to_string(),
        }
    }
}

impl Config {
    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = library.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_markers(mut self, begin: impl Into<String>, end: impl Into<String>) -> Self {
        self.begin_marker = begin.into();
        self.end_marker = end.into();
        self
    }

    pub fn with_tool_name(mut self, tool_name: impl Into<String>) -> Self {
        self.tool_name = tool_name.into();
        self
    }
}
