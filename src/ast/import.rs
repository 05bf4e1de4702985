use super::Position;

/// `import a.b.c` — a dotted module path, resolved to a source file by
/// replacing `.` with the host path separator (§6).
#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub module_name: String,
    pub position: Position,
}

impl Import {
    pub fn new(module_name: impl Into<String>, position: Position) -> Self {
        Import {
            module_name: module_name.into(),
            position,
        }
    }

    /// The last dotted component, used as the local alias for the imported
    /// module (§4.6).
    pub fn alias(&self) -> &str {
        self.module_name.rsplit('.').next().unwrap_or(&self.module_name)
    }

    pub fn render(&self) -> String {
        format!("import {}", self.module_name)
    }
}
