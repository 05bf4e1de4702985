use super::FunctionHead;

/// `extern head` — a function implemented outside the checked module;
/// only its signature is registered.
#[derive(Debug, Clone, PartialEq)]
pub struct Extern {
    pub head: FunctionHead,
}

impl Extern {
    pub fn new(head: FunctionHead) -> Self {
        Extern { head }
    }

    pub fn render(&self) -> String {
        format!("extern {}", self.head.render())
    }
}
