//! Message template
//!
//! Every `^` is replaced with the giver's name and every `*` with the
//! receiver's name. Replacement is a single pass, so names containing either
//! marker are inserted verbatim.

use crate::ports::TemplateError;
use std::fs;
use std::path::Path;

pub const GIVER_MARKER: char = '^';
pub const RECEIVER_MARKER: char = '*';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    body: String,
}

impl MessageTemplate {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let body = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(body))
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn render(&self, giver: &str, receiver: &str) -> String {
        let mut out = String::with_capacity(self.body.len() + giver.len() + receiver.len());
        for c in self.body.chars() {
            match c {
                GIVER_MARKER => out.push_str(giver),
                RECEIVER_MARKER => out.push_str(receiver),
                other => out.push(other),
            }
        }
        out
    }
}
