//! Parser for a header-block-plus-free-text message format.
//!
//! A message opens with header lines of the form `key value` (single
//! space separator). A line beginning with a single space continues the
//! previous value; the newline-plus-space is folded back to a newline. A
//! blank line terminates the headers, and everything after it is free
//! text.
//!
//! This is the extension point toward a commit-like object variant. It is
//! self-contained and not wired into the store's read/write paths.

use thiserror::Error;

/// An error which can be returned when parsing a message.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseMessageError {
    /// A header line has no space separating key from value.
    #[error("header line is missing a key/value separator")]
    MissingSeparator,
}

/// A parsed message: an ordered header block plus a free-text body.
///
/// Duplicate keys are allowed and kept in order of appearance (a
/// commit-like object lists one `parent` header per parent).
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Message {
    fields: Vec<(Vec<u8>, Vec<u8>)>,
    body: Vec<u8>,
}

impl Message {
    /// Parse a raw message.
    ///
    /// Runs as a loop over an explicit offset: each iteration consumes
    /// one header line together with its continuation lines, until a
    /// blank line (or end of input) ends the header block.
    pub fn parse(raw: &[u8]) -> Result<Message, ParseMessageError> {
        let mut fields = Vec::new();
        let mut pos = 0;

        while pos < raw.len() {
            if raw[pos] == b'\n' {
                return Ok(Message {
                    fields,
                    body: raw[pos + 1..].to_vec(),
                });
            }

            let line_end = next_newline(raw, pos);
            let space = raw[pos..line_end]
                .iter()
                .position(|&b| b == b' ')
                .map(|i| i + pos)
                .ok_or(ParseMessageError::MissingSeparator)?;
            let key = raw[pos..space].to_vec();

            // Pull in continuation lines: each starts with a single space.
            let mut end = line_end;
            while end + 1 < raw.len() && raw[end] == b'\n' && raw[end + 1] == b' ' {
                end = next_newline(raw, end + 1);
            }

            let mut value = Vec::with_capacity(end - space - 1);
            let mut i = space + 1;
            while i < end {
                if raw[i] == b'\n' && i + 1 < end && raw[i + 1] == b' ' {
                    value.push(b'\n');
                    i += 2;
                } else {
                    value.push(raw[i]);
                    i += 1;
                }
            }

            fields.push((key, value));
            pos = end + 1;
        }

        // End of input with no blank line: headers only, empty body.
        Ok(Message {
            fields,
            body: Vec::new(),
        })
    }

    /// Header fields in order of appearance.
    pub fn fields(&self) -> &[(Vec<u8>, Vec<u8>)] {
        &self.fields
    }

    /// All values recorded for the given key, in order.
    pub fn values(&self, key: &[u8]) -> Vec<&[u8]> {
        self.fields
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_slice())
            .collect()
    }

    /// The free-text body (empty if the message had no blank line).
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Render the message back to its serialized form: header lines with
    /// embedded newlines re-expanded to continuation lines, a blank line,
    /// then the body.
    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::new();

        for (key, value) in &self.fields {
            out.extend_from_slice(key);
            out.push(b' ');
            for &b in value {
                out.push(b);
                if b == b'\n' {
                    out.push(b' ');
                }
            }
            out.push(b'\n');
        }

        out.push(b'\n');
        out.extend_from_slice(&self.body);
        out
    }
}

fn next_newline(raw: &[u8], from: usize) -> usize {
    raw[from..]
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + from)
        .unwrap_or(raw.len())
}
