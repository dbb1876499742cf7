use super::{Error, Id, Result};

/// One entry in a tree: a mode string, an entry name, and the ID of the
/// child object.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TreeEntry {
    mode: Vec<u8>,
    name: Vec<u8>,
    id: Id,
}

impl TreeEntry {
    /// Create a tree entry.
    ///
    /// The mode must be non-empty and contain neither a space nor a NUL
    /// byte; the name must be non-empty and contain no NUL byte. Those
    /// bytes delimit fields in the serialized form, so admitting them
    /// would produce a payload that cannot be parsed back.
    pub fn new(mode: &[u8], name: &[u8], id: Id) -> Result<TreeEntry> {
        if mode.is_empty() || mode.contains(&b' ') || mode.contains(&0) {
            return Err(Error::InvalidEntryMode);
        }
        if name.is_empty() || name.contains(&0) {
            return Err(Error::InvalidEntryName);
        }

        Ok(TreeEntry {
            mode: mode.to_vec(),
            name: name.to_vec(),
            id,
        })
    }

    pub fn mode(&self) -> &[u8] {
        &self.mode
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }

    pub fn id(&self) -> &Id {
        &self.id
    }
}

/// An ordered directory listing.
///
/// Entries are kept (and serialized) in the order given; the on-disk
/// order is the tree's canonical iteration order and no sorting is
/// applied.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn new(entries: Vec<TreeEntry>) -> Tree {
        Tree { entries }
    }

    pub fn entries(&self) -> &[TreeEntry] {
        &self.entries
    }

    /// Produce the canonical byte serialization.
    ///
    /// Per entry: mode, a single space, name, a single NUL, then the raw
    /// 20-byte digest. No delimiter follows the digest; the next entry's
    /// mode begins immediately after.
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();

        for entry in &self.entries {
            out.extend_from_slice(&entry.mode);
            out.push(b' ');
            out.extend_from_slice(&entry.name);
            out.push(0);
            out.extend_from_slice(entry.id.as_bytes());
        }

        out
    }

    /// Parse a serialized tree payload.
    ///
    /// Scans with an explicit offset: space delimits the mode, NUL
    /// delimits the name, and exactly 20 bytes of digest follow. A
    /// payload truncated mid-entry is an error, never a partial entry.
    pub fn deserialize(raw: &[u8]) -> Result<Tree> {
        let mut entries = Vec::new();
        let mut pos = 0;

        while pos < raw.len() {
            let space = raw[pos..]
                .iter()
                .position(|&b| b == b' ')
                .ok_or(Error::TreeNoSpace)?
                + pos;
            let mode = &raw[pos..space];

            let nul = raw[space + 1..]
                .iter()
                .position(|&b| b == 0)
                .ok_or(Error::TreeNoNull)?
                + space
                + 1;
            let name = &raw[space + 1..nul];

            let id_end = nul + 21;
            if id_end > raw.len() {
                return Err(Error::TreeShaOverflow);
            }

            // Construct directly rather than via `new`: the scan already
            // guarantees the delimiting bytes cannot appear in the fields.
            entries.push(TreeEntry {
                mode: mode.to_vec(),
                name: name.to_vec(),
                id: Id::new(&raw[nul + 1..id_end])?,
            });

            pos = id_end;
        }

        Ok(Tree { entries })
    }
}
