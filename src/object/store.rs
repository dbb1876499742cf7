//! Reads and writes objects in a repository's loose-object directory.
//!
//! Stored form: `"<type> <len>\0"` followed by the serialized payload,
//! zlib-compressed, at `objects/<first 2 hex chars>/<remaining 38>`. The
//! object's ID is the SHA-1 of the uncompressed header + payload, so it
//! is a pure function of (type, payload) and never of the compressed
//! bytes or the storage path.

use std::fs;
use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use sha1::{Digest, Sha1};

use super::{Error, Id, Kind, Object, Result};
use crate::repo::Repository;

/// Compute the ID an object with this kind and payload would be stored
/// under. Pure function; performs no I/O.
pub fn hash_of(kind: Kind, payload: &[u8]) -> Id {
    let mut hasher = Sha1::new();

    hasher.update(kind.to_string());
    hasher.update(b" ");
    hasher.update(payload.len().to_string());
    hasher.update(b"\0");
    hasher.update(payload);

    let digest = hasher.finalize();

    // unwrap is safe: the hasher always produces a 20-byte digest.
    Id::new(&digest[..]).unwrap()
}

/// Write an object into the repository and return its ID.
///
/// Idempotent: if a file already exists at the object's storage path the
/// write is skipped and the same ID is returned.
pub fn put(repo: &Repository, object: &Object) -> Result<Id> {
    let payload = object.serialize();
    let id = hash_of(object.kind(), &payload);

    let hex = id.to_string();
    let path = repo.state_file(true, &["objects", &hex[..2], &hex[2..]])?;
    if path.exists() {
        return Ok(id);
    }

    let mut record = format!("{} {}\0", object.kind(), payload.len()).into_bytes();
    record.extend_from_slice(&payload);

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&record)?;
    fs::write(&path, encoder.finish()?)?;

    Ok(id)
}

/// Read the object stored under the given ID.
pub fn get(repo: &Repository, id: &Id) -> Result<Object> {
    let hex = id.to_string();
    let path = repo.state_path(&["objects", &hex[..2], &hex[2..]]);
    if !path.exists() {
        return Err(Error::NotFound(id.clone()));
    }

    let compressed = fs::read(&path)?;
    let mut raw = Vec::new();
    ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut raw)?;

    let nul = raw
        .iter()
        .position(|&b| b == 0)
        .ok_or(Error::MalformedHeader)?;
    let header = &raw[..nul];

    let space = header
        .iter()
        .position(|&b| b == b' ')
        .ok_or(Error::MalformedHeader)?;
    let tag = &header[..space];

    // The length must parse as a decimal integer, but the value itself is
    // not cross-checked against the payload; the hash already binds the
    // stored bytes.
    std::str::from_utf8(&header[space + 1..])
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .ok_or(Error::MalformedLength)?;

    Object::deserialize(Kind::from_tag(tag)?, &raw[nul + 1..])
}
