//! A minimal, local, content-addressable object store.
//!
//! `rvc` persists immutable blobs and directory-tree snapshots under the
//! SHA-1 hash of their own serialized bytes, using the same loose-object
//! layout as git: a `"<type> <len>\0"` header, zlib compression, and a
//! two-level hash-prefix directory under the repository's metadata
//! directory (`.rvc`).
//!
//! The crate has two layers:
//!
//! * [`repo`] locates a repository by walking upward from a working
//!   directory, loads and validates its configuration, and constructs
//!   paths inside the metadata directory.
//! * [`object`] defines the object variants (blob, tree), their canonical
//!   serializations, and the store operations that hash, write, and read
//!   them.

#![deny(warnings)]

pub mod object;
pub mod repo;
