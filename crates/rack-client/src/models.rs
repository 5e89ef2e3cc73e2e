//! Wire DTOs for the `/groups/{gid}/keypairs` resource.
//!
//! The API wraps single resources in `{"keypair": {...}}` and collections in
//! `{"keypairs": [...]}`; the envelope types below mirror that exactly so the
//! client never has to poke at untyped JSON.

use serde::{Deserialize, Serialize};

/// Keypair as returned by the API.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Keypair {
    /// Opaque identifier, unique across the API.
    pub keypair_id: String,
    /// User-supplied label.
    #[serde(default)]
    pub name: Option<String>,
    /// Identifier of the keypair in the compute subsystem.
    #[serde(default)]
    pub nova_keypair_id: Option<String>,
    /// Whether this is the group's default keypair.
    #[serde(default)]
    pub is_default: bool,
    /// Private key material, only returned on create and show.
    #[serde(default)]
    pub private_key: Option<String>,
    /// Owning group.
    #[serde(default)]
    pub gid: Option<String>,
    /// Owning user.
    #[serde(default)]
    pub user_id: Option<String>,
    /// Owning project.
    #[serde(default)]
    pub project_id: Option<String>,
    /// Lifecycle state; absent from create and update responses.
    #[serde(default)]
    pub status: Option<String>,
}

/// `{"keypair": {...}}` envelope used by get, create, and update responses.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct KeypairEnvelope {
    /// Wrapped keypair.
    pub keypair: Keypair,
}

/// `{"keypairs": [...]}` envelope used by list responses.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct KeypairListEnvelope {
    /// Keypairs in the order the API returned them.
    #[serde(default)]
    pub keypairs: Vec<Keypair>,
}

/// Body of a create request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeypairCreateRequest<'a> {
    /// Fields of the keypair to create.
    pub keypair: KeypairCreateFields<'a>,
}

/// Fields accepted when creating a keypair.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeypairCreateFields<'a> {
    /// Optional label; serialized as `null` when absent.
    pub name: Option<&'a str>,
    /// Make the new keypair the group default.
    pub is_default: bool,
}

/// Body of an update request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeypairUpdateRequest {
    /// Fields of the keypair to update.
    pub keypair: KeypairUpdateFields,
}

/// Fields accepted when updating a keypair.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct KeypairUpdateFields {
    /// New default flag.
    pub is_default: bool,
}

/// Fault document carried under a single kind key, e.g.
/// `{"itemNotFound": {"message": "...", "code": 404}}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ApiFault {
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}
