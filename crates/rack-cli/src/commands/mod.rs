//! Command handlers. Each handler performs exactly one API call.

pub(crate) mod keypairs;
