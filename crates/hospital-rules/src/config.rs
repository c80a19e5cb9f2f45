//! DNA property helpers shared by integrity and coordinator zomes.

/// msgpack encoding of `nil`
pub const MSGPACK_NIL: u8 = 0xc0;

/// True when the DNA was installed without a properties block.
///
/// Only an absent block falls back to defaults. A block that is present
/// but fails to decode is an error for the caller to surface.
pub fn properties_unset(bytes: &[u8]) -> bool {
    bytes.is_empty() || bytes == [MSGPACK_NIL]
}

/// Administrator self-registration: open when no progenitors are configured.
pub fn may_register_admin(progenitors: &[String], agent_key: &str) -> bool {
    progenitors.is_empty() || progenitors.iter().any(|p| p == agent_key)
}
