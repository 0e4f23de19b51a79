//! Wire type tags and envelope keys.
//!
//! Every tag here is registered exactly once by
//! [`RegistryBuilder::with_builtins`](crate::registry::RegistryBuilder::with_builtins).

/// Envelope key holding the type tag
pub const TYPE_KEY: &str = "type";
/// Envelope key holding the payload
pub const VALUE_KEY: &str = "value";
/// Dictionary entry key holding the entry's key envelope
pub const KEY_KEY: &str = "key";

pub const VOID: &str = "Void";
pub const OPTIONAL: &str = "Optional";
pub const BOOL: &str = "Bool";
pub const STRING: &str = "String";
pub const ADDRESS: &str = "Address";

pub const INT: &str = "Int";
pub const INT8: &str = "Int8";
pub const INT16: &str = "Int16";
pub const INT32: &str = "Int32";
pub const INT64: &str = "Int64";
pub const INT128: &str = "Int128";
pub const INT256: &str = "Int256";
pub const UINT: &str = "UInt";
pub const UINT8: &str = "UInt8";
pub const UINT16: &str = "UInt16";
pub const UINT32: &str = "UInt32";
pub const UINT64: &str = "UInt64";
pub const UINT128: &str = "UInt128";
pub const UINT256: &str = "UInt256";

pub const WORD8: &str = "Word8";
pub const WORD16: &str = "Word16";
pub const WORD32: &str = "Word32";
pub const WORD64: &str = "Word64";

pub const FIX64: &str = "Fix64";
pub const UFIX64: &str = "UFix64";

pub const ARRAY: &str = "Array";
pub const DICTIONARY: &str = "Dictionary";

pub const CONTRACT: &str = "Contract";
pub const LINK: &str = "Link";
pub const PATH: &str = "Path";
pub const TYPE: &str = "Type";
pub const CAPABILITY: &str = "Capability";
