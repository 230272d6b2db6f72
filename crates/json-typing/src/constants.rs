//! Reserved field names of a tagged record.
//!
//! Every implementation that exchanges tagged documents must agree on these.

/// Field holding the type identifier of a tagged record.
pub const TYPE_FIELD: &str = "__type__";

/// Field holding the adapter payload of a tagged record.
pub const DATA_FIELD: &str = "__data__";
