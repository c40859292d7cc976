//! Extension registry: decoding fragments and indexing the results by type.
//!
//! Fragments are decoded one at a time by a [`DecodingService`] (usually a
//! [`DecoderRegistry`] keyed by qualified element name). Anything that cannot
//! be decoded is kept as a raw [`Fragment`](crate::Fragment). The results are
//! grouped into an [`ExtensionIndex`] that answers exact and polymorphic
//! queries.

mod config;
mod context;
mod core;
mod decoder;
mod index;
mod types;

pub use config::{create_extension_registry, create_registry_for};
pub use context::{service_from_context, DecoderContext, DecodingContext};
pub use self::core::DecoderRegistry;
pub use decoder::{decode, DecodingService, ElementDecoder, TypedDecoder};
pub use index::{
    find_extensions, find_extensions_with_context, find_first_extension,
    find_first_extension_with_context, ExtensionIndex,
};
pub use types::{DecodedValue, ExtensionQuery, ValueKind};
