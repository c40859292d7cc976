//! Type-indexed collection of decoded extension values.

use std::collections::HashMap;

use tracing::debug;

use super::context::{service_from_context, DecodingContext};
use super::decoder::{decode, DecodingService};
use super::types::{DecodedValue, ExtensionQuery, ValueKind};
use crate::fragment::{Extensions, Fragment};

/// Decoded values grouped by their exact [`ValueKind`].
///
/// Built once from a sequence of fragments and read-only afterwards. Each
/// bucket keeps the input order of its values; the order of buckets relative
/// to each other is unspecified.
#[derive(Debug, Clone, Default)]
pub struct ExtensionIndex {
    buckets: HashMap<ValueKind, Vec<DecodedValue>>,
}

impl ExtensionIndex {
    /// Decode fragments and group them by kind.
    ///
    /// Accepts `&Fragment` items as well as `Option<&Fragment>` items; absent
    /// entries are skipped. Never fails: fragments that cannot be decoded end
    /// up in the [`ValueKind::Fragment`] bucket.
    pub fn build<'a, I, F>(fragments: I, service: Option<&dyn DecodingService>) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Option<&'a Fragment>>,
    {
        let mut buckets: HashMap<ValueKind, Vec<DecodedValue>> = HashMap::new();
        let mut count = 0usize;

        for item in fragments {
            let fragment: Option<&Fragment> = item.into();
            let Some(fragment) = fragment else {
                continue;
            };
            let value = decode(fragment, service);
            buckets.entry(value.kind()).or_default().push(value);
            count += 1;
        }

        debug!(
            fragments = count,
            buckets = buckets.len(),
            decoding = service.is_some(),
            "Built extension index"
        );

        Self { buckets }
    }

    /// Build with a service created from a decoding context.
    ///
    /// If the context cannot create a service, every fragment stays raw.
    pub fn build_with_context<'a, I, F>(fragments: I, context: &dyn DecodingContext) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<Option<&'a Fragment>>,
    {
        let service = service_from_context(context);
        Self::build(fragments, service.as_deref())
    }

    /// Build from an optional `<extensions>` block; `None` yields an empty index.
    pub fn from_extensions(
        extensions: Option<&Extensions>,
        service: Option<&dyn DecodingService>,
    ) -> Self {
        match extensions {
            Some(extensions) => Self::build(extensions, service),
            None => Self::default(),
        }
    }

    /// All values of type `T`.
    ///
    /// With `polymorphic == false` only values whose exact kind is `T`'s kind
    /// match; capability types therefore never match exactly. With
    /// `polymorphic == true` every value whose kind can be viewed as `T`
    /// matches.
    ///
    /// # Examples
    /// ```
    /// use gpx_extensions::garmin::Temperature;
    /// use gpx_extensions::{ExtensionIndex, Fragment};
    ///
    /// let index = ExtensionIndex::build(&[Fragment::new(None, "raw")], None);
    /// assert_eq!(index.find_all::<Fragment>(false).len(), 1);
    /// assert!(index.find_all::<dyn Temperature>(true).is_empty());
    /// ```
    #[must_use]
    pub fn find_all<T>(&self, polymorphic: bool) -> Vec<&T>
    where
        T: ExtensionQuery + ?Sized,
    {
        let exact = T::exact_kind();
        self.buckets
            .iter()
            .filter(|(kind, _)| {
                exact == Some(**kind) || (polymorphic && T::is_assignable_from(**kind))
            })
            .flat_map(|(_, values)| values.iter().filter_map(T::extract))
            .collect()
    }

    /// First value of type `T`, as returned by [`Self::find_all`].
    #[must_use]
    pub fn find_first<T>(&self, polymorphic: bool) -> Option<&T>
    where
        T: ExtensionQuery + ?Sized,
    {
        self.find_all::<T>(polymorphic).into_iter().next()
    }

    /// Values in the bucket for `kind`, in input order.
    #[must_use]
    pub fn bucket(&self, kind: ValueKind) -> &[DecodedValue] {
        self.buckets.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    /// Kinds present in the index, sorted.
    #[must_use]
    pub fn kinds(&self) -> Vec<ValueKind> {
        let mut kinds: Vec<ValueKind> = self.buckets.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Iterate over buckets in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (ValueKind, &[DecodedValue])> {
        self.buckets
            .iter()
            .map(|(kind, values)| (*kind, values.as_slice()))
    }

    /// Number of buckets.
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total number of values across all buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Whether the index holds no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Decode an `<extensions>` block and return all values of type `T`.
pub fn find_extensions<T>(
    extensions: Option<&Extensions>,
    service: Option<&dyn DecodingService>,
    polymorphic: bool,
) -> Vec<T>
where
    T: ExtensionQuery + Clone,
{
    ExtensionIndex::from_extensions(extensions, service)
        .find_all::<T>(polymorphic)
        .into_iter()
        .cloned()
        .collect()
}

/// Decode an `<extensions>` block and return the first value of type `T`.
pub fn find_first_extension<T>(
    extensions: Option<&Extensions>,
    service: Option<&dyn DecodingService>,
    polymorphic: bool,
) -> Option<T>
where
    T: ExtensionQuery + Clone,
{
    find_extensions(extensions, service, polymorphic)
        .into_iter()
        .next()
}

/// Like [`find_extensions`], with the service taken from a decoding context.
pub fn find_extensions_with_context<T>(
    extensions: Option<&Extensions>,
    context: &dyn DecodingContext,
    polymorphic: bool,
) -> Vec<T>
where
    T: ExtensionQuery + Clone,
{
    let service = service_from_context(context);
    find_extensions(extensions, service.as_deref(), polymorphic)
}

/// Like [`find_first_extension`], with the service taken from a decoding context.
pub fn find_first_extension_with_context<T>(
    extensions: Option<&Extensions>,
    context: &dyn DecodingContext,
    polymorphic: bool,
) -> Option<T>
where
    T: ExtensionQuery + Clone,
{
    find_extensions_with_context(extensions, context, polymorphic)
        .into_iter()
        .next()
}
