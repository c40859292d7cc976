//! Owned, immutable XML fragments.
//!
//! A [`Fragment`] is a detached copy of one element from the host document,
//! including its attributes and nested content. It outlives the
//! `roxmltree::Document` it was read from, so decoded values and raw
//! fallbacks can live side by side in an `ExtensionIndex`.

use roxmltree::{Document, Node};
use serde::Serialize;

use crate::error::Result;
use crate::xml::{element_children, get_namespace, get_tag_name};

/// An attribute of a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub name: String,
    pub value: String,
}

/// One piece of fragment content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Content {
    /// A nested element.
    Element(Fragment),
    /// Non-whitespace character data.
    Text(String),
}

/// A self-describing XML element detached from its document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fragment {
    #[serde(skip_serializing_if = "Option::is_none")]
    namespace: Option<String>,
    name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    content: Vec<Content>,
}

impl Fragment {
    /// Create an empty fragment with the given namespace and local name.
    #[must_use]
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(String::from),
            name: name.into(),
            attributes: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Add an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute {
            namespace: None,
            name: name.into(),
            value: value.into(),
        });
        self
    }

    /// Append a child element.
    #[must_use]
    pub fn with_child(mut self, child: Fragment) -> Self {
        self.content.push(Content::Element(child));
        self
    }

    /// Append character data.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.push(Content::Text(text.into()));
        self
    }

    /// Copy an element and everything below it out of a parsed document.
    ///
    /// Whitespace-only text, comments and processing instructions are dropped.
    #[must_use]
    pub fn from_node(node: Node<'_, '_>) -> Self {
        let attributes = node
            .attributes()
            .map(|attr| Attribute {
                namespace: attr.namespace().map(String::from),
                name: attr.name().to_string(),
                value: attr.value().to_string(),
            })
            .collect();

        let content = node
            .children()
            .filter_map(|child| {
                if child.is_element() {
                    Some(Content::Element(Self::from_node(child)))
                } else if child.is_text() {
                    child
                        .text()
                        .filter(|text| !text.trim().is_empty())
                        .map(|text| Content::Text(text.to_string()))
                } else {
                    None
                }
            })
            .collect();

        Self {
            namespace: get_namespace(node).map(String::from),
            name: get_tag_name(node).to_string(),
            attributes,
            content,
        }
    }

    /// Parse a standalone XML string into a fragment of its root element.
    ///
    /// # Examples
    /// ```
    /// use gpx_extensions::Fragment;
    ///
    /// let fragment = Fragment::parse(r#"<color xmlns="urn:x">red</color>"#).unwrap();
    /// assert_eq!(fragment.name(), "color");
    /// assert_eq!(fragment.namespace(), Some("urn:x"));
    /// assert_eq!(fragment.text(), "red");
    /// ```
    pub fn parse(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml)?;
        Ok(Self::from_node(doc.root_element()))
    }

    /// Namespace URI of the element.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Local name of the element.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check namespace and local name at once.
    #[must_use]
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace() == Some(namespace) && self.name == name
    }

    /// All attributes in document order.
    #[must_use]
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value of the first attribute with the given local name.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    /// Nested content in document order.
    #[must_use]
    pub fn content(&self) -> &[Content] {
        &self.content
    }

    /// Child elements in document order.
    pub fn children(&self) -> impl Iterator<Item = &Fragment> {
        self.content.iter().filter_map(|c| match c {
            Content::Element(child) => Some(child),
            Content::Text(_) => None,
        })
    }

    /// First child element with the given local name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Fragment> {
        self.children().find(|child| child.name == name)
    }

    /// All child elements with the given local name.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Fragment> {
        self.children().filter(move |child| child.name == name)
    }

    /// Direct character data, concatenated and trimmed.
    #[must_use]
    pub fn text(&self) -> String {
        self.content
            .iter()
            .filter_map(|c| match c {
                Content::Text(text) => Some(text.as_str()),
                Content::Element(_) => None,
            })
            .collect::<String>()
            .trim()
            .to_string()
    }

    /// Trimmed text of the first child with the given name.
    #[must_use]
    pub fn child_text(&self, name: &str) -> Option<String> {
        self.child(name).map(Fragment::text)
    }
}

/// The ordered "any" content of a host record's `<extensions>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Extensions {
    fragments: Vec<Fragment>,
}

impl Extensions {
    /// Wrap an ordered list of fragments.
    #[must_use]
    pub fn new(fragments: Vec<Fragment>) -> Self {
        Self { fragments }
    }

    /// Copy every child element of an `<extensions>` node.
    #[must_use]
    pub fn from_node(node: Node<'_, '_>) -> Self {
        element_children(node).map(Fragment::from_node).collect()
    }

    /// Fragments in document order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Iterate over the fragments in document order.
    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.fragments.iter()
    }

    /// Number of fragments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Whether the block holds no fragments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

impl FromIterator<Fragment> for Extensions {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Extensions {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extensions_from_node_keeps_order() {
        let doc = Document::parse("<extensions>text<b/><a/><b/></extensions>").unwrap();
        let extensions = Extensions::from_node(doc.root_element());
        let names: Vec<&str> = extensions.iter().map(Fragment::name).collect();

        assert_eq!(names, vec!["b", "a", "b"]);
        assert_eq!(extensions.len(), 3);
    }

    const ADDRESS: &str = r#"<gpxx:Address xmlns:gpxx="urn:gpxx">
        <gpxx:StreetAddress>Seerosenweg 1</gpxx:StreetAddress>
        <!-- comment -->
        <gpxx:City>Nirgendwo</gpxx:City>
    </gpxx:Address>"#;

    #[test]
    fn test_parse_drops_whitespace_and_comments() {
        let fragment = Fragment::parse(ADDRESS).unwrap();

        assert_eq!(fragment.name(), "Address");
        assert_eq!(fragment.content().len(), 2);
        assert_eq!(fragment.child_text("City").as_deref(), Some("Nirgendwo"));
    }

    #[test]
    fn test_children_keep_namespace() {
        let fragment = Fragment::parse(ADDRESS).unwrap();
        let street = fragment.child("StreetAddress").unwrap();

        assert!(street.is("urn:gpxx", "StreetAddress"));
        assert!(!street.is("urn:other", "StreetAddress"));
    }

    #[test]
    fn test_attributes() {
        let fragment = Fragment::parse(r#"<rpt lat="52.4" lon="10.8"/>"#).unwrap();

        assert_eq!(fragment.attribute("lat"), Some("52.4"));
        assert_eq!(fragment.attribute("ele"), None);
        assert_eq!(fragment.attributes().len(), 2);
    }

    #[test]
    fn test_builder_matches_parsed() {
        let built = Fragment::new(None, "Categories")
            .with_child(Fragment::new(None, "Category").with_text("JUNIT"));
        let parsed = Fragment::parse("<Categories><Category>JUNIT</Category></Categories>").unwrap();

        assert_eq!(built, parsed);
    }

    #[test]
    fn test_children_named() {
        let fragment =
            Fragment::parse("<c><Category>a</Category><x/><Category>b</Category></c>").unwrap();
        let names: Vec<String> = fragment.children_named("Category").map(Fragment::text).collect();

        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_invalid_xml() {
        assert!(Fragment::parse("<open>").is_err());
    }
}
