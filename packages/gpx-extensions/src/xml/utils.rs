//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::Node;

/// Get the tag name without namespace.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use gpx_extensions::xml::get_tag_name;
///
/// let xml = r#"<gpx xmlns="http://www.topografix.com/GPX/1/1"><wpt/></gpx>"#;
/// let doc = Document::parse(xml).unwrap();
/// let wpt = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(wpt), "wpt");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get the namespace URI of an element, if it has one.
pub fn get_namespace<'a>(node: Node<'a, '_>) -> Option<&'a str> {
    node.tag_name().namespace()
}

/// Find the first child element with the given local name.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use gpx_extensions::xml::find_child;
///
/// let xml = r#"<wpt><name>Home</name><extensions/></wpt>"#;
/// let doc = Document::parse(xml).unwrap();
/// let wpt = doc.root_element();
///
/// assert!(find_child(wpt, "extensions").is_some());
/// assert!(find_child(wpt, "desc").is_none());
/// ```
pub fn find_child<'a, 'input>(node: Node<'a, 'input>, tag: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|child| child.is_element() && get_tag_name(*child) == tag)
}

/// Get all element children of a node.
///
/// Text nodes, comments and processing instructions are excluded.
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}

/// Get the text content of a node, trimmed.
///
/// Returns an empty string if the node has no text.
pub fn get_text(node: Node<'_, '_>) -> String {
    node.text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<gpxx:Address xmlns:gpxx="http://example.com"><gpxx:City/></gpxx:Address>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "Address");
        assert_eq!(get_namespace(doc.root_element()), Some("http://example.com"));
    }

    #[test]
    fn test_get_namespace_absent() {
        let doc = Document::parse("<root/>").unwrap();
        assert_eq!(get_namespace(doc.root_element()), None);
    }

    #[test]
    fn test_get_text() {
        let doc = Document::parse("<name>  Seerosenweg  </name>").unwrap();
        assert_eq!(get_text(doc.root_element()), "Seerosenweg");
    }

    #[test]
    fn test_element_children_skip_text() {
        let xml = r#"<root>text<a/>more<b/></root>"#;
        let doc = Document::parse(xml).unwrap();
        let root = doc.root_element();

        assert_eq!(element_children(root).count(), 2);
        assert!(find_child(root, "b").is_some());
    }
}
