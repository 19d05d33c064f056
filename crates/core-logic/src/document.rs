/// Something with attributes that can be looked up by name.
pub trait AttributeLookup {
    /// Gets the value of the provided attribute, or `None` if it isn't set.
    fn get_attribute(&self, name: &str) -> Option<&str>;
}

/// A document with a single root element, like a parsed XML file.
pub trait DocumentRoot {
    type Element<'a>: AttributeLookup
    where
        Self: 'a;

    /// The element at the root of the document.
    fn document_element(&self) -> Self::Element<'_>;
}

impl<'input> DocumentRoot for roxmltree::Document<'input> {
    type Element<'a> = roxmltree::Node<'a, 'input> where Self: 'a;

    fn document_element(&self) -> Self::Element<'_> {
        self.root_element()
    }
}

impl AttributeLookup for roxmltree::Node<'_, '_> {
    fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attribute(name)
    }
}

/// Reads an attribute off the root element of the provided document.
pub fn attr<D: DocumentRoot>(root: &D, attribute: &str) -> Option<String> {
    root.document_element()
        .get_attribute(attribute)
        .map(str::to_string)
}
