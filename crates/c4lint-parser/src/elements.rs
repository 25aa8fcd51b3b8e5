//! Extraction of graph elements from an `mxGraphModel` tree.

use roxmltree::Node;

use c4lint_core::element::GraphElement;

/// Tags of the wrapper nodes that carry custom properties in draw.io.
const OBJECT_TAGS: [&str; 2] = ["object", "UserObject"];

const CELL_TAG: &str = "mxCell";

/// Collect every `object` wrapper below `model`, in document order.
pub(crate) fn collect(model: Node<'_, '_>) -> Vec<GraphElement> {
    model
        .descendants()
        .filter(|node| OBJECT_TAGS.iter().any(|tag| node.has_tag_name(*tag)))
        .map(to_element)
        .collect()
}

fn to_element(node: Node<'_, '_>) -> GraphElement {
    let cell = node.children().find(|child| child.has_tag_name(CELL_TAG));
    let endpoint = |name: &str| {
        node.attribute(name)
            .or_else(|| cell.and_then(|cell| cell.attribute(name)))
            .map(str::to_string)
    };

    let element = node
        .attributes()
        .fold(GraphElement::new(node.attribute("id").unwrap_or_default()), |element, attr| {
            element.with_attribute(attr.name(), attr.value())
        });
    let (source, target) = (endpoint("source"), endpoint("target"));
    element.with_endpoints(source, target)
}
