//! Cross-document system connectivity.
//!
//! Every C4 diagram under a directory contributes its named software systems
//! as nodes and its system-to-system relationships as undirected edges. Nodes
//! are joined by display name, since element ids are only unique within one
//! file. Two distinct systems drawn with the same name therefore become one
//! node.

use std::{
    collections::{BTreeSet, HashMap},
    fmt,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use petgraph::{
    graph::{NodeIndex, UnGraph},
    visit::Bfs,
};
use rayon::prelude::*;

use c4lint_core::document::DiagramDocument;

use crate::{classify, error::C4LintError, files};

/// The systems and system-to-system relationships of one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSystems {
    systems: Vec<String>,
    relationships: Vec<(String, String)>,
}

impl FileSystems {
    /// Names of the systems, in document order. Unnamed systems are left out.
    pub fn systems(&self) -> &[String] {
        &self.systems
    }

    /// Relationships whose endpoints both resolve to named systems, as name pairs.
    pub fn relationships(&self) -> &[(String, String)] {
        &self.relationships
    }
}

/// Extracts the named systems of `document` and the relationships between them.
///
/// Relationships touching anything but a named system of the same document
/// are ignored.
pub fn system_relationships(document: &DiagramDocument) -> FileSystems {
    let partition = classify::partition(document);

    let names: HashMap<&str, &str> = partition
        .systems
        .iter()
        .filter_map(|system| system.name().map(|name| (system.id(), name.trim())))
        .collect();

    let systems = partition
        .systems
        .iter()
        .filter_map(|system| names.get(system.id()))
        .map(|name| name.to_string())
        .collect();

    let relationships = partition
        .relationships
        .iter()
        .filter_map(|relationship| {
            let source = names.get(relationship.source()?)?;
            let target = names.get(relationship.target()?)?;
            Some((source.to_string(), target.to_string()))
        })
        .collect();

    FileSystems {
        systems,
        relationships,
    }
}

/// Summary of how the systems of a [`SystemGraph`] hang together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    /// The graph has no nodes.
    NoSystems,
    /// Every system is reachable from every other one.
    Connected,
    /// The systems form this many components.
    Disconnected(usize),
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Connectivity::NoSystems => write!(f, "No systems found"),
            Connectivity::Connected => write!(f, "All systems are connected"),
            Connectivity::Disconnected(count) => {
                write!(f, "Systems form {count} disconnected components")
            }
        }
    }
}

/// Undirected graph of software systems joined by name.
#[derive(Debug, Default)]
pub struct SystemGraph {
    graph: UnGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
}

impl SystemGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a system node unless one with the same name exists.
    pub fn add_system(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.nodes.get(name) {
            return index;
        }
        let index = self.graph.add_node(name.to_string());
        self.nodes.insert(name.to_string(), index);
        index
    }

    /// Adds an undirected edge between two systems, adding missing nodes.
    ///
    /// An edge that already exists in either direction is not added again.
    pub fn add_relationship(&mut self, source: &str, target: &str) {
        let a = self.add_system(source);
        let b = self.add_system(target);
        if self.graph.find_edge(a, b).is_none() {
            self.graph.add_edge(a, b, ());
        }
    }

    /// Merges the systems and relationships of one document.
    pub fn add_file(&mut self, systems: &FileSystems) {
        for name in systems.systems() {
            self.add_system(name);
        }
        for (source, target) in systems.relationships() {
            self.add_relationship(source, target);
        }
    }

    /// Number of distinct system names.
    pub fn system_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct undirected relationships.
    pub fn relationship_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if a system with this name is in the graph.
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// The connected components as name sets, largest first.
    ///
    /// Components of equal size are ordered by their smallest name.
    pub fn connected_components(&self) -> Vec<BTreeSet<String>> {
        let mut seen = vec![false; self.graph.node_count()];
        let mut components = Vec::new();

        for start in self.graph.node_indices() {
            if seen[start.index()] {
                continue;
            }
            let mut component = BTreeSet::new();
            let mut bfs = Bfs::new(&self.graph, start);
            while let Some(node) = bfs.next(&self.graph) {
                seen[node.index()] = true;
                component.insert(self.graph[node].clone());
            }
            components.push(component);
        }

        components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.first().cmp(&b.first())));
        components
    }

    /// Summarizes the components of the graph.
    pub fn connectivity(&self) -> Connectivity {
        match self.connected_components().len() {
            0 => Connectivity::NoSystems,
            1 => Connectivity::Connected,
            count => Connectivity::Disconnected(count),
        }
    }

    /// Returns `true` if the graph is exactly one component.
    ///
    /// An empty graph is not connected.
    pub fn is_fully_connected(&self) -> bool {
        self.connectivity() == Connectivity::Connected
    }
}

/// A global graph together with what was read to build it.
#[derive(Debug)]
pub struct NetworkAnalysis {
    graph: SystemGraph,
    analyzed: Vec<PathBuf>,
    skipped: Vec<PathBuf>,
    failures: Vec<(PathBuf, C4LintError)>,
}

impl NetworkAnalysis {
    /// The global system graph.
    pub fn graph(&self) -> &SystemGraph {
        &self.graph
    }

    /// C4 diagrams that contributed to the graph.
    pub fn analyzed(&self) -> &[PathBuf] {
        &self.analyzed
    }

    /// Diagrams without any C4 element.
    pub fn skipped(&self) -> &[PathBuf] {
        &self.skipped
    }

    /// Files that could not be read or decoded.
    pub fn failures(&self) -> &[(PathBuf, C4LintError)] {
        &self.failures
    }
}

impl fmt::Display for NetworkAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Analyzed {} C4 diagrams ({} skipped, {} failed).",
            self.analyzed.len(),
            self.skipped.len(),
            self.failures.len()
        )?;
        writeln!(
            f,
            "{} systems, {} relationships.",
            self.graph.system_count(),
            self.graph.relationship_count()
        )?;
        writeln!(f, "{}.", self.graph.connectivity())?;

        for (number, component) in self.graph.connected_components().iter().enumerate() {
            let names: Vec<&str> = component.iter().map(String::as_str).collect();
            writeln!(
                f,
                "  Component {} ({} systems): {}",
                number + 1,
                component.len(),
                names.join(", ")
            )?;
        }

        for (path, err) in &self.failures {
            writeln!(f, "  Failed: {}: {err}", path.display())?;
        }
        Ok(())
    }
}

/// Builds the global system graph of every diagram under `root`.
///
/// Files are decoded in parallel and merged in path order. A file that
/// cannot be read or decoded is recorded as a failure and does not stop the
/// analysis.
///
/// # Errors
///
/// Returns `C4LintError::Io` only if the directory itself cannot be walked.
pub fn build_global_graph(root: &Path) -> Result<NetworkAnalysis, C4LintError> {
    let paths = files::diagram_files(root)?;
    info!(root:? = root, files = paths.len(); "Building global system graph");

    let results: Vec<(PathBuf, Result<Option<FileSystems>, C4LintError>)> = paths
        .into_par_iter()
        .map(|path| {
            let result = files::read_document(&path).map(|document| {
                classify::is_c4_model(&document).then(|| system_relationships(&document))
            });
            (path, result)
        })
        .collect();

    let mut analysis = NetworkAnalysis {
        graph: SystemGraph::new(),
        analyzed: Vec::new(),
        skipped: Vec::new(),
        failures: Vec::new(),
    };

    for (path, result) in results {
        match result {
            Ok(Some(systems)) => {
                debug!(
                    path:? = path,
                    systems = systems.systems().len(),
                    relationships = systems.relationships().len();
                    "Merging diagram"
                );
                analysis.graph.add_file(&systems);
                analysis.analyzed.push(path);
            }
            Ok(None) => {
                debug!(path:? = path; "No C4 objects found, skipping");
                analysis.skipped.push(path);
            }
            Err(err) => {
                warn!(path:? = path, err:% = err; "Skipping unreadable diagram");
                analysis.failures.push((path, err));
            }
        }
    }

    info!(
        systems = analysis.graph.system_count(),
        relationships = analysis.graph.relationship_count();
        "Global system graph built"
    );
    Ok(analysis)
}
