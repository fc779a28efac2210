use crate::model::{Instance, InstanceNode, UtilizationReport};
use crate::table::{self, TableRow};
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeId(usize);

impl NodeId {
    const ROOT: NodeId = NodeId(0);
}

#[derive(Debug, Default)]
struct Node {
    instance: Option<Instance>,
    children: Vec<NodeId>,
}

/// Arena of instances with node 0 as the synthetic design root.
#[derive(Debug)]
struct Arena {
    nodes: Vec<Node>,
}

impl Arena {
    fn new() -> Self {
        Self { nodes: vec![Node::default()] }
    }

    fn append(&mut self, parent: NodeId, instance: Instance) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node { instance: Some(instance), children: Vec::new() });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn into_report(mut self) -> UtilizationReport {
        let top = std::mem::take(&mut self.nodes[NodeId::ROOT.0].children);
        let instances = top.into_iter().map(|id| self.take_subtree(id)).collect();
        UtilizationReport { instances }
    }

    fn take_subtree(&mut self, id: NodeId) -> InstanceNode {
        let node = std::mem::take(&mut self.nodes[id.0]);
        InstanceNode {
            instance: node.instance.unwrap_or_default(),
            children: node.children.into_iter().map(|c| self.take_subtree(c)).collect(),
        }
    }
}

/// Attach rows to the tree by indentation level.
///
/// The level map starts as `0 -> root`. A level with no entry is pulled back
/// to one past the nearest smaller known level. The parent is the entry at
/// `level - 1` (saturating). Each new node is stored at both `level` and
/// `level + 1`, so a row one step deeper that follows it attaches to it even
/// when that deeper level was never populated. Rows with zero indentation
/// therefore displace the root as the parent of later zero-indent rows.
pub fn build(rows: impl IntoIterator<Item = TableRow>) -> UtilizationReport {
    let mut arena = Arena::new();
    let mut levels: BTreeMap<usize, NodeId> = BTreeMap::new();
    levels.insert(0, NodeId::ROOT);

    for TableRow { indent, instance } in rows {
        let mut level = indent;
        if !levels.contains_key(&level) {
            level = levels.range(..level).next_back().map(|(k, _)| k + 1).unwrap_or(0);
        }
        // every key above 0 was inserted together with the key below it
        let parent = levels[&level.saturating_sub(1)];
        debug!(instance = %instance.name, indent, level, "attach");
        let id = arena.append(parent, instance);
        levels.insert(level, id);
        levels.insert(level + 1, id);
    }

    arena.into_report()
}

/// Parse report text into the instance hierarchy. Missing or malformed
/// tables produce an empty or partial report, never an error.
pub fn parse_report(text: &str) -> UtilizationReport {
    let report = build(table::rows(text));
    info!(instances = report.instance_count(), "utilization hierarchy built");
    report
}
