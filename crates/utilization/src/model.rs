use serde::{Deserialize, Serialize};

/// One row of the hierarchical utilization table.
///
/// Counters are kept as the exact trimmed text of the report cell, so values
/// such as `"1,234"` or `"-"` survive unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    pub name: String,
    pub module: String,
    #[serde(rename = "totalLUTs")]
    pub total_luts: String,
    #[serde(rename = "logicLUTs")]
    pub logic_luts: String,
    #[serde(rename = "lutRAMs")]
    pub lutrams: String,
    #[serde(rename = "SRLs")]
    pub srls: String,
    #[serde(rename = "FFs")]
    pub ffs: String,
    #[serde(rename = "RAMB36")]
    pub ramb36: String,
    #[serde(rename = "RAMB18")]
    pub ramb18: String,
    #[serde(rename = "URAM")]
    pub uram: String,
    #[serde(rename = "DSPBlocks")]
    pub dsp_blocks: String,
}

impl Instance {
    /// Report element names paired with their values, in serialization order.
    pub fn fields(&self) -> [(&'static str, &str); 11] {
        [
            ("Name", self.name.as_str()),
            ("Module", self.module.as_str()),
            ("TotalLUTs", self.total_luts.as_str()),
            ("LogicLUTs", self.logic_luts.as_str()),
            ("LUTRAMs", self.lutrams.as_str()),
            ("SRLs", self.srls.as_str()),
            ("FFs", self.ffs.as_str()),
            ("RAMB36", self.ramb36.as_str()),
            ("RAMB18", self.ramb18.as_str()),
            ("URAM", self.uram.as_str()),
            ("DSPBlocks", self.dsp_blocks.as_str()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceNode {
    #[serde(flatten)]
    pub instance: Instance,
    #[serde(default)]
    pub children: Vec<InstanceNode>,
}

impl InstanceNode {
    #[cfg(test)]
    pub(crate) fn new(instance: Instance) -> Self {
        Self { instance, children: Vec::new() }
    }

    pub fn name(&self) -> &str {
        &self.instance.name
    }
}

/// The reconstructed design hierarchy. `instances` are the children of the
/// implicit top-level root, which carries no data of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationReport {
    #[serde(default)]
    pub instances: Vec<InstanceNode>,
}

impl UtilizationReport {
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Total number of instances at every depth.
    pub fn instance_count(&self) -> usize {
        self.iter().count()
    }

    /// Depth-first, pre-order walk. Depth 1 is a direct child of the root.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: self.instances.iter().rev().map(|n| (1, n)).collect() }
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

pub struct Iter<'a> {
    stack: Vec<(usize, &'a InstanceNode)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a InstanceNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, node))
    }
}
