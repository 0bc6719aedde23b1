//! Argument payloads for the editor maintenance tools
//!
//! Each tool the bridge can invoke takes a fixed-shape argument mapping.
//! Rather than open-ended dictionaries, the shapes are a tagged variant:
//! one variant per tool, serialized with the tool's `command` discriminator
//! so the wire form matches what the editor-side tool implementations
//! expect.

use serde::{Deserialize, Serialize};

/// Checks performed by the prefab audit tool.
pub const PREFAB_AUDIT_CHECKS: [&str; 3] = ["naming", "collision", "performance"];

/// Steps performed by the scene refactor tool, in order.
pub const SCENE_REFACTOR_STEPS: [&str; 2] = ["remove_empty_groups", "rebuild_navigation"];

/// Argument payload for one editor tool invocation.
///
/// Serializes to the mapping shape each tool expects, with the `command`
/// field as the discriminator.
///
/// # Examples
///
/// ```
/// use nightshade_bridge::tools::ToolArguments;
///
/// let args = ToolArguments::prefab_audit("WeaponAssets");
/// let val = serde_json::to_value(&args).unwrap();
/// assert_eq!(val["command"], "prefab_audit");
/// assert_eq!(val["checks"][0], "naming");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ToolArguments {
    /// Audit a prefab group for naming, collision, and performance issues.
    PrefabAudit {
        /// Asset group to audit.
        target: String,
        /// Checks to run.
        checks: Vec<String>,
    },
    /// Clean up a scene and rebuild its navigation data.
    SceneRefactor {
        /// Scene to refactor.
        scene: String,
        /// Refactor steps, applied in order.
        steps: Vec<String>,
        /// When `true`, simulate without persisting changes.
        dry_run: bool,
    },
    /// Apply a property patch across an asset group.
    BulkEditAssets {
        /// Asset group to edit.
        target: String,
        /// Property values to write.
        modifications: BulkModifications,
        /// When `true`, simulate without persisting changes.
        dry_run: bool,
    },
}

/// The property patch applied by the bulk-edit tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BulkModifications {
    /// New damage value.
    pub damage: u32,
    /// New range value.
    pub range: u32,
}

impl Default for BulkModifications {
    fn default() -> Self {
        Self {
            damage: 42,
            range: 120,
        }
    }
}

impl ToolArguments {
    /// Arguments for a prefab audit with the standard check set.
    pub fn prefab_audit(target: impl Into<String>) -> Self {
        Self::PrefabAudit {
            target: target.into(),
            checks: PREFAB_AUDIT_CHECKS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Arguments for a scene refactor with the standard step list.
    pub fn scene_refactor(scene: impl Into<String>, dry_run: bool) -> Self {
        Self::SceneRefactor {
            scene: scene.into(),
            steps: SCENE_REFACTOR_STEPS.iter().map(|s| s.to_string()).collect(),
            dry_run,
        }
    }

    /// Arguments for a bulk edit.
    ///
    /// Always a dry run with the fixed modification values; the editor-side
    /// tool is destructive and the bridge never asks it to persist.
    pub fn bulk_edit(target: impl Into<String>) -> Self {
        Self::BulkEditAssets {
            target: target.into(),
            modifications: BulkModifications::default(),
            dry_run: true,
        }
    }

    /// The wire name of the tool this payload is for.
    pub fn tool_name(&self) -> &'static str {
        match self {
            Self::PrefabAudit { .. } => "prefab_audit",
            Self::SceneRefactor { .. } => "scene_refactor",
            Self::BulkEditAssets { .. } => "bulk_edit_assets",
        }
    }
}
