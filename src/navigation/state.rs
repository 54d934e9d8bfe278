use crate::flow::START_NODE_ID;
use ahash::{AHashMap, AHashSet};

/// Variable always populated from the active context on `advance`.
pub const PROVIDER_VARIABLE: &str = "provider";

/// Identifies one command of one action node in the checklist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommandKey {
    pub node_id: String,
    pub index: usize,
}

impl CommandKey {
    pub fn new(node_id: impl Into<String>, index: usize) -> Self {
        Self {
            node_id: node_id.into(),
            index,
        }
    }
}

/// Everything a single session knows about its progress through one flow.
///
/// Read access is public; only [`super::NavigationEngine`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub(super) current_node_id: String,
    pub(super) history: Vec<String>,
    pub(super) completed_node_ids: AHashSet<String>,
    pub(super) completed_command_keys: AHashSet<CommandKey>,
    pub(super) selected_context: Option<String>,
    pub(super) variables: AHashMap<String, String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current_node_id: START_NODE_ID.to_string(),
            history: Vec::new(),
            completed_node_ids: AHashSet::new(),
            completed_command_keys: AHashSet::new(),
            selected_context: None,
            variables: AHashMap::new(),
        }
    }
}

impl NavigationState {
    pub fn current_node_id(&self) -> &str {
        &self.current_node_id
    }

    /// Previously-current node ids, oldest first. The last element is the back target.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn completed_node_ids(&self) -> &AHashSet<String> {
        &self.completed_node_ids
    }

    pub fn is_completed(&self, node_id: &str) -> bool {
        self.completed_node_ids.contains(node_id)
    }

    pub fn completed_command_keys(&self) -> &AHashSet<CommandKey> {
        &self.completed_command_keys
    }

    pub fn is_command_completed(&self, node_id: &str, index: usize) -> bool {
        self.completed_command_keys
            .contains(&CommandKey::new(node_id, index))
    }

    pub fn selected_context(&self) -> Option<&str> {
        self.selected_context.as_deref()
    }

    pub fn variables(&self) -> &AHashMap<String, String> {
        &self.variables
    }

    pub fn variable(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    pub fn can_retreat(&self) -> bool {
        !self.history.is_empty()
    }
}
