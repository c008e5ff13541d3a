//! Mount and render orchestration.

use tabledom::{find_element_mut, remove_all_children, Element, Event};

use crate::builder::TableBuilder;
use crate::config::TableConfig;
use crate::data::TableData;
use crate::extract::{DefaultExtract, Extract};
use crate::sort::{EventResult, SortController};

/// Owns the build → mount → rebind cycle for one table.
///
/// Every render starts from scratch: the mount element's children are
/// cleared wholesale and the previous subtree is discarded, never diffed.
pub struct Renderer<E: Extract = DefaultExtract> {
    builder: TableBuilder<E>,
    sorter: SortController,
}

impl Renderer<DefaultExtract> {
    pub fn new(config: TableConfig) -> Self {
        Self {
            builder: TableBuilder::new(config),
            sorter: SortController::new(),
        }
    }
}

impl<E: Extract> Renderer<E> {
    pub fn with_extract(config: TableConfig, extract: E) -> Self {
        Self {
            builder: TableBuilder::with_extract(config, extract),
            sorter: SortController::new(),
        }
    }

    pub fn builder(&self) -> &TableBuilder<E> {
        &self.builder
    }

    pub fn sorter(&self) -> &SortController {
        &self.sorter
    }

    /// Build the table for `data` and mount it under the element with the
    /// given ID, replacing whatever was rendered there before. Freshly
    /// built header cells are rebound for sorting.
    ///
    /// Panics if no element with `mount_id` exists in `root` — a missing
    /// mount point is a caller configuration defect.
    pub fn render(&mut self, root: &mut Element, mount_id: &str, data: &TableData) {
        let table = self.builder.build(data);
        self.sorter.rebind(&table);

        let Some(mount) = find_element_mut(root, mount_id) else {
            panic!("mount element '{mount_id}' not found");
        };
        remove_all_children(mount);
        mount.append_child(table);
        log::debug!("mounted table under '{mount_id}'");
    }

    /// Forward an input event to the sort controller.
    pub fn handle(&mut self, root: &mut Element, event: &Event) -> EventResult {
        self.sorter.handle(root, event)
    }
}
