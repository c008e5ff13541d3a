//! Click-driven column sorting.
//!
//! Sort state lives on the header cells themselves: the current direction
//! is the `sort` attribute, the indicator is an appended child element, and
//! the width pin is the node's inline sizing override. The controller keeps
//! nothing off-tree except the set of bound header-cell ids, which is
//! rebuilt after every render.

use std::cmp::Ordering;

use tabledom::text::display_width;
use tabledom::{collect_clickable, find_element, find_element_mut, Element, Event, MouseButton, Tag};

pub const ARROW_UP: &str = "▲";
pub const ARROW_DOWN: &str = "▼";

/// Extra display columns the indicator needs before the label width forces
/// a minimum-width pin.
const WIDTH_MARGIN: usize = 2;
/// Display columns reserved on a pinned header beyond its label.
const WIDTH_RESERVE: usize = 4;

/// Per-column sort direction, stored as the `sort` attribute on the
/// header cell. A column that has never been clicked carries no attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_attr(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            SortDirection::Ascending => ARROW_UP,
            SortDirection::Descending => ARROW_DOWN,
        }
    }

    fn from_attr(value: Option<&str>) -> Option<Self> {
        match value {
            Some("asc") => Some(SortDirection::Ascending),
            Some("desc") => Some(SortDirection::Descending),
            _ => None,
        }
    }

    /// Ascending toggles to descending; descending and unsorted both go to
    /// ascending. A clicked column never returns to the unsorted state.
    fn next(current: Option<SortDirection>) -> SortDirection {
        match current {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }
}

/// Outcome of offering an event to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
}

/// Binds header cells after each render and runs the sort on click.
#[derive(Debug, Default)]
pub struct SortController {
    bound: Vec<String>,
}

impl SortController {
    pub fn new() -> Self {
        Self::default()
    }

    /// IDs of the header cells currently listened to.
    pub fn bound(&self) -> &[String] {
        &self.bound
    }

    /// Re-collect the clickable header cells of a freshly built table.
    /// Cells carrying the `footer` marker class are skipped. Previously
    /// bound ids are discarded along with the subtree that owned them.
    pub fn rebind(&mut self, table: &Element) {
        self.bound = collect_clickable(table)
            .into_iter()
            .filter(|id| {
                find_element(table, id)
                    .is_some_and(|el| el.tag == Tag::Th && !el.has_class("footer"))
            })
            .collect();
        log::debug!("bound {} header cells", self.bound.len());
    }

    /// Offer an event to the controller. A left click on a bound header
    /// cell triggers the sort; everything else is ignored.
    pub fn handle(&mut self, root: &mut Element, event: &Event) -> EventResult {
        let Event::Click {
            target: Some(target),
            button: MouseButton::Left,
        } = event
        else {
            return EventResult::Ignored;
        };
        if !self.bound.iter().any(|id| id == target) {
            return EventResult::Ignored;
        }
        if sort_by_header(root, target) {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

/// Toggle sorting on the header cell with the given ID and reorder the
/// owning table's body rows in place.
///
/// Returns false when the ID does not resolve to a header cell inside a
/// table under `root`.
pub fn sort_by_header(root: &mut Element, th_id: &str) -> bool {
    let Some(table_id) = owning_table_id(root, th_id, None) else {
        return false;
    };
    let Some(plan) = plan_sort(root, &table_id, th_id) else {
        return false;
    };

    apply_headers(root, &plan);
    reorder_rows(root, &plan);
    true
}

struct SortPlan {
    th_id: String,
    direction: SortDirection,
    label: String,
    min_width: Option<u16>,
    other_headers: Vec<String>,
    tbody_id: Option<String>,
    /// Source index into the current child list, per output slot.
    row_order: Vec<usize>,
}

/// ID of the nearest ancestor table of the element with the given ID.
fn owning_table_id(element: &Element, id: &str, enclosing: Option<&str>) -> Option<String> {
    if element.id == id {
        return enclosing.map(str::to_string);
    }
    let enclosing = if element.tag == Tag::Table {
        Some(element.id.as_str())
    } else {
        enclosing
    };
    for child in element.child_elements() {
        if let Some(found) = owning_table_id(child, id, enclosing) {
            return Some(found);
        }
    }
    None
}

fn plan_sort(root: &Element, table_id: &str, th_id: &str) -> Option<SortPlan> {
    let table = find_element(root, table_id)?;
    let thead = table
        .child_elements()
        .iter()
        .find(|child| child.tag == Tag::Thead)?;

    let mut column = None;
    let mut other_headers = Vec::new();
    for row in thead.child_elements() {
        for (index, cell) in row.child_elements().iter().enumerate() {
            if cell.id == th_id {
                column = Some(index);
            } else if cell.tag == Tag::Th {
                other_headers.push(cell.id.clone());
            }
        }
    }
    let column = column?;

    let th = find_element(thead, th_id)?;
    let direction = SortDirection::next(SortDirection::from_attr(th.get_attr("sort")));
    let label = header_label(th);
    log::debug!("sorting column {column} of '{table_id}' {direction:?}");

    let tbody = table
        .child_elements()
        .iter()
        .find(|child| child.tag == Tag::Tbody);

    let label_width = display_width(&label);
    let body_width = tbody
        .and_then(|tbody| tbody.child_elements().first())
        .map(|row| display_width(&cell_text(row, column)))
        .unwrap_or(0);
    let min_width =
        (label_width + WIDTH_MARGIN > body_width).then(|| (label_width + WIDTH_RESERVE) as u16);

    let (tbody_id, row_order) = match tbody {
        Some(tbody) => (Some(tbody.id.clone()), plan_row_order(tbody, column, direction)),
        None => (None, Vec::new()),
    };

    Some(SortPlan {
        th_id: th_id.to_string(),
        direction,
        label,
        min_width,
        other_headers,
        tbody_id,
        row_order,
    })
}

/// Compute the new row order. Rows carrying the `total-row` class keep
/// their slots; the rest fill the remaining slots in sorted order.
fn plan_row_order(tbody: &Element, column: usize, direction: SortDirection) -> Vec<usize> {
    let rows = tbody.child_elements();
    let keys: Vec<String> = rows.iter().map(|row| cell_text(row, column)).collect();
    let pinned: Vec<bool> = rows.iter().map(|row| row.has_class("total-row")).collect();

    let mut sortable: Vec<usize> = (0..rows.len()).filter(|&i| !pinned[i]).collect();
    sortable.sort_by(|&a, &b| compare_cells(&keys[a], &keys[b], direction));

    let mut sorted = sortable.into_iter();
    (0..rows.len())
        .map(|slot| {
            if pinned[slot] {
                slot
            } else {
                sorted.next().unwrap_or(slot)
            }
        })
        .collect()
}

fn apply_headers(root: &mut Element, plan: &SortPlan) {
    for id in &plan.other_headers {
        if let Some(other) = find_element_mut(root, id) {
            reset_header(other);
        }
    }

    if let Some(th) = find_element_mut(root, &plan.th_id) {
        th.set_attr("sort", plan.direction.as_attr());
        *th.child_elements_mut() = vec![
            Element::span().text(&plan.label),
            Element::span().class("arrow").text(plan.direction.glyph()),
        ];
        match plan.min_width {
            Some(width) => th.set_min_width(width),
            None => th.clear_min_width(),
        }
    }
}

/// Restore a header cell to its unsorted presentation: plain label text,
/// no direction marker, no width pin.
fn reset_header(th: &mut Element) {
    if th.child_count() > 0 {
        let label = header_label(th);
        th.set_text(label);
    }
    th.remove_attr("sort");
    th.clear_min_width();
}

/// Re-slot the existing body rows into the planned order. Nodes move;
/// none are rebuilt.
fn reorder_rows(root: &mut Element, plan: &SortPlan) {
    let Some(tbody_id) = &plan.tbody_id else {
        return;
    };
    let Some(tbody) = find_element_mut(root, tbody_id) else {
        return;
    };

    let rows = std::mem::take(tbody.child_elements_mut());
    let mut slots: Vec<Option<Element>> = rows.into_iter().map(Some).collect();
    let mut reordered = Vec::with_capacity(slots.len());
    for &source in &plan.row_order {
        if let Some(row) = slots.get_mut(source).and_then(Option::take) {
            reordered.push(row);
        }
    }
    // keep anything a malformed order left behind
    reordered.extend(slots.into_iter().flatten());
    *tbody.child_elements_mut() = reordered;
}

/// The header's original label, without any direction indicator.
fn header_label(th: &Element) -> String {
    match th.child_elements().first() {
        Some(first) => first.text_content(),
        None => th.text_content(),
    }
}

/// Visible text of the cell at `column` within a row, trimmed.
fn cell_text(row: &Element, column: usize) -> String {
    row.child_elements()
        .get(column)
        .map(|cell| cell.text_content().trim().to_string())
        .unwrap_or_default()
}

/// Compare two cell texts under the given direction.
///
/// Both values non-empty and numeric compare numerically; everything else
/// falls back to collation. Descending swaps the operands rather than
/// reversing the result, which matters for the collation path.
pub fn compare_cells(a: &str, b: &str, direction: SortDirection) -> Ordering {
    let (left, right) = match direction {
        SortDirection::Ascending => (a, b),
        SortDirection::Descending => (b, a),
    };

    if let (Some(left_num), Some(right_num)) = (parse_number(left), parse_number(right)) {
        return left_num.partial_cmp(&right_num).unwrap_or(Ordering::Equal);
    }

    collate(left, right)
}

fn parse_number(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Case-folded lexicographic collation with a raw tie-break.
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    match folded {
        Ordering::Equal => a.cmp(b),
        ordering => ordering,
    }
}
