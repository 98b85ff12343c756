use std::fmt;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sidebar_model::{AnnotationId, SortKey, Tab};
use sidebar_store::SidebarState;

use crate::script::Replay;

/// What a replay left behind, flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    pub applied: usize,
    pub ignored: usize,
    pub annotations: usize,
    pub notes: usize,
    pub orphans: usize,
    pub replies: usize,
    pub waiting_to_anchor: bool,
    pub selected_tab: Tab,
    pub sort_key: SortKey,
    pub sort_keys_available: Vec<SortKey>,
    pub selected: Vec<String>,
    pub focused: Vec<String>,
    pub highlighted: Vec<String>,
    pub filter_query: Option<String>,
    pub focus_mode: Option<FocusSummary>,
    pub direct_linked_annotation: Option<String>,
    pub direct_linked_group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusSummary {
    pub user: String,
    pub focused: bool,
}

impl ReplaySummary {
    pub fn from_replay(replay: &Replay) -> Self {
        let state: &SidebarState = replay.store().state();
        let annotations = &state.annotations;
        let selection = &state.selection;
        let focus = &selection.focus_mode;

        Self {
            applied: replay.applied(),
            ignored: replay.ignored(),
            annotations: annotations.annotation_count(),
            notes: annotations.note_count(),
            orphans: annotations.orphan_count(),
            replies: annotations
                .annotations
                .iter()
                .filter(|a| a.is_reply())
                .count(),
            waiting_to_anchor: annotations.is_waiting_to_anchor_annotations(),
            selected_tab: selection.selected_tab,
            sort_key: selection.sort_key,
            sort_keys_available: selection.sort_keys_available.clone(),
            selected: id_strings(selection.selected_annotations.iter().flatten()),
            focused: id_strings(selection.focused_annotations.iter().flatten()),
            highlighted: id_strings(&selection.highlighted),
            filter_query: selection.filter_query.clone(),
            focus_mode: focus.enabled.then(|| FocusSummary {
                user: focus.user_pretty_name().to_string(),
                focused: focus.is_focused(),
            }),
            direct_linked_annotation: state
                .direct_linked
                .annotation_id
                .as_ref()
                .map(ToString::to_string),
            direct_linked_group: state.direct_linked.group_id.clone(),
        }
    }

    fn rows(&self) -> Vec<(&'static str, String)> {
        let focus_mode = match &self.focus_mode {
            Some(focus) if focus.focused => format!("{} (focused)", display_or_dash(&focus.user)),
            Some(focus) => format!("{} (off)", display_or_dash(&focus.user)),
            None => "disabled".to_string(),
        };
        vec![
            (
                "Steps",
                format!("{} applied, {} ignored", self.applied, self.ignored),
            ),
            ("Annotations", self.annotations.to_string()),
            ("Page notes", self.notes.to_string()),
            ("Orphans", self.orphans.to_string()),
            ("Replies", self.replies.to_string()),
            (
                "Anchoring",
                if self.waiting_to_anchor {
                    "pending".to_string()
                } else {
                    "settled".to_string()
                },
            ),
            ("Tab", self.selected_tab.to_string()),
            (
                "Sort",
                format!(
                    "{} (of {})",
                    self.sort_key,
                    join(self.sort_keys_available.iter().map(SortKey::as_str))
                ),
            ),
            ("Selected", list_or_dash(&self.selected)),
            ("Focused", list_or_dash(&self.focused)),
            ("Highlighted", list_or_dash(&self.highlighted)),
            (
                "Filter",
                self.filter_query.clone().unwrap_or_else(|| "-".to_string()),
            ),
            ("Focus mode", focus_mode),
            (
                "Direct link",
                format!(
                    "annotation {}, group {}",
                    self.direct_linked_annotation.as_deref().unwrap_or("-"),
                    self.direct_linked_group.as_deref().unwrap_or("-")
                ),
            ),
        ]
    }
}

/// Plain `label: value` lines, one per row of the summary table.
impl fmt::Display for ReplaySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

pub fn print_summary(summary: &ReplaySummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("State"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (label, value) in summary.rows() {
        let value_cell = if value == "-" || value == "0" {
            dim_cell(value)
        } else {
            Cell::new(value)
        };
        table.add_row(vec![Cell::new(label).add_attribute(Attribute::Bold), value_cell]);
    }
    println!("{table}");
}

/// The tab/sort table: which sort keys each tab offers and which it resets to.
pub fn print_sort_keys() {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Tab"),
        header_cell("Sort keys"),
        header_cell("Default"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Center);
    }
    for tab in Tab::all() {
        table.add_row(vec![
            Cell::new(tab.as_str()),
            Cell::new(join(tab.sort_keys_available().iter().map(SortKey::as_str))),
            Cell::new(tab.default_sort_key()).fg(Color::Green),
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn id_strings<'a>(ids: impl IntoIterator<Item = &'a AnnotationId>) -> Vec<String> {
    ids.into_iter().map(ToString::to_string).collect()
}

fn join<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts.collect::<Vec<_>>().join(", ")
}

fn list_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
