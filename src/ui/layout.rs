use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::Tab;

pub const SIDEBAR_WIDTH: u16 = 30;

/// Rows taken by one roster card, blank separator included
pub const PATIENT_CARD_HEIGHT: u16 = 4;

/// Rows above the first roster card inside the roster border
pub const ROSTER_HEADER_HEIGHT: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiAreas {
    pub size: Rect,
    pub sidebar: Rect,
    pub sidebar_brand: Rect,
    pub sidebar_nav: Rect,
    pub sidebar_doctor: Rect,
    pub main: Rect,
    pub roster: Rect,
    pub detail: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(vertical[0]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(4),
        ])
        .split(body[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(body[1]);

    UiAreas {
        size,
        sidebar: body[0],
        sidebar_brand: sidebar_chunks[0],
        sidebar_nav: sidebar_chunks[1],
        sidebar_doctor: sidebar_chunks[2],
        main: body[1],
        roster: main_chunks[0],
        detail: main_chunks[1],
        status_line: vertical[1],
        command_line: vertical[2],
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

/// Rows of the roster list below its header
pub fn roster_list(areas: &UiAreas) -> Rect {
    let inner = rect_inner(areas.roster);
    Rect {
        y: inner.y.saturating_add(ROSTER_HEADER_HEIGHT),
        height: inner.height.saturating_sub(ROSTER_HEADER_HEIGHT),
        ..inner
    }
}

/// Nav buttons sit on every other row of the nav block
pub fn tab_at(areas: &UiAreas, col: u16, row: u16) -> Option<Tab> {
    let inner = rect_inner(areas.sidebar_nav);
    if !rect_contains(inner, col, row) {
        return None;
    }
    let offset = row - inner.y;
    if offset % 2 != 0 {
        return None;
    }
    Tab::ALL.get(usize::from(offset / 2)).copied()
}

/// Whole cards that fit in the roster list
fn roster_capacity(areas: &UiAreas) -> usize {
    usize::from(roster_list(areas).height / PATIENT_CARD_HEIGHT)
}

/// First roster card on screen. Scrolls just far enough to keep the
/// cursor card visible, and the roster is drawn from this offset.
pub fn roster_offset(areas: &UiAreas, cursor: usize, count: usize) -> usize {
    let capacity = roster_capacity(areas);
    if capacity == 0 || count == 0 {
        return 0;
    }
    (cursor.min(count - 1) + 1).saturating_sub(capacity)
}

pub fn patient_index_at(
    areas: &UiAreas,
    col: u16,
    row: u16,
    count: usize,
    cursor: usize,
) -> Option<usize> {
    let list = roster_list(areas);
    if !rect_contains(list, col, row) {
        return None;
    }
    let rel = row - list.y;
    // Separator row belongs to no card.
    if rel % PATIENT_CARD_HEIGHT == PATIENT_CARD_HEIGHT - 1 {
        return None;
    }
    let slot = usize::from(rel / PATIENT_CARD_HEIGHT);
    if slot >= roster_capacity(areas) {
        return None;
    }
    let index = roster_offset(areas, cursor, count) + slot;
    (index < count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> UiAreas {
        areas(Rect::new(0, 0, 120, 40))
    }

    #[test]
    fn test_areas_partition_screen() {
        let a = screen();
        assert_eq!(a.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(a.main.x, SIDEBAR_WIDTH);
        assert_eq!(a.status_line.y, 38);
        assert_eq!(a.command_line.y, 39);
        assert_eq!(a.roster.width + a.detail.width, a.main.width);
    }

    #[test]
    fn test_tab_hit_rows() {
        let a = screen();
        let inner = rect_inner(a.sidebar_nav);
        assert_eq!(tab_at(&a, inner.x, inner.y), Some(Tab::Patients));
        assert_eq!(tab_at(&a, inner.x, inner.y + 1), None);
        assert_eq!(tab_at(&a, inner.x + 3, inner.y + 2), Some(Tab::Reminders));
        assert_eq!(tab_at(&a, inner.x, inner.y + 4), Some(Tab::Schedule));
        assert_eq!(tab_at(&a, inner.x, inner.y + 6), None);
        assert_eq!(tab_at(&a, a.main.x + 5, inner.y), None);
    }

    #[test]
    fn test_patient_hit_rows() {
        let a = screen();
        let list = roster_list(&a);
        assert_eq!(patient_index_at(&a, list.x, list.y, 4, 0), Some(0));
        assert_eq!(patient_index_at(&a, list.x, list.y + 2, 4, 0), Some(0));
        assert_eq!(patient_index_at(&a, list.x, list.y + 3, 4, 0), None);
        assert_eq!(patient_index_at(&a, list.x, list.y + 4, 4, 0), Some(1));
        assert_eq!(patient_index_at(&a, list.x, list.y + 13, 4, 3), Some(3));
        assert_eq!(patient_index_at(&a, list.x, list.y + 16, 4, 0), None);
        assert_eq!(patient_index_at(&a, list.x, list.y - 1, 4, 0), None);
    }

    #[test]
    fn test_roster_scrolls_to_keep_cursor_visible() {
        // Room for three cards.
        let a = areas(Rect::new(0, 0, 120, 18));
        let list = roster_list(&a);
        assert_eq!(list.height, 12);
        assert_eq!(roster_offset(&a, 0, 4), 0);
        assert_eq!(roster_offset(&a, 2, 4), 0);
        assert_eq!(roster_offset(&a, 3, 4), 1);
        assert_eq!(roster_offset(&a, 9, 4), 1);

        assert_eq!(patient_index_at(&a, list.x, list.y, 4, 3), Some(1));
        assert_eq!(patient_index_at(&a, list.x, list.y + 8, 4, 3), Some(3));
        assert_eq!(patient_index_at(&a, list.x, list.y, 4, 0), Some(0));
        assert_eq!(patient_index_at(&a, list.x, list.y + 8, 4, 0), Some(2));
    }

    #[test]
    fn test_partial_card_rows_are_not_hits() {
        // 14 list rows: three whole cards and two spare rows.
        let a = areas(Rect::new(0, 0, 120, 20));
        let list = roster_list(&a);
        assert_eq!(list.height, 14);
        assert_eq!(patient_index_at(&a, list.x, list.y + 12, 4, 0), None);

        let tiny = areas(Rect::new(0, 0, 120, 9));
        let list = roster_list(&tiny);
        assert!(list.height < PATIENT_CARD_HEIGHT);
        assert_eq!(roster_offset(&tiny, 3, 4), 0);
        assert_eq!(patient_index_at(&tiny, list.x, list.y, 4, 0), None);
    }
}
