use crate::model::Priority;
use crate::render::DueStatus;
use console::Style;
use once_cell::sync::Lazy;

pub static CRITICAL: Lazy<Style> = Lazy::new(|| Style::new().on_red().on_bright());
pub static HIGH: Lazy<Style> = Lazy::new(|| Style::new().on_yellow().on_bright());
pub static NORMAL: Lazy<Style> = Lazy::new(|| Style::new().on_green().on_bright());
pub static LOW: Lazy<Style> = Lazy::new(|| Style::new().on_blue().on_bright());

pub static OVERDUE: Lazy<Style> = Lazy::new(|| Style::new().on_red().on_bright());
pub static DUE_TODAY: Lazy<Style> = Lazy::new(|| Style::new().on_yellow().on_bright());
pub static UPCOMING: Lazy<Style> = Lazy::new(|| Style::new().on_green().on_bright());

pub fn for_priority(priority: Priority) -> &'static Style {
    match priority {
        Priority::Critical => &*CRITICAL,
        Priority::High => &*HIGH,
        Priority::Normal => &*NORMAL,
        Priority::Low => &*LOW,
    }
}

pub fn for_due(status: DueStatus) -> &'static Style {
    match status {
        DueStatus::Overdue => &*OVERDUE,
        DueStatus::DueToday => &*DUE_TODAY,
        DueStatus::Upcoming => &*UPCOMING,
    }
}

/// A one-cell colored block. Styling is forced on so the table looks the same
/// whether or not stdout is a terminal; `color == false` yields a bare space.
pub fn block(style: &Style, color: bool) -> String {
    if color {
        style.clone().force_styling(true).apply_to(" ").to_string()
    } else {
        " ".to_string()
    }
}
