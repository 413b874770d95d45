// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use quran_ui::{PageToken, PaginationBar};

pub const PREVIOUS_CONTROL: &str = "<";
pub const NEXT_CONTROL: &str = ">";
pub const DISABLED_CONTROL: &str = "-";

/// One line for the controls, eg: `< 1 ... 4 [5] 6 ... 10 >`. The selected page is
/// bracketed and a disabled previous / next control is drawn as `-`.
#[must_use]
pub fn render_controls_line(bar: &PaginationBar) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(bar.range().len() + 2);

    parts.push(
        if bar.is_previous_disabled() { DISABLED_CONTROL } else { PREVIOUS_CONTROL }
            .to_string(),
    );

    for slot in bar.slots() {
        parts.push(match slot.token {
            PageToken::Page(_) if slot.is_selected => format!("[{}]", slot.token),
            _ => slot.token.to_string(),
        });
    }

    parts.push(
        if bar.is_next_disabled() { DISABLED_CONTROL } else { NEXT_CONTROL }.to_string(),
    );

    parts.join(" ")
}

/// The controls line followed by the summary line (when enabled). Empty when there is no
/// bar to render.
#[must_use]
pub fn render_bar(maybe_bar: Option<&PaginationBar>) -> Vec<String> {
    let Some(bar) = maybe_bar else {
        return vec![];
    };
    let mut lines = vec![render_controls_line(bar)];
    if let Some(summary) = bar.summary() {
        lines.push(summary.to_string());
    }
    lines
}
