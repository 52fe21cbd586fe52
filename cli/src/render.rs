use std::fmt::Write;

use sweeper_core::{Cell, Phase, Snapshot};

fn cell_glyph(cell: Cell, triggered: bool) -> char {
    match cell {
        _ if triggered => 'X',
        Cell {
            is_revealed: true,
            is_mine: true,
            ..
        } => '*',
        Cell {
            is_revealed: true,
            adjacent_mine_count: 0,
            ..
        } => '.',
        Cell {
            is_revealed: true,
            adjacent_mine_count: count,
            ..
        } => char::from(b'0' + count),
        Cell {
            is_flagged: true, ..
        } => 'F',
        _ => '#',
    }
}

/// Clamps the mine counter into three digits the way a seven-segment display would.
pub fn format_counter(num: isize) -> String {
    match num {
        ..-99 => "-99".to_string(),
        -99..0 => format!("-{:02}", -num),
        0..1000 => format!("{:03}", num),
        1000.. => "999".to_string(),
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Pending => "ready",
        Phase::Active => "playing",
        Phase::Won => "you win!",
        Phase::Lost => "game over",
    }
}

/// Board with column tens/units header rows and row numbers, followed by the HUD line.
pub fn render(snapshot: &Snapshot) -> String {
    let (rows, cols) = snapshot.size();
    let mut out = String::new();

    let mut tens = String::from("    ");
    let mut units = String::from("    ");
    for col in 0..cols {
        tens.push(if col >= 10 {
            char::from(b'0' + (col / 10) % 10)
        } else {
            ' '
        });
        units.push(char::from(b'0' + col % 10));
    }
    if cols > 10 {
        out.push_str(tens.trim_end());
        out.push('\n');
    }
    out.push_str(&units);
    out.push('\n');

    for row in 0..rows {
        let _ = write!(out, "{:>3} ", row);
        for col in 0..cols {
            let coords = (row, col);
            let cell = snapshot.cells[[usize::from(row), usize::from(col)]];
            out.push(cell_glyph(cell, snapshot.triggered_mine == Some(coords)));
        }
        out.push('\n');
    }

    let _ = write!(
        out,
        "Mines: {}  {}",
        format_counter(snapshot.mines_left),
        phase_label(snapshot.phase)
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sweeper_core::GameSession;

    #[test]
    fn counter_is_clamped() {
        assert_eq!(format_counter(-150), "-99");
        assert_eq!(format_counter(-5), "-05");
        assert_eq!(format_counter(0), "000");
        assert_eq!(format_counter(187), "187");
        assert_eq!(format_counter(4000), "999");
    }

    #[test]
    fn renders_glyphs_and_hud() {
        let mut session = GameSession::from_layout((2, 3), &[(0, 2)]).unwrap();
        session.reveal((1, 0)).unwrap();
        session.toggle_flag((0, 2)).unwrap();

        let text = render(&session.snapshot());

        assert_eq!(text, "    012\n  0 .1F\n  1 .1#\nMines: 000  playing");
    }

    #[test]
    fn marks_triggered_mine() {
        let mut session = GameSession::from_layout((1, 3), &[(0, 0), (0, 2)]).unwrap();
        session.reveal((0, 1)).unwrap();
        session.reveal((0, 0)).unwrap();

        let text = render(&session.snapshot());

        assert!(text.contains("  0 X2*\n"));
        assert!(text.ends_with("game over"));
    }
}
