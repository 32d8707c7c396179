use std::io::{self, IsTerminal, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    style::{Attribute, Print, SetAttribute},
    terminal::{self, ClearType},
    ExecutableCommand, QueueableCommand,
};

use crate::core::pricing::PricingTable;

pub struct SelectableRegion {
    pub code: String,
    pub name: String,
    pub multiplier: f64,
}

/// RAII guard that restores terminal state on drop (even on panic).
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        io::stdout().execute(cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = io::stdout().execute(cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

/// Pick a default region from the list.
/// Returns `Ok(Some(code))` on confirm, `Ok(None)` if not a TTY, `Err` on cancel/Ctrl-C.
pub fn interactive_select(
    items: &[SelectableRegion],
    initial: &str,
) -> anyhow::Result<Option<String>> {
    if !io::stdin().is_terminal() {
        return Ok(None);
    }

    let _guard = RawModeGuard::enable()?;

    let mut cursor_pos: usize = items
        .iter()
        .position(|item| item.code == initial)
        .unwrap_or(0);

    draw(items, cursor_pos)?;

    loop {
        if let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        {
            match (code, modifiers) {
                (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                    clear_ui(items.len())?;
                    anyhow::bail!("cancelled");
                }
                (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => {
                    clear_ui(items.len())?;
                    anyhow::bail!("cancelled");
                }
                (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                    if cursor_pos > 0 {
                        cursor_pos -= 1;
                    }
                }
                (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                    if cursor_pos + 1 < items.len() {
                        cursor_pos += 1;
                    }
                }
                (KeyCode::Enter, _) => {
                    clear_ui(items.len())?;
                    return Ok(Some(items[cursor_pos].code.clone()));
                }
                _ => {}
            }
            draw(items, cursor_pos)?;
        }
    }
}

fn draw(items: &[SelectableRegion], cursor_pos: usize) -> io::Result<()> {
    let mut stdout = io::stdout();

    // Move to start and clear
    stdout
        .queue(cursor::MoveToColumn(0))?
        .queue(terminal::Clear(ClearType::FromCursorDown))?;

    // Header
    stdout
        .queue(Print("Select a default region\r\n"))?
        .queue(Print("\r\n"))?
        .queue(Print(
            "  Use arrow keys to navigate, enter to confirm\r\n",
        ))?
        .queue(Print("\r\n"))?;

    // Items
    for (i, item) in items.iter().enumerate() {
        let marker = if i == cursor_pos { "> " } else { "  " };

        if i == cursor_pos {
            stdout.queue(SetAttribute(Attribute::Reverse))?;
        }

        stdout.queue(Print(format!(
            "{marker}{:<16} {:<14} x{:.2}\r\n",
            item.code, item.name, item.multiplier
        )))?;

        if i == cursor_pos {
            stdout.queue(SetAttribute(Attribute::Reset))?;
        }
    }

    // Footer
    stdout
        .queue(Print("\r\n"))?
        .queue(Print("  enter: confirm | q: cancel\r\n"))?;

    // Move cursor back up to top for next redraw
    let total_lines = items.len() + 5; // header(4) + items + footer(2)
    stdout.queue(cursor::MoveUp(total_lines as u16 + 1))?;

    stdout.flush()?;
    Ok(())
}

fn clear_ui(item_count: usize) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout
        .queue(cursor::MoveToColumn(0))?
        .queue(terminal::Clear(ClearType::FromCursorDown))?;
    // Extra clear: move down to where content was and clear
    let total_lines = item_count + 6;
    for _ in 0..total_lines {
        stdout
            .queue(Print("                                                                  \r\n"))?;
    }
    stdout.queue(cursor::MoveUp(total_lines as u16))?;
    stdout
        .queue(cursor::MoveToColumn(0))?
        .queue(terminal::Clear(ClearType::FromCursorDown))?;
    stdout.flush()?;
    Ok(())
}

/// Build the selectable region list from the pricing table, in code order.
pub fn build_region_list(table: &PricingTable) -> Vec<SelectableRegion> {
    table
        .regions
        .iter()
        .map(|(code, info)| SelectableRegion {
            code: code.clone(),
            name: info.name.clone(),
            multiplier: info.multiplier,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_region_list_covers_the_table() {
        let table = PricingTable::builtin();
        let items = build_region_list(&table);
        assert_eq!(items.len(), table.regions.len());
        let codes: Vec<&str> = items.iter().map(|i| i.code.as_str()).collect();
        assert!(codes.contains(&"us-east-1"));
        assert!(codes.contains(&"ap-southeast-1"));
    }

    #[test]
    fn region_list_carries_multipliers() {
        let table = PricingTable::builtin();
        let items = build_region_list(&table);
        let singapore = items.iter().find(|i| i.code == "ap-southeast-1").unwrap();
        assert!((singapore.multiplier - 1.15).abs() < 1e-12);
        assert_eq!(singapore.name, "Singapore");
    }
}
