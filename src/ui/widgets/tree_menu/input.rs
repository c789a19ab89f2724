//! Keyboard input handling and interactive loop.

use std::io::{self, Write};
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ui::theme::Icons;

use super::menu::{MenuExit, TreeAction, TreeMenu};

/// Lines around the row list: title, blank, search, separator, status (2),
/// blank, help (2)
const CHROME_LINES: u16 = 9;

/// Convert a keyboard event to a TreeAction.
///
/// While typing a search query, printable keys go into the query.
pub fn key_to_action(key: KeyEvent, searching: bool) -> Option<TreeAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(TreeAction::Quit),
            _ => None,
        };
    }

    if searching {
        return match key.code {
            KeyCode::Char(c) => Some(TreeAction::SearchChar(c)),
            KeyCode::Backspace => Some(TreeAction::SearchBackspace),
            KeyCode::Enter => Some(TreeAction::ApplySearch),
            KeyCode::Esc => Some(TreeAction::Back),
            KeyCode::Up => Some(TreeAction::Up),
            KeyCode::Down => Some(TreeAction::Down),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::PageUp => Some(TreeAction::PageUp),
        KeyCode::PageDown => Some(TreeAction::PageDown),
        KeyCode::Char(' ') => Some(TreeAction::Toggle),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') => Some(TreeAction::Collapse),
        KeyCode::Char('/') => Some(TreeAction::StartSearch),
        KeyCode::Char('m') => Some(TreeAction::ShowMore),
        KeyCode::Char('n') => Some(TreeAction::SelectNone),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Esc => Some(TreeAction::Back),
        KeyCode::Char('q') => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Leaves raw mode and shows the cursor again, also on early return
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        use crossterm::{cursor, execute, terminal};

        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::{
            cursor, execute,
            terminal::{self, ClearType},
        };

        let _ = execute!(
            io::stdout(),
            cursor::Show,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the tree menu interactively until the user confirms or quits
pub fn run_interactive(menu: &mut TreeMenu<'_>, title: &str, icons: Icons) -> io::Result<MenuExit> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    let render_ui = |stdout: &mut io::Stdout, menu: &TreeMenu<'_>, width: usize| -> io::Result<()> {
        execute!(stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        write!(stdout, "{}\r\n\r\n", title)?;
        match menu.render_search_line() {
            Some(line) => write!(stdout, "{}\r\n", line)?,
            None => write!(stdout, "\r\n")?,
        }
        for line in menu.render(icons, width).lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        let rule = if icons.unicode() { "─" } else { "-" };
        write!(stdout, "{}\r\n", rule.repeat(width.clamp(10, 63)))?;
        for line in menu.render_status_bar(icons).lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "\r\n")?;
        for line in menu.render_help_bar().lines() {
            write!(stdout, "{}\r\n", line)?;
        }

        stdout.flush()
    };

    let exit = loop {
        let (width, height) = terminal::size().unwrap_or((80, 24));
        menu.set_viewport(height.saturating_sub(CHROME_LINES) as usize);
        render_ui(&mut stdout, menu, width as usize)?;

        // Wake up for a pending search even without input.
        let ready = match menu.time_left(Instant::now()) {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };
        if !ready {
            menu.tick(Instant::now());
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(action) = key_to_action(key, menu.is_searching()) {
                if let Some(exit) = menu.handle_action(action, Instant::now()) {
                    break exit;
                }
            }
        }
        menu.tick(Instant::now());
    };

    Ok(exit)
}
