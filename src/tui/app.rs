use std::io::Write;

use anyhow::Result;
use chrono::{Local, Timelike};
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::ai::{self, AiHandle, AiResponse, GeminiClient};
use crate::config::AppConfig;
use crate::models::ScreenId;
use crate::screens::{AmalScreen, DhikrScreen, DuaScreen, HadithScreen, HomeScreen};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::{amal, dhikr, dua, hadith, header, home, navbar, statusbar};
use crate::utils::hijri::today_hijri_string;

/// The one screen currently mounted. Switching screens drops the old
/// machine whole and builds a fresh one, so no local state survives
/// navigation (a remounted Home refetches its verse, a remounted tasbih
/// starts at zero).
pub enum ActiveScreen {
    Home(HomeScreen),
    Dua(DuaScreen),
    Dhikr(DhikrScreen),
    Hadith(HadithScreen),
    Amal(AmalScreen),
}

impl ActiveScreen {
    pub fn id(&self) -> ScreenId {
        match self {
            ActiveScreen::Home(_) => ScreenId::Home,
            ActiveScreen::Dua(_) => ScreenId::Dua,
            ActiveScreen::Dhikr(_) => ScreenId::Dhikr,
            ActiveScreen::Hadith(_) => ScreenId::Hadith,
            ActiveScreen::Amal(_) => ScreenId::Amal,
        }
    }
}

pub struct App {
    pub active: ActiveScreen,
    pub config: AppConfig,
    pub should_quit: bool,
    pub show_help: bool,
    pub hijri_str: String,
    /// Bumped on every screen switch. AI responses carry the token they
    /// were issued under; a mismatch means the requesting screen is gone.
    mount: u64,
    ai: AiHandle,
}

impl App {
    pub fn new(config: AppConfig, ai: AiHandle) -> Self {
        let hijri_str = today_hijri_string(config.display.hijri_offset);
        let mut app = App {
            active: ActiveScreen::Home(HomeScreen::new(Local::now().hour())),
            config,
            should_quit: false,
            show_help: false,
            hijri_str,
            mount: 1,
            ai,
        };
        app.ai.fetch_verse(app.mount);
        app
    }

    /// Switch the active screen. Re-selecting the current screen is a
    /// no-op — no remount, no duplicate verse request.
    pub fn set_screen(&mut self, id: ScreenId) {
        if self.active.id() == id {
            return;
        }
        self.mount = self.mount.wrapping_add(1);
        self.active = match id {
            ScreenId::Home => {
                let screen = HomeScreen::new(Local::now().hour());
                self.ai.fetch_verse(self.mount);
                ActiveScreen::Home(screen)
            }
            ScreenId::Dua => ActiveScreen::Dua(DuaScreen::new()),
            ScreenId::Dhikr => ActiveScreen::Dhikr(DhikrScreen::new(
                self.config.dhikr.goal,
                self.config.dhikr.alt_goal,
            )),
            ScreenId::Hadith => ActiveScreen::Hadith(HadithScreen::new()),
            ScreenId::Amal => ActiveScreen::Amal(AmalScreen::new()),
        };
    }

    /// Route a resolved AI response to whoever is still interested.
    /// Requests are never cancelled, so stale arrivals are expected; the
    /// mount token drops responses for departed or remounted screens and
    /// the per-screen sequence handles superseded explanations.
    pub fn handle_ai(&mut self, response: AiResponse) {
        match response {
            AiResponse::Verse { mount, verse } => {
                if mount != self.mount {
                    return;
                }
                if let ActiveScreen::Home(screen) = &mut self.active {
                    screen.on_verse(verse);
                }
            }
            AiResponse::Explanation { mount, seq, text } => {
                if mount != self.mount {
                    return;
                }
                if let ActiveScreen::Hadith(screen) = &mut self.active {
                    screen.on_explanation(seq, text);
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        // Only handle actual key presses — ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        // The sharh sheet is modal: any key closes it, nothing reaches
        // the screen underneath
        if let ActiveScreen::Hadith(screen) = &mut self.active {
            if screen.overlay_open() {
                screen.dismiss();
                return;
            }
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = (c as usize) - ('1' as usize);
                self.set_screen(ScreenId::all()[idx]);
            }
            KeyCode::Tab | KeyCode::Right => {
                self.set_screen(self.active.id().next());
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.set_screen(self.active.id().prev());
            }
            _ => self.handle_screen_key(key),
        }
    }

    fn handle_screen_key(&mut self, key: crossterm::event::KeyEvent) {
        match &mut self.active {
            ActiveScreen::Dhikr(screen) => match key.code {
                KeyCode::Char(' ') | KeyCode::Enter => {
                    screen.tap();
                    if self.config.dhikr.bell {
                        ring_bell();
                    }
                }
                KeyCode::Char('r') => screen.reset(),
                KeyCode::Char('g') => screen.toggle_goal(),
                _ => {}
            },
            ActiveScreen::Hadith(screen) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => screen.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => screen.select_next(),
                KeyCode::Enter | KeyCode::Char('e') => {
                    if let Some(req) = screen.explain() {
                        self.ai.explain(self.mount, req.seq, req.arabic, req.translation);
                    }
                }
                _ => {}
            },
            ActiveScreen::Amal(screen) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => screen.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => screen.select_next(),
                KeyCode::Char(' ') | KeyCode::Enter => screen.toggle_focused(),
                _ => {}
            },
            // Home and Dua take no screen-local keys
            ActiveScreen::Home(_) | ActiveScreen::Dua(_) => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // header
                Constraint::Min(0),    // active screen
                Constraint::Length(3), // bottom navigation
                Constraint::Length(1), // key hints
            ])
            .split(area);

        header::render(frame, chunks[0], &self.hijri_str);

        match &self.active {
            ActiveScreen::Home(screen) => home::render(frame, chunks[1], screen),
            ActiveScreen::Dua(screen) => dua::render(frame, chunks[1], screen),
            ActiveScreen::Dhikr(screen) => dhikr::render(frame, chunks[1], screen),
            ActiveScreen::Hadith(screen) => hadith::render(frame, chunks[1], screen),
            ActiveScreen::Amal(screen) => amal::render(frame, chunks[1], screen),
        }

        navbar::render(frame, chunks[2], self.active.id());
        statusbar::render(frame, chunks[3], self.active.id());

        if let ActiveScreen::Hadith(screen) = &self.active {
            if screen.overlay_open() {
                hadith::render_overlay(frame, screen);
            }
        }

        if self.show_help {
            self.draw_help_overlay(frame);
        }
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 4,
            width: area.width / 2,
            height: area.height / 2,
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::emerald().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [1-5]        ", theme::emerald()),
                Span::styled("Jump to a screen", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Tab] / [→]  ", theme::emerald()),
                Span::styled("Next screen", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [←]          ", theme::emerald()),
                Span::styled("Previous screen", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [space]      ", theme::emerald()),
                Span::styled("Tasbih tap / toggle amal", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [r]          ", theme::emerald()),
                Span::styled("Reset tasbih count", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [g]          ", theme::emerald()),
                Span::styled("Toggle tasbih goal", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [e]          ", theme::emerald()),
                Span::styled("Explain focused hadith", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]          ", theme::emerald()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc]        ", theme::emerald()),
                Span::styled("Quit", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::emerald()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::emerald())
            .style(theme::surface());

        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, popup_area);
    }
}

/// Best-effort tap feedback; a terminal without a bell is not an error.
fn ring_bell() {
    let mut out = std::io::stdout();
    let _ = out.write_all(b"\x07");
    let _ = out.flush();
}

/// Run the TUI event loop.
pub fn run(config: AppConfig) -> Result<()> {
    let client = GeminiClient::new(
        config.ai.resolved_api_key(),
        config.ai.model.clone(),
        config.ai.base_url.clone(),
    );
    let (handle, ai_rx) = ai::worker::spawn(client);
    let mut app = App::new(config, handle);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(250, ai_rx);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            Event::Ai(response) => {
                app.handle_ai(response);
            }
            // Nothing to recompute on tick; the redraw at the top of the
            // loop is the point
            Event::Tick => {}
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::AiRequest;
    use crate::models::Verse;
    use crate::screens::VerseState;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use std::sync::mpsc;

    fn test_app() -> (App, mpsc::Receiver<AiRequest>) {
        let (handle, rx) = ai::worker::channel();
        (App::new(AppConfig::default(), handle), rx)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn verse() -> Verse {
        Verse {
            arabic: "وَاللَّهُ مَعَ الصَّابِرِينَ".to_string(),
            translation: "And Allah is with the patient.".to_string(),
            reference: "Quran 2:249".to_string(),
        }
    }

    #[test]
    fn starts_on_home_and_requests_a_verse() {
        let (app, rx) = test_app();
        assert_eq!(app.active.id(), ScreenId::Home);
        assert!(matches!(rx.try_recv(), Ok(AiRequest::VerseOfDay { .. })));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn reselecting_the_active_screen_does_not_remount() {
        let (mut app, rx) = test_app();
        let _ = rx.try_recv();

        app.set_screen(ScreenId::Dhikr);
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Char(' ')));
        }
        app.set_screen(ScreenId::Dhikr);

        match &app.active {
            ActiveScreen::Dhikr(s) => assert_eq!(s.count, 3),
            _ => panic!("expected dhikr screen"),
        }

        // Home → Home must not refetch either
        app.set_screen(ScreenId::Home);
        let _ = rx.try_recv();
        app.set_screen(ScreenId::Home);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn switching_away_and_back_resets_screen_state() {
        let (mut app, _rx) = test_app();
        app.set_screen(ScreenId::Dhikr);
        for _ in 0..5 {
            app.handle_key(key(KeyCode::Char(' ')));
        }
        app.set_screen(ScreenId::Amal);
        app.set_screen(ScreenId::Dhikr);
        match &app.active {
            ActiveScreen::Dhikr(s) => assert_eq!(s.count, 0),
            _ => panic!("expected dhikr screen"),
        }
    }

    #[test]
    fn each_home_mount_issues_its_own_fetch() {
        let (mut app, rx) = test_app();
        let _ = rx.try_recv();
        app.set_screen(ScreenId::Dua);
        app.set_screen(ScreenId::Home);
        assert!(matches!(rx.try_recv(), Ok(AiRequest::VerseOfDay { .. })));
    }

    #[test]
    fn verse_for_an_old_mount_is_dropped() {
        let (mut app, rx) = test_app();
        let first_mount = match rx.try_recv() {
            Ok(AiRequest::VerseOfDay { mount }) => mount,
            other => panic!("unexpected request: {:?}", other),
        };

        // remount Home before the first response lands
        app.set_screen(ScreenId::Dua);
        app.set_screen(ScreenId::Home);
        let second_mount = match rx.try_recv() {
            Ok(AiRequest::VerseOfDay { mount }) => mount,
            other => panic!("unexpected request: {:?}", other),
        };
        assert_ne!(first_mount, second_mount);

        app.handle_ai(AiResponse::Verse {
            mount: first_mount,
            verse: Some(verse()),
        });
        match &app.active {
            ActiveScreen::Home(s) => assert_eq!(s.verse, VerseState::Loading),
            _ => panic!("expected home screen"),
        }

        app.handle_ai(AiResponse::Verse {
            mount: second_mount,
            verse: Some(verse()),
        });
        match &app.active {
            ActiveScreen::Home(s) => assert_eq!(s.verse, VerseState::Loaded(verse())),
            _ => panic!("expected home screen"),
        }
    }

    #[test]
    fn verse_landing_after_navigation_does_not_touch_other_screens() {
        let (mut app, rx) = test_app();
        let mount = match rx.try_recv() {
            Ok(AiRequest::VerseOfDay { mount }) => mount,
            other => panic!("unexpected request: {:?}", other),
        };

        app.set_screen(ScreenId::Dhikr);
        app.handle_ai(AiResponse::Verse {
            mount,
            verse: Some(verse()),
        });
        match &app.active {
            ActiveScreen::Dhikr(s) => assert_eq!(s.count, 0),
            _ => panic!("expected dhikr screen"),
        }
    }

    #[test]
    fn explanation_flows_through_the_shell() {
        let (mut app, rx) = test_app();
        let _ = rx.try_recv();

        app.set_screen(ScreenId::Hadith);
        app.handle_key(key(KeyCode::Char('e')));

        let (mount, seq) = match rx.try_recv() {
            Ok(AiRequest::Explain { mount, seq, .. }) => (mount, seq),
            other => panic!("unexpected request: {:?}", other),
        };

        app.handle_ai(AiResponse::Explanation {
            mount,
            seq,
            text: "Intentions are the measure of deeds.".to_string(),
        });
        match &app.active {
            ActiveScreen::Hadith(s) => {
                assert!(s.overlay_open());
                assert!(!s.loading);
                assert_eq!(
                    s.explanation.as_deref(),
                    Some("Intentions are the measure of deeds.")
                );
            }
            _ => panic!("expected hadith screen"),
        }
    }

    #[test]
    fn any_key_dismisses_the_sharh_overlay() {
        let (mut app, rx) = test_app();
        let _ = rx.try_recv();

        app.set_screen(ScreenId::Hadith);
        app.handle_key(key(KeyCode::Char('e')));
        let _ = rx.try_recv();

        // a key that would otherwise navigate only dismisses the modal
        app.handle_key(key(KeyCode::Char('3')));
        match &app.active {
            ActiveScreen::Hadith(s) => {
                assert!(!s.overlay_open());
                assert_eq!(s.explanation, None);
            }
            _ => panic!("expected hadith screen"),
        }
        assert_eq!(app.active.id(), ScreenId::Hadith);
    }

    #[test]
    fn late_explanation_after_dismiss_is_dropped() {
        let (mut app, rx) = test_app();
        let _ = rx.try_recv();

        app.set_screen(ScreenId::Hadith);
        app.handle_key(key(KeyCode::Char('e')));
        let (mount, seq) = match rx.try_recv() {
            Ok(AiRequest::Explain { mount, seq, .. }) => (mount, seq),
            other => panic!("unexpected request: {:?}", other),
        };

        app.handle_key(key(KeyCode::Esc)); // dismisses, does not quit
        assert!(!app.should_quit);

        app.handle_ai(AiResponse::Explanation {
            mount,
            seq,
            text: "too late".to_string(),
        });
        match &app.active {
            ActiveScreen::Hadith(s) => {
                assert!(!s.overlay_open());
                assert_eq!(s.explanation, None);
            }
            _ => panic!("expected hadith screen"),
        }
    }

    #[test]
    fn number_keys_and_tab_navigate() {
        let (mut app, _rx) = test_app();
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.active.id(), ScreenId::Dhikr);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.active.id(), ScreenId::Hadith);
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.active.id(), ScreenId::Dhikr);
    }

    #[test]
    fn help_overlay_swallows_screen_keys() {
        let (mut app, _rx) = test_app();
        app.set_screen(ScreenId::Dhikr);
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);

        app.handle_key(key(KeyCode::Char(' ')));
        match &app.active {
            ActiveScreen::Dhikr(s) => assert_eq!(s.count, 0),
            _ => panic!("expected dhikr screen"),
        }

        app.handle_key(key(KeyCode::Char('?')));
        assert!(!app.show_help);
    }

    #[test]
    fn esc_quits_outside_overlays() {
        let (mut app, _rx) = test_app();
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }
}
