//! Render the full UI into ratatui's TestBackend and inspect the text

use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use medicare::app::{App, Tab};
use medicare::config::Config;
use medicare::input::handle_mouse;
use medicare::ui::{self, layout};

const PATIENTS_MARK: &str = "Всего активных: 4";
const REMINDERS_MARK: &str = "Сегодня, 24 ноября 2024";
const SCHEDULE_MARK: &str = "Ваши записи на сегодня";

fn render(app: &App) -> String {
    render_sized(app, 140, 45)
}

fn render_sized(app: &App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut out = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            out.push_str(buffer.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

fn panels_shown(screen: &str) -> usize {
    [PATIENTS_MARK, REMINDERS_MARK, SCHEDULE_MARK]
        .iter()
        .filter(|mark| screen.contains(**mark))
        .count()
}

#[test]
fn test_initial_screen_shows_patients_placeholder() {
    let app = App::new(&Config::default());
    let screen = render(&app);
    assert!(screen.contains(PATIENTS_MARK));
    assert!(screen.contains("Выберите пациента для просмотра"));
    assert!(!screen.contains("Карта пациента"));
    assert_eq!(panels_shown(&screen), 1);
}

#[test]
fn test_exactly_one_panel_per_tab() {
    let mut app = App::new(&Config::default());
    for (tab, mark) in [
        (Tab::Patients, PATIENTS_MARK),
        (Tab::Reminders, REMINDERS_MARK),
        (Tab::Schedule, SCHEDULE_MARK),
    ] {
        app.select_tab(tab);
        let screen = render(&app);
        assert!(screen.contains(mark), "{tab:?} missing its panel");
        assert_eq!(panels_shown(&screen), 1, "{tab:?} shows extra panels");
    }
}

#[test]
fn test_detail_reflects_selected_patient() {
    let mut app = App::new(&Config::default());
    app.select_patient("2");
    let screen = render(&app);
    assert!(screen.contains("ID: 2 • 32 лет • Ж"));
    assert!(screen.contains("[Диабет 2 типа]"));
    assert!(screen.contains("Наследственная предрасположенность"));
    assert!(screen.contains("История болезни"));
    assert!(screen.contains("140/90"));
    assert!(!screen.contains("Выберите пациента для просмотра"));

    app.select_patient("4");
    let screen = render(&app);
    assert!(screen.contains("ID: 4 • 28 лет • Ж"));
    assert!(!screen.contains("ID: 2 •"));
}

#[test]
fn test_reminders_and_schedule_content() {
    let mut app = App::new(&Config::default());
    app.select_tab(Tab::Reminders);
    let screen = render(&app);
    assert!(screen.contains("Смирнова А.И."));
    assert!(screen.contains("[15:30]"));
    assert!(screen.contains("Напомнить об инсулине перед обедом"));

    app.select_tab(Tab::Schedule);
    let screen = render(&app);
    assert!(screen.contains("Свободное окно"));
    assert!(screen.contains("Записать"));
    assert!(screen.contains("Петрова М.А."));
    assert!(screen.contains("Обед"));
}

#[test]
fn test_sidebar_profile() {
    let app = App::new(&Config::default());
    let screen = render(&app);
    assert!(screen.contains("MediCare"));
    assert!(screen.contains("Врачебная система"));
    assert!(screen.contains(" ДС "));
    assert!(screen.contains("Терапевт"));
}

#[test]
fn test_help_overlay() {
    let mut app = App::new(&Config::default());
    app.help_open = true;
    let screen = render(&app);
    assert!(screen.contains("Помощь"));
    assert!(screen.contains(":export csv"));
}

#[test]
fn test_click_on_scrolled_roster_selects_visible_patient() {
    let size = Rect::new(0, 0, 120, 18);
    let mut app = App::new(&Config::default());
    app.patients.cursor = 3;

    let screen = render_sized(&app, size.width, size.height);
    let list = layout::roster_list(&layout::areas(size));
    let top_row = screen.lines().nth(usize::from(list.y)).unwrap();
    assert!(top_row.contains("Смирнова Анна Ивановна"), "top row: {top_row}");
    assert!(!screen.contains("Иванов Петр Сергеевич"));

    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: list.x + 4,
        row: list.y,
        modifiers: KeyModifiers::NONE,
    };
    handle_mouse(&mut app, click, size);
    assert_eq!(app.selected_patient().map(|p| p.id), Some("2"));
}
