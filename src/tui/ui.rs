use crate::core::state::App;
use crate::core::view::{INPUT_PLACEHOLDER, View, spinner_frame};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::input_box::INPUT_HEIGHT;
use crate::tui::components::{Headline, InputBox, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Widest the body gets; wider terminals leave the rest empty.
const BODY_MAX_WIDTH: u16 = 60;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState, spinner_index: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, _spacer, body_area, hint_area] = layout.areas(frame.area());

    TitleBar::new(
        app.provider.name().to_string(),
        app.status_message.clone(),
        tui.has_credential,
    )
    .render(frame, title_area);

    let view = View::of(app);
    draw_body(frame, body_area, &view, spinner_frame(spinner_index));

    frame.render_widget(
        Span::styled(view.hint, Style::default().fg(Color::DarkGray)),
        hint_area,
    );
}

fn draw_body(frame: &mut Frame, area: Rect, view: &View, spinner: &str) {
    use Constraint::{Length, Min};
    let width = area.width.min(BODY_MAX_WIDTH);
    let area = Rect { width, ..area };

    let input_height = if view.input.is_some() { INPUT_HEIGHT } else { 0 };
    let layout = Layout::vertical([Length(2), Length(input_height), Min(0)]);
    let [headline_area, input_area, _rest] = layout.areas(area);

    Headline { view, spinner }.render(frame, headline_area);

    if let Some(text) = &view.input {
        InputBox::new(text, INPUT_PLACEHOLDER).render(frame, input_area);
    }
}
