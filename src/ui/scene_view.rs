use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
};

use fokus::journey::Stage;
use fokus::scene::Scene;

/// Paint the travel scene (starfield, streaks, planet) across `area`.
/// Purely a projection of `Scene` + `Stage`; all motion lives in `Scene`.
pub fn render(scene: &Scene, stage: &Stage, angry: bool, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 4 {
        return;
    }

    render_stars(scene, stage, area, buf);
    render_planet(scene, stage, angry, area, buf);
}

fn render_stars(scene: &Scene, stage: &Stage, area: Rect, buf: &mut Buffer) {
    let w = area.width as f64;
    let h = area.height as f64;
    let cx = area.x as f64 + w / 2.0;
    let cy = area.y as f64 + h / 2.0;

    let dim_star = Style::default().fg(Color::DarkGray);
    let mid_star = Style::default().fg(Color::Gray);
    let near_star = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let streak_style = Style::default().fg(Color::LightBlue);

    for star in &scene.stars {
        // Perspective divide: shrinking depth spreads the field outwards
        let px = cx + (star.x / star.depth) * w;
        let py = cy + (star.y / star.depth) * h;
        if px < area.x as f64
            || py < area.y as f64
            || px >= (area.x + area.width) as f64
            || py >= (area.y + area.height) as f64
        {
            continue;
        }

        let (symbol, style) = if star.streak {
            let symbol = if stage.streak_length > 0.6 { "━" } else { "╌" };
            (symbol, streak_style)
        } else if star.depth < 0.3 {
            ("✦", near_star)
        } else if star.depth < 0.7 {
            ("•", mid_star)
        } else {
            ("·", dim_star)
        };

        if let Some(cell) = buf.cell_mut((px as u16, py as u16)) {
            cell.set_symbol(symbol);
            cell.set_style(style);
        }
    }
}

fn render_planet(scene: &Scene, stage: &Stage, angry: bool, area: Rect, buf: &mut Buffer) {
    let h = area.height as f64;
    // Apparent radius grows as the journey closes the distance
    let radius = (h * 2.2 / stage.distance).min(h * 0.45);
    if radius < 0.6 {
        return;
    }
    let atmosphere = radius * (1.0 + stage.atmosphere_size) * scene.pulse;

    let cx = area.x as f64 + area.width as f64 / 2.0 + scene.shake * 2.0;
    let cy = area.y as f64 + h * 0.3;

    let (body, core, halo) = if angry {
        (
            Style::default().bg(Color::Red),
            Style::default().bg(Color::LightRed),
            Style::default().fg(Color::LightRed),
        )
    } else {
        (
            Style::default().bg(Color::Blue),
            Style::default().bg(Color::LightBlue),
            Style::default().fg(Color::Cyan),
        )
    };

    let reach = atmosphere.ceil() as i32;
    for dy in -reach..=reach {
        // Terminal cells are roughly twice as tall as wide
        for dx in (-reach * 2)..=(reach * 2) {
            let nx = dx as f64 / 2.0;
            let ny = dy as f64;
            let dist2 = nx * nx + ny * ny;

            let px = cx + dx as f64;
            let py = cy + dy as f64;
            if px < area.x as f64
                || py < area.y as f64
                || px >= (area.x + area.width) as f64
                || py >= (area.y + area.height) as f64
            {
                continue;
            }

            let cell = match buf.cell_mut((px as u16, py as u16)) {
                Some(cell) => cell,
                None => continue,
            };

            if dist2 <= (radius * 0.45).powi(2) {
                cell.set_symbol(" ");
                cell.set_style(core);
            } else if dist2 <= radius * radius {
                cell.set_symbol(" ");
                cell.set_style(body);
            } else if dist2 <= atmosphere * atmosphere {
                cell.set_symbol("░");
                cell.set_style(halo);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fokus::journey;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(progress: f64, angry: bool, width: u16, height: u16) -> String {
        let scene = Scene::new();
        let stage = journey::params_at(progress);
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(&scene, &stage, angry, f.area(), f.buffer_mut()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_draws_something() {
        let content = draw(0.0, false, 80, 24);
        assert!(
            content.chars().any(|c| c != ' '),
            "scene should paint at least one cell"
        );
    }

    #[test]
    fn test_render_end_of_journey() {
        // Close distance means a large planet; halo cells should appear
        let content = draw(1.0, false, 80, 24);
        assert!(content.contains('░'));
    }

    #[test]
    fn test_render_tiny_area_is_a_no_op() {
        let content = draw(0.5, true, 3, 2);
        assert!(content.chars().all(|c| c == ' '));
    }

    #[test]
    fn test_render_angry_does_not_panic() {
        let mut scene = Scene::new();
        let stage = journey::params_at(0.9);
        scene.advance(0.1, &stage, true, true);

        let backend = TestBackend::new(40, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render(&scene, &stage, true, f.area(), f.buffer_mut()))
            .unwrap();
    }
}
