use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub border: Color,
    pub total: Color,
    pub positive: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(220, 220, 220),
            dim: Color::Rgb(140, 140, 140),
            accent: Color::Rgb(80, 160, 160),
            border: Color::Rgb(70, 80, 90),
            total: Color::Rgb(90, 170, 90),
            positive: Color::Rgb(110, 190, 110),
            warning: Color::Rgb(220, 170, 60),
            error: Color::Rgb(200, 80, 80),
        }
    }
}
