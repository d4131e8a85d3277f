use clap::ValueEnum;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors used by the terminal front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub pending: Color,
    pub correct: Color,
    pub wrong: Color,
    pub highlight: Color,
    pub accent: Color,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                background: Color::Rgb(250, 250, 250),
                text: Color::Rgb(40, 40, 40),
                pending: Color::Rgb(140, 140, 140),
                correct: Color::Rgb(0, 135, 60),
                wrong: Color::Rgb(200, 30, 30),
                highlight: Color::Rgb(220, 220, 220),
                accent: Color::Rgb(30, 90, 200),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(30, 30, 36),
                text: Color::Rgb(230, 230, 230),
                pending: Color::Rgb(120, 120, 130),
                correct: Color::Rgb(90, 210, 120),
                wrong: Color::Rgb(240, 90, 90),
                highlight: Color::Rgb(60, 60, 72),
                accent: Color::Rgb(240, 190, 60),
            },
        }
    }
}
