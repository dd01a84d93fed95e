//! On-screen text: stats, menu and end-of-run banners
//!
//! Positions are in pixels with the origin at the bottom-left corner of the
//! window.

use asteroida_engine::foundation::math::{Vec2, Vec3};
use asteroida_engine::render::{BackendResult, RenderBackend, TextColor};

use crate::config::HudConfig;
use crate::menu::{MenuOption, Menu};

const STATS_SCALE: f32 = 0.5;
const TITLE_SCALE: f32 = 2.0;
const LEFT_MARGIN: f32 = 20.0;
const TITLE_OFFSET_X: f32 = 340.0;
const POINTS_OFFSET_X: f32 = 300.0;

fn yellow() -> TextColor {
    Vec3::new(1.0, 1.0, 0.0)
}

fn selected_color() -> TextColor {
    Vec3::new(0.0, 1.0, 0.0)
}

fn unselected_color() -> TextColor {
    Vec3::new(1.0, 1.0, 1.0)
}

/// Lays out text for a window of fixed size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    width: f32,
    height: f32,
}

impl Hud {
    /// Create a layout for the configured window
    pub fn new(config: &HudConfig) -> Self {
        Self {
            width: config.window_width,
            height: config.window_height,
        }
    }

    /// Points and lives in the top-left corner
    pub fn draw_stats<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        points: u32,
        lives: u32,
    ) -> BackendResult<()> {
        backend.draw_text(
            &format!("Points: {points}"),
            Vec2::new(LEFT_MARGIN, self.height - 20.0),
            STATS_SCALE,
            yellow(),
        )?;
        backend.draw_text(
            &format!("Lives: {lives}"),
            Vec2::new(LEFT_MARGIN, self.height - 80.0),
            STATS_SCALE,
            yellow(),
        )
    }

    /// Menu entries, the selected one highlighted
    pub fn draw_menu<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        menu: &Menu,
    ) -> BackendResult<()> {
        let x = self.width / 2.0 - TITLE_OFFSET_X;
        let rows = [self.height / 2.0 + 60.0, self.height / 2.0 - 60.0];

        for (option, y) in MenuOption::ALL.into_iter().zip(rows) {
            let color = if option == menu.selected() {
                selected_color()
            } else {
                unselected_color()
            };
            backend.draw_text(option.label(), Vec2::new(x, y), TITLE_SCALE, color)?;
        }
        Ok(())
    }

    /// Centered title with the final points beneath it
    pub fn draw_banner<B: RenderBackend + ?Sized>(
        &self,
        backend: &mut B,
        title: &str,
        points: u32,
    ) -> BackendResult<()> {
        let center_y = self.height / 2.0;
        backend.draw_text(
            title,
            Vec2::new(self.width / 2.0 - TITLE_OFFSET_X, center_y),
            TITLE_SCALE,
            yellow(),
        )?;
        backend.draw_text(
            &format!("Points: {points}"),
            Vec2::new(self.width / 2.0 - POINTS_OFFSET_X, center_y - 80.0),
            TITLE_SCALE,
            yellow(),
        )
    }
}
