// SPDX-License-Identifier: MPL-2.0
//! Loading indicator: a small body circling an orbit ring, drawn on a Canvas.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Number of fading dots trailing the orbiting body.
const TRAIL_LEN: usize = 6;

/// Angle between two trail dots, in radians.
const TRAIL_STEP: f32 = PI / 14.0;

/// Spinner whose body sits at `phase` radians on its orbit.
#[derive(Debug, Clone, Copy)]
pub struct OrbitSpinner {
    phase: f32,
    color: Color,
    size: f32,
}

impl OrbitSpinner {
    #[must_use]
    pub fn new(color: Color, phase: f32) -> Self {
        Self {
            phase: phase.rem_euclid(TAU),
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Position of the body (or a trail dot `lag` radians behind it).
    fn point_on_orbit(&self, center: Point, radius: f32, lag: f32) -> Point {
        // Zero phase starts at the top of the ring.
        let angle = self.phase - lag - PI / 2.0;
        Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for OrbitSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let body_radius = frame.width().min(frame.height()) / 10.0;
        let orbit_radius = frame.width().min(frame.height()) / 2.0 - body_radius - 1.0;

        frame.stroke(
            &Path::circle(center, orbit_radius),
            Stroke::default().with_width(1.5).with_color(Color {
                a: 0.25,
                ..self.color
            }),
        );

        #[allow(clippy::cast_precision_loss)]
        // TRAIL_LEN is a small constant
        for step in (1..=TRAIL_LEN).rev() {
            let fade = 1.0 - step as f32 / (TRAIL_LEN as f32 + 1.0);
            let dot = self.point_on_orbit(center, orbit_radius, step as f32 * TRAIL_STEP);
            frame.fill(
                &Path::circle(dot, body_radius * fade),
                Color {
                    a: fade * 0.6,
                    ..self.color
                },
            );
        }

        frame.fill(
            &Path::circle(self.point_on_orbit(center, orbit_radius, 0.0), body_radius),
            self.color,
        );

        vec![frame.into_geometry()]
    }
}
