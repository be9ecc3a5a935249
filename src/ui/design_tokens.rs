// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual constants shared by every view of the gallery.

## Organization

- **Palette**: Base colors (NASA blue and red on a deep space background)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use apod_gallery::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let scrim = Color {
    a: opacity::SCRIM,
    ..palette::SPACE_950
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Deep space backgrounds
    pub const SPACE_950: Color = Color::from_rgb(0.02, 0.03, 0.08);
    pub const SPACE_800: Color = Color::from_rgb(0.09, 0.12, 0.23);

    // Grayscale text
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.55, 0.57, 0.62);
    pub const GRAY_200: Color = Color::from_rgb(0.78, 0.8, 0.84);

    // NASA brand colors
    pub const NASA_BLUE: Color = Color::from_rgb(0.043, 0.239, 0.569); // #0B3D91
    pub const NASA_BLUE_LIGHT: Color = Color::from_rgb(0.25, 0.45, 0.8);
    pub const NASA_RED: Color = Color::from_rgb(0.988, 0.239, 0.129); // #FC3D21

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    /// Modal background scrim
    pub const SCRIM: f32 = 0.85;

    /// Surface background - cards and panels
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Width of a date text field (fits `YYYY-MM-DD` plus padding)
    pub const DATE_INPUT_WIDTH: f32 = 140.0;

    // Gallery cards
    pub const GALLERY_ITEM_WIDTH: f32 = 280.0;
    pub const GALLERY_THUMB_HEIGHT: f32 = 200.0;

    // Detail modal
    pub const MODAL_MAX_WIDTH: f32 = 760.0;
    pub const MODAL_MAX_HEIGHT: f32 = 640.0;
    pub const MODAL_IMAGE_HEIGHT: f32 = 380.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Page heading
    pub const TITLE_LG: f32 = 30.0;

    /// Modal title
    pub const TITLE_MD: f32 = 20.0;

    /// Card titles, section headers
    pub const TITLE_SM: f32 = 16.0;

    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - dates, hints, inline errors
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::SCRIM > 0.5 && opacity::SCRIM < 1.0);
    assert!(opacity::SURFACE > opacity::SCRIM && opacity::SURFACE < 1.0);

    assert!(sizing::MODAL_IMAGE_HEIGHT < sizing::MODAL_MAX_HEIGHT);
    assert!(sizing::GALLERY_THUMB_HEIGHT < sizing::MODAL_IMAGE_HEIGHT);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
