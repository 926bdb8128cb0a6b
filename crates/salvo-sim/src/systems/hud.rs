//! Status line rendering.

use std::fmt::Write;

use salvo_core::constants::{COLOR_STATUS, STATUS_IMPACTS_X, STATUS_SHOTS_X, STATUS_Y};
use salvo_core::types::Point;

use crate::platform::Surface;
use crate::score::ScoreState;

/// Draw "Shot: N" and "Impacted: N". `buf` is reused across frames.
pub fn draw_status(score: &ScoreState, buf: &mut String, surface: &mut impl Surface) {
    buf.clear();
    let _ = write!(buf, "Shot: {}", score.shots_fired);
    surface.draw_text(Point::new(STATUS_SHOTS_X, STATUS_Y), buf, COLOR_STATUS);

    buf.clear();
    let _ = write!(buf, "Impacted: {}", score.impacts);
    surface.draw_text(Point::new(STATUS_IMPACTS_X, STATUS_Y), buf, COLOR_STATUS);
}
