//! Minimap projection: maps tile centers and the current viewport from
//! canvas coordinates into the fixed-size minimap widget.

/// A width/height pair in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Position and size of one tile on the scrollable canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TileGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Hidden tiles produce no dot but remain part of the page.
    pub hidden: bool,
}

impl TileGeometry {
    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }
}

/// One projection cycle's output. The dot set is rebuilt from scratch every
/// cycle; nothing is diffed against the previous frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Projection {
    pub dots: Vec<Point>,
    pub viewport: Rect,
}

/// A zero canvas axis (page not laid out yet) yields scale 0 on that axis
/// rather than NaN.
fn scale_axis(minimap: f64, canvas: f64) -> f64 {
    if canvas > 0.0 { minimap / canvas } else { 0.0 }
}

fn clamp_axis(pos: f64, minimap: f64, rect: f64) -> f64 {
    pos.min(minimap - rect).max(0.0)
}

/// Projects every non-hidden tile center and the current viewport rectangle
/// onto the minimap. Pure: identical inputs yield identical output.
pub fn project(
    tiles: &[TileGeometry],
    canvas: Extent,
    minimap: Extent,
    scroll: Offset,
    window: Extent,
) -> Projection {
    let scale_x = scale_axis(minimap.width, canvas.width);
    let scale_y = scale_axis(minimap.height, canvas.height);

    let dots = tiles
        .iter()
        .filter(|t| !t.hidden)
        .map(|t| {
            let c = t.center();
            Point {
                x: c.x * scale_x,
                y: c.y * scale_y,
            }
        })
        .collect();

    let rect_w = window.width * scale_x;
    let rect_h = window.height * scale_y;
    let viewport = Rect {
        left: clamp_axis(scroll.x * scale_x, minimap.width, rect_w),
        top: clamp_axis(scroll.y * scale_y, minimap.height, rect_h),
        width: rect_w,
        height: rect_h,
    };

    Projection { dots, viewport }
}
