#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Point at `radius` from `self` in direction `angle` (radians, y down).
    pub fn polar_offset(self, radius: f32, angle: f32) -> Vec2 {
        Vec2 {
            x: self.x + radius * angle.cos(),
            y: self.y + radius * angle.sin(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(self) -> Vec2 {
        Vec2 {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }

    pub fn min_side(self) -> f32 {
        self.width.min(self.height)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn from_size(size: Size) -> Self {
        Rect {
            x: 0.0,
            y: 0.0,
            w: size.width,
            h: size.height,
        }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }

    pub fn translate(self, offset: Vec2) -> Rect {
        Rect {
            x: self.x + offset.x,
            y: self.y + offset.y,
            ..self
        }
    }
}
