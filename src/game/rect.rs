/// Integer axis-aligned rectangle in logical screen pixels.
///
/// `x`/`y` are the top-left corner; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn midtop(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y)
    }

    pub fn set_center(&mut self, (cx, cy): (i32, i32)) {
        self.x = cx - self.w / 2;
        self.y = cy - self.h / 2;
    }

    pub fn set_midtop(&mut self, (cx, top): (i32, i32)) {
        self.x = cx - self.w / 2;
        self.y = top;
    }

    pub fn set_midbottom(&mut self, (cx, bottom): (i32, i32)) {
        self.x = cx - self.w / 2;
        self.y = bottom - self.h;
    }

    /// True when the two rects share a strictly positive area.
    /// Touching edges do not count.
    pub fn colliderect(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn collidepoint(&self, (px, py): (i32, i32)) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}
