use vek::Vec2;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const BLACK: Color = Color(0, 0, 0);
    pub const WHITE: Color = Color(255, 255, 255);
    pub const RED: Color = Color(230, 41, 55);
    pub const GREEN: Color = Color(0, 228, 48);

    /// 0RGB, the layout minifb expects.
    pub fn pack(self) -> u32 {
        u32::from_be_bytes([0, self.0, self.1, self.2])
    }
}

/// Software framebuffer. Row 0 is the top of the window, y grows downward.
/// Every primitive clips to the buffer, so drawing never fails.
pub struct Canvas {
    buf: Vec<u32>,
    width: usize,
    height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buf: vec![0; width * height],
            width,
            height,
        }
    }

    pub fn buffer(&self) -> &[u32] {
        &self.buf
    }

    pub fn clear(&mut self, color: Color) {
        self.buf.fill(color.pack());
    }

    /// Out-of-bounds pixels are dropped.
    pub fn set(&mut self, pos: Vec2<i32>, color: Color) {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width as i32 || pos.y >= self.height as i32 {
            return;
        }
        self.buf[pos.y as usize * self.width + pos.x as usize] = color.pack();
    }

    /// Bresenham between the endpoints rounded to pixel centers.
    pub fn line(&mut self, from: Vec2<f32>, to: Vec2<f32>, color: Color) {
        let to: Vec2<i32> = to.round().as_();
        let mut pos: Vec2<i32> = from.round().as_();

        let dx = (to.x - pos.x).abs();
        let dy = -(to.y - pos.y).abs();
        let step = Vec2::new(
            if pos.x < to.x { 1 } else { -1 },
            if pos.y < to.y { 1 } else { -1 },
        );
        let mut err = dx + dy;

        loop {
            self.set(pos, color);
            if pos == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                pos.x += step.x;
            }
            if e2 <= dx {
                err += dx;
                pos.y += step.y;
            }
        }
    }

    /// Scan the bounding box, keep pixels within `radius` of the center.
    pub fn fill_circle(&mut self, center: Vec2<f32>, radius: f32, color: Color) {
        let min: Vec2<i32> = (center - radius).floor().as_();
        let max: Vec2<i32> = (center + radius).ceil().as_();
        let r2 = radius * radius;
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                let p = Vec2::new(x, y);
                if p.as_::<f32>().distance_squared(center) <= r2 {
                    self.set(p, color);
                }
            }
        }
    }

    /// Half-open pixel rect `[x, x + w) x [y, y + h)`.
    pub fn fill_rect(&mut self, pos: Vec2<f32>, size: Vec2<f32>, color: Color) {
        let min: Vec2<i32> = pos.round().as_();
        let max = min + size.round().as_::<i32>();
        for y in min.y..max.y {
            for x in min.x..max.x {
                self.set(Vec2::new(x, y), color);
            }
        }
    }
}

/// Filled square of side `2 * radius` centred on `point`.
pub fn draw_marker(canvas: &mut Canvas, point: Vec2<f32>, radius: f32, color: Color) {
    canvas.fill_rect(point - radius, Vec2::broadcast(radius * 2.0), color);
}
