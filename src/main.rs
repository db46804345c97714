use std::time::Duration;

use log::info;
use minifb::{Key, Window, WindowOptions};
use vek::Vec2;

use draw::{Canvas, Color};
use pendulum::{Pendulum, Segment, Weight};

pub mod draw;
pub mod pendulum;
pub mod util;

const W: usize = 1280;
const H: usize = 720;
const TARGET_FPS: u64 = 280;

fn main() -> Result<(), minifb::Error> {
    env_logger::init();

    let mut win = Window::new("Double Pendulum", W, H, WindowOptions::default())?;
    win.limit_update_rate(Some(Duration::from_micros(1_000_000 / TARGET_FPS)));

    let weight = Weight::new(20.0, 20.0);
    info!(
        "window {}x{}, weight mass {} radius {}",
        W, H, weight.mass, weight.radius
    );

    let mut pendulum = Pendulum::new(
        Vec2::new(W as f32 * 0.5, H as f32 * 0.5),
        weight,
        vec![Segment::new(100.0, 0.0), Segment::new(100.0, 0.0)],
    );
    info!("chain of {} segments", pendulum.segments().len());

    let mut canvas = Canvas::new(W, H);
    while win.is_open() && !win.is_key_down(Key::Escape) {
        pendulum.update();

        canvas.clear(Color::BLACK);
        pendulum.draw(&mut canvas);

        // presents the frame, reached unconditionally each iteration
        win.update_with_buffer(canvas.buffer(), W, H)?;
    }

    info!("window closed");
    Ok(())
}
