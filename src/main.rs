use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use turtledraw::{Error, Rgba, Turtle};

fn run(out: &str) -> Result<(), Error> {
    let mut turtle = Turtle::new();
    turtle.set_width(3.0);

    for i in 0..24 {
        let color = match i % 3 {
            0 => Rgba::BLACK,
            1 => Rgba::RED,
            _ => Rgba::BLUE,
        };
        turtle.set_color(color);
        turtle.forward(12.0 + 9.0 * i as f64);
        turtle.rotate(90.0);
    }

    turtle.save(out)
}

fn main() {
    let out = "spiral.png";

    if let Err(e) = run(out) {
        let mut stderr = StandardStream::stderr(ColorChoice::Auto);
        stderr
            .set_color(
                ColorSpec::new()
                    .set_fg(Some(Color::Red))
                    .set_bold(true)
                    .set_intense(true),
            )
            .ok();
        writeln!(stderr, "While writing '{out}':").ok();
        writeln!(stderr, "{e}").ok();
        stderr.reset().ok();
    }
}
