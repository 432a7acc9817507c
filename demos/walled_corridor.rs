//! Walled-corridor demo: build a 20x20 field with a C-shaped wall around
//! the start, find the shortest way out and around, and print the result.

use wayfield_core::{Field, Point};
use wayfield_paths::PathFinder;

const WIDTH: i32 = 20;
const HEIGHT: i32 = 20;

fn main() {
    let mut field = Field::new(WIDTH, HEIGHT);

    field.place_start(Point::new(2, 10));
    field.place_end(Point::new(17, 10));
    field.place_border_range(10, 7, 10, 14);
    field.place_border_range(0, 7, 10, 7);
    field.place_border_range(2, 14, 10, 14);
    field.place_border_range(7, 14, 7, 17);
    field.place_border_range(10, 14, 17, 14);
    field.place_border_range(12, 12, 19, 12);

    let mut finder = PathFinder::new();
    match finder.find_path(&field) {
        Some(path) => {
            field.mark_path(&path);
            println!("{field}");
        }
        None => println!("no path found"),
    }
}
