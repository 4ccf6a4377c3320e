#![allow(dead_code)]

use envbind::Bind;

#[derive(Default, Bind)]
enum Config {
    #[default]
    Empty,
}

fn main() {}
