#![allow(dead_code)]

use envbind::Bind;

#[derive(Default, Bind)]
struct Port(pub u16);

fn main() {}
