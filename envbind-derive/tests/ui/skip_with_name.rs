#![allow(dead_code)]

use envbind::Bind;

#[derive(Default, Bind)]
struct Config {
    #[env(skip, name = "ONLINE")]
    pub online: bool,
}

fn main() {}
