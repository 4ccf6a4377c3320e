#![allow(dead_code)]

use envbind::Bind;

#[derive(Default, Bind)]
struct Config {
    #[env(default = 8080)]
    pub port: u16,
}

fn main() {}
